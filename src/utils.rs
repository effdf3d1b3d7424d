use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use crate::error::HistoryError;

pub async fn safe_invoke(cmd: &str, args: JsValue) -> Result<JsValue, HistoryError> {
    let window = window().ok_or_else(|| HistoryError::HostUnavailable("No window".to_string()))?;
    let tauri = Reflect::get(&window, &"__TAURI__".into())
        .ok()
        .filter(|v| !v.is_undefined())
        .ok_or_else(|| HistoryError::HostUnavailable("Tauri not found".to_string()))?;
    let core = Reflect::get(&tauri, &"core".into())
        .map_err(|_| HistoryError::HostUnavailable("Tauri core not found".to_string()))?;
    let invoke_fn = Reflect::get(&core, &"invoke".into())
        .map_err(|_| HistoryError::HostUnavailable("invoke not found".to_string()))?;

    let func = js_sys::Function::from(invoke_fn);
    let promise = func
        .call2(&JsValue::NULL, &cmd.into(), &args)
        .map_err(|e| HistoryError::HostUnavailable(js_error_text(&e)))?;

    JsFuture::from(Promise::from(promise))
        .await
        .map_err(|js_err| HistoryError::FetchFailure(js_error_text(&js_err)))
}

/// Best readable text for a rejected host call: an `{ error }` payload,
/// a bare string, or the JSON form of whatever came back.
pub fn js_error_text(value: &JsValue) -> String {
    Reflect::get(value, &"error".into())
        .ok()
        .and_then(|field| field.as_string())
        .or_else(|| value.as_string())
        .or_else(|| js_sys::JSON::stringify(value).ok().and_then(|json| json.as_string()))
        .unwrap_or_else(|| "host returned an unreadable error".to_string())
}

pub fn is_first_vowel(s: &str) -> bool {
    s.chars()
        .next()
        .map(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .unwrap_or(false)
}

/// "a" or "an" for the word that follows.
pub fn article_for(word: &str) -> &'static str {
    if is_first_vowel(word) {
        "an"
    } else {
        "a"
    }
}

/// `0x1234abcd...ef90` style shortening for ids and hashes.
pub fn shorten_id(id: &str, keep: usize) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= keep * 2 + 3 {
        return id.to_string();
    }
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}...{}", head, tail)
}

const SAMPLE_TEXT: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa.",
];

/// Filler sentence for showcase content.
pub fn random_text() -> &'static str {
    let mut byte = [0u8; 1];
    if getrandom::getrandom(&mut byte).is_err() {
        return SAMPLE_TEXT[0];
    }
    SAMPLE_TEXT[byte[0] as usize % SAMPLE_TEXT.len()]
}
