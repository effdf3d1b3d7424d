mod app;
mod components;
pub mod chains;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod store;
pub mod utils;
pub mod wallet;
use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
