use yew::prelude::*;

use crate::history::{page_count, Page};

#[derive(Properties, PartialEq)]
pub struct SimplePaginationProps {
    pub count: usize,
    pub rows_per_page: usize,
    pub page: usize,
    pub on_change_page: Callback<usize>,
}

/// "1-4 of 9" label for the current page.
pub fn range_label(count: usize, rows_per_page: usize, page: usize) -> String {
    let range = Page::new(page, rows_per_page).visible_range(count);
    if range.is_empty() {
        format!("0 of {}", count)
    } else {
        format!("{}-{} of {}", range.start + 1, range.end, count)
    }
}

/// Page the control should report back when `requested` no longer exists,
/// or `None` when it is still in range.
pub fn snap_back_target(requested: usize, count: usize, rows_per_page: usize) -> Option<usize> {
    let clamped = Page::new(requested, rows_per_page).clamped(count).index;
    (clamped != requested).then_some(clamped)
}

#[function_component(SimplePagination)]
pub fn simple_pagination(props: &SimplePaginationProps) -> Html {
    let pages = page_count(props.count, props.rows_per_page);
    let current = Page::new(props.page, props.rows_per_page).clamped(props.count).index;
    let has_prev = current > 0;
    let has_next = current + 1 < pages;

    // Snap back when the list shrinks under the selected page.
    {
        let on_change_page = props.on_change_page.clone();
        let target = snap_back_target(props.page, props.count, props.rows_per_page);
        use_effect_with(target, move |target| {
            if let Some(page) = *target {
                on_change_page.emit(page);
            }
            || ()
        });
    }

    let on_prev = props.on_change_page.reform(move |_: MouseEvent| current.saturating_sub(1));
    let on_next = props.on_change_page.reform(move |_: MouseEvent| current + 1);

    html! {
        <div class="pagination" aria-label="Transactions pagination">
            <span class="pagination-label">
                { range_label(props.count, props.rows_per_page, current) }
            </span>
            <button
                type="button"
                class="btn btn-sm pagination-prev"
                aria-label="Previous page"
                disabled={!has_prev}
                onclick={on_prev}
            >
                { "‹" }
            </button>
            <button
                type="button"
                class="btn btn-sm pagination-next"
                aria-label="Next page"
                disabled={!has_next}
                onclick={on_next}
            >
                { "›" }
            </button>
        </div>
    }
}
