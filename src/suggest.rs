/// Suggestion fetch and render for the template-driven search input.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::{api, dom};

/// What a keystroke means for the suggestion box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    /// Empty query: clear the box without touching the network.
    Clear,
    /// Non-empty query: fetch and re-render.
    Fetch(String),
}

/// Empty means exactly length zero. Whitespace-only queries still fetch,
/// matching the page's historical behavior.
pub fn classify_query(query: &str) -> QueryAction {
    if query.is_empty() {
        QueryAction::Clear
    } else {
        QueryAction::Fetch(query.to_string())
    }
}

thread_local! {
    /// Sequence number of the most recently issued suggestion request.
    /// Keystrokes are not debounced and in-flight requests are not
    /// cancelled, so overlapping responses can arrive in any order; a
    /// response carrying an older number is stale and never renders.
    static LATEST: Cell<u64> = const { Cell::new(0) };
}

fn next_seq() -> u64 {
    LATEST.with(|l| {
        let seq = l.get() + 1;
        l.set(seq);
        seq
    })
}

fn is_latest(seq: u64) -> bool {
    LATEST.with(|l| l.get() == seq)
}

/// Entry point for input events on the template's search field.
pub fn run(query: &str) {
    match classify_query(query) {
        QueryAction::Clear => {
            // Bump the sequence so an in-flight response cannot repopulate
            // a box the user just emptied.
            let _ = next_seq();
            if let Err(e) = clear() {
                log::error!("failed to clear suggestions: {e}");
            }
        }
        QueryAction::Fetch(query) => {
            let seq = next_seq();
            spawn_local(async move {
                match api::get_suggestions(&query).await {
                    Ok(items) if is_latest(seq) => {
                        if let Err(e) = render_suggestions(&items) {
                            log::error!("failed to render suggestions: {e}");
                        }
                    }
                    Ok(_) => {
                        log::debug!("dropping stale suggestions for {query:?}");
                    }
                    Err(e) => {
                        log::error!("suggestion request for {query:?} failed: {e}");
                    }
                }
            });
        }
    }
}

/// Empty the suggestion box.
pub fn clear() -> Result<(), String> {
    let document = dom::document()?;
    dom::suggestions_box(&document)?.set_inner_html("");
    Ok(())
}

/// Replace the suggestion box contents with one clickable item per string,
/// in the order given. Clicking an item copies its text into the search
/// input and closes the box.
pub fn render_suggestions(items: &[String]) -> Result<(), String> {
    let document = dom::document()?;
    let container = dom::suggestions_box(&document)?;
    container.set_inner_html("");

    for item in items {
        let li: HtmlElement = document
            .create_element("li")
            .map_err(|e| format!("create_element failed: {e:?}"))?
            .dyn_into()
            .map_err(|_| "li is not an HtmlElement".to_string())?;
        li.set_text_content(Some(item));
        li.set_attribute("style", "padding: 10px; cursor: pointer;")
            .map_err(|e| format!("set_attribute failed: {e:?}"))?;

        let text = item.clone();
        let onclick = Closure::<dyn Fn()>::new(move || {
            if let Err(e) = pick(&text) {
                log::error!("failed to apply suggestion: {e}");
            }
        });
        li.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        // Leaks the handler; suggestion lists are small and rebuilt
        // wholesale on every keystroke.
        onclick.forget();

        container
            .append_child(&li)
            .map_err(|e| format!("append_child failed: {e:?}"))?;
    }

    Ok(())
}

/// Copy a clicked suggestion into the search field and close the box.
fn pick(text: &str) -> Result<(), String> {
    let document = dom::document()?;
    dom::search_input(&document)?.set_value(text);
    dom::suggestions_box(&document)?.set_inner_html("");
    Ok(())
}
