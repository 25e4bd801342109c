/// web-sys lookup helpers for the two elements the glue owns.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

/// List container the suggestion dropdown renders into.
pub const SUGGESTIONS_BOX_ID: &str = "suggestions-box";

/// Text input a clicked suggestion is copied into.
pub const SEARCH_INPUT_ID: &str = "search-input";

pub fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_string())
}

pub fn suggestions_box(document: &Document) -> Result<Element, String> {
    document
        .get_element_by_id(SUGGESTIONS_BOX_ID)
        .ok_or_else(|| format!("#{SUGGESTIONS_BOX_ID} not found"))
}

pub fn search_input(document: &Document) -> Result<HtmlInputElement, String> {
    document
        .get_element_by_id(SEARCH_INPUT_ID)
        .ok_or_else(|| format!("#{SEARCH_INPUT_ID} not found"))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| format!("#{SEARCH_INPUT_ID} is not a text input"))
}
