/// Catalog UI - browser-side search and feedback glue for the catalog page
/// Built with Rust + WASM + Yew

pub mod api;
pub mod dom;
pub mod feedback;
pub mod notify;
pub mod suggest;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::feedback::Polarity;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// The exported names match the inline handlers in the server-rendered
// templates (onclick="likeProduct(...)", oninput="fetchSuggestions(...)"),
// so the pages keep working without template changes.

#[wasm_bindgen(js_name = likeProduct)]
pub fn like_product(product_id: &str) {
    feedback::submit(Polarity::Like, product_id);
}

#[wasm_bindgen(js_name = dislikeProduct)]
pub fn dislike_product(product_id: &str) {
    feedback::submit(Polarity::Dislike, product_id);
}

#[wasm_bindgen(js_name = fetchSuggestions)]
pub fn fetch_suggestions(query: &str) {
    suggest::run(query);
}

// Start the Yew app for pages that mount the search widget instead of the
// template-rendered input
#[wasm_bindgen(js_name = startSearchWidget)]
pub fn start_search_widget() {
    yew::Renderer::<ui::search::SearchWidget>::new().render();
}
