/// HTTP client for the feedback and suggestion services.

use serde::Deserialize;
use thiserror::Error;
use url::form_urlencoded;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub const LIKE_PATH: &str = "/like_product";
pub const DISLIKE_PATH: &str = "/dislike_product";
pub const SUGGEST_PATH: &str = "/suggest";

/// Uniform error contract for every network call site. Callers log these
/// and move on; nothing is retried and nothing reaches the page.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("invalid response payload: {0}")]
    Decode(String),
    #[error("browser environment unavailable: {0}")]
    Dom(String),
}

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

/// Acknowledgement payload from the feedback service. Decoded leniently;
/// only logged, never shown to the user.
#[derive(Debug, Deserialize)]
pub struct FeedbackAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub new_score: Option<i64>,
}

/// Form body for a feedback POST. The identifier is percent-encoded so that
/// reserved characters round-trip.
pub fn feedback_body(product_id: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("product_id", product_id)
        .finish()
}

/// Request URL for a suggestion query. The old page forwarded raw user text
/// into the query position, which breaks on `&`, `#` and `%`; the query is
/// encoded here.
pub fn suggest_url(query: &str) -> String {
    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair("query", query)
        .finish();
    format!("{SUGGEST_PATH}?{params}")
}

/// Parse a suggestion response body as an ordered list of strings.
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Dom("no window".to_string()))?;
    let resp_js = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| ApiError::Network(js_err(e)))?;
    let resp: Response = resp_js
        .dyn_into()
        .map_err(|e| ApiError::Network(js_err(e)))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

/// POST a feedback signal and decode the acknowledgement.
pub async fn post_feedback(path: &str, product_id: &str) -> Result<FeedbackAck, ApiError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&feedback_body(product_id)));

    let request =
        Request::new_with_str_and_init(path, &init).map_err(|e| ApiError::Network(js_err(e)))?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(|e| ApiError::Network(js_err(e)))?;

    let resp = send(&request).await?;
    let body_js = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(js_err(e)))?)
        .await
        .map_err(|e| ApiError::Decode(js_err(e)))?;
    serde_wasm_bindgen::from_value(body_js).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET suggestions for a non-empty query.
pub async fn get_suggestions(query: &str) -> Result<Vec<String>, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");

    let request = Request::new_with_str_and_init(&suggest_url(query), &init)
        .map_err(|e| ApiError::Network(js_err(e)))?;

    let resp = send(&request).await?;
    let text_js = JsFuture::from(resp.text().map_err(|e| ApiError::Decode(js_err(e)))?)
        .await
        .map_err(|e| ApiError::Decode(js_err(e)))?;
    let body = text_js
        .as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))?;
    parse_suggestions(&body)
}
