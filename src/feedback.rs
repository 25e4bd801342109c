/// Feedback submission: like/dislike signals for catalog products.

use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::notify;

/// Polarity of a feedback signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Like,
    Dislike,
}

impl Polarity {
    pub fn endpoint(self) -> &'static str {
        match self {
            Polarity::Like => api::LIKE_PATH,
            Polarity::Dislike => api::DISLIKE_PATH,
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Polarity::Like => "Liked",
            Polarity::Dislike => "Disliked",
        }
    }
}

/// User-visible acknowledgement for a successful feedback call.
pub fn ack_message(polarity: Polarity, product_id: &str) -> String {
    format!("{}: {}", polarity.verb(), product_id)
}

/// Fire-and-forget submission. Success shows exactly one toast; any failure
/// is logged and swallowed, never surfaced to the caller.
pub fn submit(polarity: Polarity, product_id: &str) {
    let product_id = product_id.to_string();
    spawn_local(async move {
        match api::post_feedback(polarity.endpoint(), &product_id).await {
            Ok(ack) => {
                log::debug!("feedback ack for {product_id:?}: {ack:?}");
                notify::toast(&ack_message(polarity, &product_id));
            }
            Err(e) => {
                log::error!("feedback request for {product_id:?} failed: {e}");
            }
        }
    });
}
