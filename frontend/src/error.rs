use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("{section}: block {index} has invalid reveal delay {delay}")]
    InvalidDelay {
        section: &'static str,
        index: usize,
        delay: f64,
    },

    #[error("{section}: block {index} delay {delay} is earlier than the previous block ({previous})")]
    DecreasingDelay {
        section: &'static str,
        index: usize,
        previous: f64,
        delay: f64,
    },

    #[error("failed to mount stylesheet: {0}")]
    Style(#[from] stylist::Error),

    #[error("browser API error: {0}")]
    Dom(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
