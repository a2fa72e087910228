//! Error types shared by every enhancement.
//!
//! ERROR HANDLING
//! ==============
//! Nothing in this crate is fatal. Each variant is produced at a containment
//! boundary (selector lookup, fragment fetch, config parse) where it is logged
//! and the affected feature degrades to a no-op.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure raised by one of the page enhancements.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("failed to load {fragment}: {status} {status_text}")]
    FragmentStatus {
        fragment: String,
        status: u16,
        status_text: String,
    },

    #[error("error loading {fragment}: {reason}")]
    FragmentTransport { fragment: String, reason: String },

    #[error("target element {selector} not found")]
    MissingPlaceholder { selector: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PortfolioError {
    /// Whether this error came out of the fragment load phase.
    pub fn is_fragment_error(&self) -> bool {
        matches!(
            self,
            Self::FragmentStatus { .. } | Self::FragmentTransport { .. } | Self::MissingPlaceholder { .. }
        )
    }
}

#[cfg(feature = "hydrate")]
impl PortfolioError {
    /// Convert a thrown JS value into a readable reason string.
    pub(crate) fn describe_js(value: &wasm_bindgen::JsValue) -> String {
        value
            .as_string()
            .or_else(|| match js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message")) {
                Ok(msg) => msg.as_string(),
                Err(_) => None,
            })
            .unwrap_or_else(|| format!("{value:?}"))
    }
}
