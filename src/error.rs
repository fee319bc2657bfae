//! Errors raised while wiring page behaviors to the DOM.
//!
//! Missing elements are not errors: a behavior whose elements are absent is
//! skipped. These variants cover a broken environment or a bad selector.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BehaviorError {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
    #[error("failed to attach '{event}' listener: {reason}")]
    Listener { event: String, reason: String },
    #[error("failed to set style '{property}': {reason}")]
    Style { property: String, reason: String },
}

pub type Result<T> = std::result::Result<T, BehaviorError>;

pub(crate) fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

impl BehaviorError {
    pub(crate) fn selector(selector: &str, value: JsValue) -> Self {
        Self::Selector {
            selector: selector.to_string(),
            reason: js_reason(&value),
        }
    }

    pub(crate) fn listener(event: &str, value: JsValue) -> Self {
        Self::Listener {
            event: event.to_string(),
            reason: js_reason(&value),
        }
    }

    pub(crate) fn style(property: &str, value: JsValue) -> Self {
        Self::Style {
            property: property.to_string(),
            reason: js_reason(&value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let error = BehaviorError::Selector {
            selector: "a[href".to_string(),
            reason: "SyntaxError".to_string(),
        };
        assert_eq!(error.to_string(), "invalid selector 'a[href': SyntaxError");

        let error = BehaviorError::Listener {
            event: "scroll".to_string(),
            reason: "detached".to_string(),
        };
        assert_eq!(error.to_string(), "failed to attach 'scroll' listener: detached");

        assert_eq!(BehaviorError::NoWindow.to_string(), "no global window object");
    }
}
