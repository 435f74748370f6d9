use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the viewer onto the page.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("page has no <h1> to anchor the filter panel")]
    MissingHeading,
    #[error("log entry class {class_name:?} carries no level-1..4 marker")]
    MalformedLevel { class_name: String },
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("invalid viewer config: {0}")]
    Config(#[from] serde_json::Error),
}

impl ViewerError {
    /// The heading exists but is not attached under any parent node.
    pub fn detached_heading() -> Self {
        ViewerError::Dom("heading has no parent".to_string())
    }
}

impl From<JsValue> for ViewerError {
    fn from(value: JsValue) -> Self {
        ViewerError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<ViewerError> for JsValue {
    fn from(err: ViewerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_heading_is_not_missing_heading() {
        let err = ViewerError::detached_heading();
        assert!(matches!(err, ViewerError::Dom(ref m) if m == "heading has no parent"));
        assert_eq!(err.to_string(), "DOM call failed: heading has no parent");
        assert_ne!(err.to_string(), ViewerError::MissingHeading.to_string());
    }
}
