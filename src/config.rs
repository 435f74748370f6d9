//! Optional page-level settings, embedded as
//! `<script id="log-viewer-config" type="application/json">`.

use serde::Deserialize;

use crate::error::ViewerError;

pub const CONFIG_ELEMENT_ID: &str = "log-viewer-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Prepended to `<path>:<line>` for the line link.
    pub editor_uri_prefix: String,
    /// How long the copy button shows its confirmation.
    pub copy_feedback_ms: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            editor_uri_prefix: "vscode://file/".to_string(),
            copy_feedback_ms: 1500,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Read the embedded block; defaults when absent or malformed.
    pub fn from_document(doc: &web_sys::Document) -> Self {
        let Some(el) = doc.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let json = el.text_content().unwrap_or_default();
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                gloo::console::error!(format!("{e}; using defaults"));
                Self::default()
            }
        }
    }
}
