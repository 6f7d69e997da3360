//! Mount failures
//!
//! Missing markup is not an error: components report it as `Ok(None)` and are
//! simply not mounted. [`MountError`] covers host failures that should be
//! logged.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    /// `getContext("2d")` returned something that is not a 2D context
    #[error("canvas context is not a CanvasRenderingContext2D")]
    NoCanvasContext,

    #[error("JS error: {0}")]
    Js(String),

    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        MountError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = folio_ui::PageConfig::from_json("{ nope").unwrap_err();
        let mount: MountError = err.into();
        assert!(mount.to_string().starts_with("invalid page config:"));
    }

    #[test]
    fn test_host_error_messages() {
        assert_eq!(MountError::NoBody.to_string(), "document has no body");
        assert_eq!(
            MountError::Js("boom".to_string()).to_string(),
            "JS error: boom"
        );
    }
}
