use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("frame sequence needs at least one frame")]
    ZeroFrames,
    #[error("frame sequence scroll range must be greater than zero")]
    ZeroScrollRange,
    #[error("failed to parse embedded {name} data: {source}")]
    Catalog {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}
