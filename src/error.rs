//! Errors raised while wiring page behavior onto the document.
//!
//! None of these are fatal: each enhancement logs its failure and the rest of
//! the page keeps working.

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("no global window")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,

    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("DOM call failed: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

impl SiteError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingWindow => "missing_window",
            Self::MissingDocument => "missing_document",
            Self::MissingElement(_) => "missing_element",
            Self::Js(_) => "js",
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &wasm_bindgen::JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SiteError> for wasm_bindgen::JsValue {
    fn from(error: SiteError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_selector() {
        let error = SiteError::MissingElement("#imageModal".to_string());

        assert_eq!(error.to_string(), "missing element: #imageModal");
        assert_eq!(error.kind(), "missing_element");
    }
}
