use wasm_bindgen::JsValue;

/// Why a Calculate round-trip did not produce results.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("no browser window available")]
    NoWindow,
    #[error("could not encode the drawing: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl SubmitError {
    pub fn transport(v: JsValue) -> Self {
        SubmitError::Transport(js_message(&v))
    }

    pub fn encode(v: JsValue) -> Self {
        SubmitError::Encode(js_message(&v))
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(e: serde_json::Error) -> Self {
        SubmitError::Decode(e.to_string())
    }
}

// Best-effort readable text for a thrown JS value.
fn js_message(v: &JsValue) -> String {
    if let Some(s) = v.as_string() {
        return s;
    }
    js_sys::Reflect::get(v, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{v:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(SubmitError::Status(502).to_string(), "server answered with status 502");
        assert_eq!(
            SubmitError::Transport("offline".into()).to_string(),
            "request failed: offline"
        );
    }

    #[test]
    fn json_errors_become_decode() {
        let err: SubmitError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, SubmitError::Decode(_)));
    }
}
