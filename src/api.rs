//! Wire types and transport for the recognition service's `/calculate` endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::Config;
use crate::error::SubmitError;
use crate::model::VariableBindings;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculateRequest {
    /// `data:image/png;base64,...`
    pub image: String,
    pub dict_of_vars: VariableBindings,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CalculateRecord {
    pub expr: String,
    #[serde(deserialize_with = "string_or_number")]
    pub result: String,
    #[serde(default)]
    pub assign: bool,
}

/// The service has been seen answering both with a bare list and with the
/// list under `data`; either way callers get one record list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CalculateResponse {
    Records(Vec<CalculateRecord>),
    Wrapped { data: Vec<CalculateRecord> },
}

impl CalculateResponse {
    fn into_records(self) -> Vec<CalculateRecord> {
        match self {
            CalculateResponse::Records(r) => r,
            CalculateResponse::Wrapped { data } => data,
        }
    }
}

fn string_or_number<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(de)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for result, got {other}"
        ))),
    }
}

pub fn parse_response(body: &str) -> Result<Vec<CalculateRecord>, SubmitError> {
    let parsed: CalculateResponse = serde_json::from_str(body)?;
    Ok(parsed.into_records())
}

impl CalculateRequest {
    pub fn new(image: String, bindings: &VariableBindings) -> Self {
        Self {
            image,
            dict_of_vars: bindings.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, SubmitError> {
        serde_json::to_string(self).map_err(|e| SubmitError::Encode(e.to_string()))
    }
}

/// One POST, no retry and no timeout.
pub async fn post_calculate(
    config: &Config,
    request: &CalculateRequest,
) -> Result<Vec<CalculateRecord>, SubmitError> {
    let window = web_sys::window().ok_or(SubmitError::NoWindow)?;
    let body = request.to_json()?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    let req = Request::new_with_str_and_init(&config.calculate_url(), &opts)
        .map_err(SubmitError::transport)?;
    req.headers()
        .set("Content-Type", "application/json")
        .map_err(SubmitError::transport)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(SubmitError::transport)?;
    let resp: Response = resp_value.dyn_into().map_err(SubmitError::transport)?;
    if !resp.ok() {
        return Err(SubmitError::Status(resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(SubmitError::transport)?)
        .await
        .map_err(SubmitError::transport)?;
    let text = text
        .as_string()
        .ok_or_else(|| SubmitError::Decode("response body is not text".into()))?;
    log::debug!("calculate response: {text}");
    parse_response(&text)
}
