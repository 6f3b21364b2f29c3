//! `gloo_net` implementation of [`FormTransport`]

use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

use crate::core::form::{EndpointResponse, FormTransport, SubmitError};

/// Posts multipart form data and asks for a JSON reply
pub struct GlooFormTransport;

impl FormTransport for GlooFormTransport {
    async fn post(
        &self,
        endpoint: &str,
        fields: &[(String, String)],
    ) -> Result<EndpointResponse, SubmitError> {
        let data = FormData::new().map_err(|_| SubmitError::Transport("FormData unavailable".into()))?;
        for (name, value) in fields {
            let _ = data.append_with_str(name, value);
        }

        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(data)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        Ok(EndpointResponse {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

/// Text fields of a form, in document order
pub fn form_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    entries
        .flatten()
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}
