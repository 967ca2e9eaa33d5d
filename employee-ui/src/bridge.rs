use employee_core::{FetchError, HttpClient, HttpResponse};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// `HttpClient` backed by the browser's `fetch`.
pub struct FetchClient;

fn describe(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

impl HttpClient for FetchClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let window =
            web_sys::window().ok_or_else(|| FetchError::Network("window not available".into()))?;
        let value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| FetchError::Network(describe(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| FetchError::Network("fetch did not resolve to a Response".into()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| FetchError::Decode(describe(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| FetchError::Decode(describe(&e)))?;

        Ok(HttpResponse {
            status,
            body: body.as_string().unwrap_or_default(),
        })
    }
}
