//! HTTP Client
//!
//! `FieldsApi` over `fetch`, with session cookies included and the CSRF
//! header on mutating requests.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;
use web_sys::RequestCredentials;

use super::FieldsApi;
use crate::config::AppConfig;
use crate::csrf::{CookieCsrfProvider, CsrfTokenProvider, CSRF_HEADER};
use crate::error::{ApiError, ApiResult};
use crate::models::{Field, FieldId, NewFieldRecord, ReverseGeocode};

#[derive(Serialize)]
struct ReverseGeocodeArgs<'a> {
    geometry: &'a Value,
}

#[derive(Debug, Clone)]
pub struct HttpFieldsApi<P = CookieCsrfProvider> {
    base: String,
    csrf: P,
}

impl HttpFieldsApi<CookieCsrfProvider> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_csrf(config, CookieCsrfProvider)
    }
}

impl<P: CsrfTokenProvider> HttpFieldsApi<P> {
    pub fn with_csrf(config: &AppConfig, csrf: P) -> Self {
        Self { base: config.api_base.clone(), csrf }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Credentials included, plus the CSRF header when a token exists
    fn mutating(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.credentials(RequestCredentials::Include);
        match self.csrf.csrf_token() {
            Some(token) => builder.header(CSRF_HEADER, &token),
            None => builder,
        }
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn send(request: Request) -> ApiResult<Response> {
    request.send().await.map_err(transport)
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Status error carrying the server's `error` member when the body has one
async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));
    ApiError::Status { status, message }
}

#[async_trait(?Send)]
impl<P: CsrfTokenProvider> FieldsApi for HttpFieldsApi<P> {
    async fn list_fields(&self) -> ApiResult<Value> {
        let request = Request::get(&self.url("/api/fields/"))
            .credentials(RequestCredentials::Include)
            .build()
            .map_err(transport)?;
        let response = send(request).await?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        read_json(response).await
    }

    async fn create_field(&self, record: &NewFieldRecord) -> ApiResult<Field> {
        let request = self
            .mutating(Request::post(&self.url("/api/fields/")))
            .json(record)
            .map_err(transport)?;
        let response = send(request).await?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        read_json(response).await
    }

    async fn delete_field(&self, id: FieldId) -> ApiResult<()> {
        let request = self
            .mutating(Request::delete(&self.url(&format!("/api/fields/{}/", id))))
            .build()
            .map_err(transport)?;
        let response = send(request).await?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        Ok(())
    }

    async fn reverse_geocode(&self, id: FieldId, geometry: &Value) -> ApiResult<ReverseGeocode> {
        let request = self
            .mutating(Request::post(&self.url(&format!("/api/fields/{}/reverse-geocode/", id))))
            .json(&ReverseGeocodeArgs { geometry })
            .map_err(transport)?;
        let response = send(request).await?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csrf::StaticCsrfToken;

    #[test]
    fn test_urls_join_base_and_path() {
        let config = AppConfig { api_base: "https://farm.example.org".to_string(), ..AppConfig::default() };
        let api = HttpFieldsApi::with_csrf(&config, StaticCsrfToken(None));

        assert_eq!(api.url("/api/fields/"), "https://farm.example.org/api/fields/");
        assert_eq!(api.url(&format!("/api/fields/{}/reverse-geocode/", 4)), "https://farm.example.org/api/fields/4/reverse-geocode/");
    }

    #[test]
    fn test_injected_token_is_used() {
        let api = HttpFieldsApi::with_csrf(&AppConfig::default(), StaticCsrfToken(Some("T0k3n".to_string())));
        assert_eq!(api.csrf.csrf_token().as_deref(), Some("T0k3n"));
    }
}
