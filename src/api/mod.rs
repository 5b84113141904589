//! Backend API
//!
//! The field endpoints of the REST backend, behind a trait so screen
//! workflows can run against any implementation.

mod client;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;
use crate::models::{Field, FieldId, NewFieldRecord, ReverseGeocode};

pub use client::HttpFieldsApi;

/// Field endpoints
///
/// Futures are `!Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait FieldsApi {
    /// `GET /api/fields/`, payload returned as-is so the caller decides what a bad shape means
    async fn list_fields(&self) -> ApiResult<Value>;

    /// `POST /api/fields/`
    async fn create_field(&self, record: &NewFieldRecord) -> ApiResult<Field>;

    /// `DELETE /api/fields/{id}/`
    async fn delete_field(&self, id: FieldId) -> ApiResult<()>;

    /// `POST /api/fields/{id}/reverse-geocode/` with `{geometry}`
    async fn reverse_geocode(&self, id: FieldId, geometry: &Value) -> ApiResult<ReverseGeocode>;
}
