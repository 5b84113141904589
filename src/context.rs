//! Application Context
//!
//! Configuration and backend client, provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::HttpFieldsApi;
use crate::config::AppConfig;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub api: Arc<HttpFieldsApi>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let api = HttpFieldsApi::new(&config);
        Self { config: Arc::new(config), api: Arc::new(api) }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
