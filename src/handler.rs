//! Request envelope for the recipe scraping function.
//!
//! The caller always gets a well-formed [`Response`] with status 200; the
//! presence of an `error` key inside `data` is the only failure signal.

use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::ScraperConfig;
use crate::fetch::Fetcher;
use crate::model::RecipeRecord;
use crate::pipeline::Scraper;
use crate::validate;

/// Query parameter carrying the recipe URL
pub const URL_PARAMETER: &str = "parameter1";
/// Message returned in `data.error` for every unusable scrape
pub const ERROR_MESSAGE: &str = "error getting recipe data";
/// Placeholder `body` kept for consumers of the existing response shape
pub const LEGACY_BODY: &str = "\"Hello from Lambda!\"";

/// Incoming request event
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Request {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl Request {
    pub fn for_url(url: impl Into<String>) -> Self {
        let mut params = HashMap::new();
        params.insert(URL_PARAMETER.to_string(), url.into());
        Self {
            query_string_parameters: Some(params),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()?
            .get(URL_PARAMETER)
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Recipe(RecipeRecord),
    Error { error: String },
}

impl ResponseData {
    pub fn error() -> Self {
        ResponseData::Error {
            error: ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseData::Error { .. })
    }
}

/// Outgoing response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub param1: Option<String>,
    pub data: ResponseData,
}

/// Scrape the URL named in `request` and shape the response.
///
/// Fetch failures, fatal missing structure and incomplete records all map
/// to the same error payload.
pub fn handle<F: Fetcher>(
    request: &Request,
    scraper: &Scraper<F>,
    config: &ScraperConfig,
) -> Response {
    let url = request.url();
    let data = match url {
        None => {
            warn!("Request has no {} parameter", URL_PARAMETER);
            ResponseData::error()
        }
        Some(url) => match scraper.scrape_page(url) {
            Ok(record) => match validate::check(&record) {
                Ok(()) => {
                    info!("Recipe record is valid for {}", url);
                    ResponseData::Recipe(record)
                }
                Err(failure) => {
                    warn!("Recipe record for {} failed validation: {}", url, failure);
                    ResponseData::error()
                }
            },
            Err(e) => {
                error!("Could not build recipe record for {}: {}", url, e);
                ResponseData::error()
            }
        },
    };

    Response {
        status_code: 200,
        body: config.legacy_body.then(|| LEGACY_BODY.to_string()),
        param1: url.map(str::to_string),
        data,
    }
}
