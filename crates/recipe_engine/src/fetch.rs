use std::time::Duration;

use futures_util::StreamExt;
use recipe_core::Meal;
use recipe_logging::{recipe_debug, API_TARGET};
use reqwest::Url;

use crate::record::decode_first_meal;
use crate::{ApiError, FailureKind, MealQuery};

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    /// `None` waits as long as the OS allows.
    pub connect_timeout: Option<Duration>,
    /// `None` never times a request out.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 2 * 1024 * 1024,
            user_agent: concat!("recipe-browser/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Issues exactly one request per call and decodes the first meal of the reply.
#[async_trait::async_trait]
pub trait MealSource: Send + Sync {
    async fn fetch(&self, query: &MealQuery) -> Result<Option<Meal>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestMealSource {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl ReqwestMealSource {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Full request URL for `query`, with the parameter percent-encoded.
    pub fn request_url(&self, query: &MealQuery) -> Result<Url, ApiError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{}", query.endpoint()))
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if let Some((key, value)) = query.param() {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ApiError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ApiError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl MealSource for ReqwestMealSource {
    async fn fetch(&self, query: &MealQuery) -> Result<Option<Meal>, ApiError> {
        let url = self.request_url(query)?;
        recipe_debug!(target: API_TARGET, "GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = self.read_body(response).await?;
        decode_first_meal(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
