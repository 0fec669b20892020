use std::future::Future;

use crate::n2yo::{CatalogTle, FetchError};

pub const DEFAULT_BASE_URL: &str = "https://api.n2yo.com/rest/v1/satellite";

pub trait TleSource: Send + Sync {
    fn fetch_tle(&self, satid: u32) -> impl Future<Output = Result<CatalogTle, FetchError>> + Send;
}

pub struct N2yoClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl N2yoClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn tle_url(&self, satid: u32) -> String {
        format!("{}/tle/{}", self.base_url.trim_end_matches('/'), satid)
    }
}

impl TleSource for N2yoClient {
    async fn fetch_tle(&self, satid: u32) -> Result<CatalogTle, FetchError> {
        log::debug!("Fetching TLE for satellite {}", satid);

        let response = self
            .client
            .get(self.tle_url(satid))
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        parse_response(satid, &body)
    }
}

pub fn parse_response(satid: u32, body: &str) -> Result<CatalogTle, FetchError> {
    let parsed: CatalogTle = serde_json::from_str(body)?;
    if parsed.tle.trim().is_empty() {
        return Err(FetchError::EmptyTle(satid));
    }
    Ok(parsed)
}
