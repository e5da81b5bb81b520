use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::holidayerror::FetchError;

/// Source of raw listing markup.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Listing page of `year`: `<base_url>/<year>-dates`.
pub fn holiday_page_url(base_url: &str, year: i32) -> String {
    format!("{}/{}-dates", base_url.trim_end_matches('/'), year)
}

/// Blocking HTTP fetcher. Redirects and TLS are left to `reqwest`; no retries.
pub struct HttpFetcher {
    client: Client
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<HttpFetcher, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching holiday listing");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request { url: url.to_owned(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_owned(), status: status.as_u16() });
        }

        response
            .text()
            .map_err(|source| FetchError::Body { url: url.to_owned(), source })
    }
}
