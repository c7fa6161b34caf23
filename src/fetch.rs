//! Blocking HTTP GETs for pages and images.

use std::borrow::Cow;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::constants::{MAX_BODY_BYTES, USER_AGENT};
use crate::error::TransportError;

/// A successfully fetched (2xx) response body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FetchedPage {
    /// The URL that was requested.
    pub url: String,
    /// HTTP status of the response.
    pub status: u16,
    /// Raw response body.
    pub bytes: Vec<u8>,
}

impl FetchedPage {
    /// The body as text, invalid UTF-8 is replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

/// Something that can GET a URL.
///
/// Any failure (bad URL, network, non-2xx) is a [`TransportError`]; there are no retries.
pub trait Fetcher {
    /// Fetches `url`.
    fn get(&self, url: &str) -> Result<FetchedPage, TransportError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn get(&self, url: &str) -> Result<FetchedPage, TransportError> {
        (**self).get(url)
    }
}

/// [`Fetcher`] backed by a `ureq` agent.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// Builds a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self { agent }
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<FetchedPage, TransportError> {
        let parsed = Url::parse(url).map_err(|err| TransportError::new(url, err))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TransportError::new(
                url,
                format!("unsupported scheme {}", parsed.scheme()),
            ));
        }

        debug!("GET {url}");
        // ureq turns non-2xx responses into errors for us
        let mut response = self
            .agent
            .get(parsed.as_str())
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|err| TransportError::new(url, err))?;
        let status = response.status().as_u16();
        let bytes = response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()
            .map_err(|err| TransportError::new(url, err))?;
        debug!("GET {url} -> {status} ({} bytes)", bytes.len());

        Ok(FetchedPage {
            url: url.to_string(),
            status,
            bytes,
        })
    }
}
