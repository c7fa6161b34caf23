//! Config handling

use std::time::Duration;

use tracing::log::LevelFilter;
use url::Url;

use crate::constants::{BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::error::TransportError;

/// Sets up logging based on the debug flag
pub fn setup_logging(debug: bool) -> Result<(), Box<std::io::Error>> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut logger = simple_logger::SimpleLogger::new().with_level(level);
    if !debug {
        logger = logger
            .with_module_level("rustls", LevelFilter::Info)
            .with_module_level("ureq", LevelFilter::Warn)
            .with_module_level("ureq_proto", LevelFilter::Warn)
            .with_module_level("html5ever", LevelFilter::Warn)
            .with_module_level("selectors", LevelFilter::Warn);
    }
    logger.init().map_err(|err| {
        eprintln!("Failed to initialize logger: {}", err);
        Box::new(std::io::Error::other(err))
    })
}

/// Where to find the dogs and how long to wait for them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DogConfig {
    base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl DogConfig {
    /// Builds a config pointing at `base_url`, a trailing `/` is added if missing.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let mut url = Url::parse(base_url).map_err(|err| TransportError::new(base_url, err))?;
        if url.cannot_be_a_base() {
            return Err(TransportError::new(base_url, "not usable as a base URL"));
        }
        // the code is appended to the path, so anything after it has to go
        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self {
            base_url: url.into(),
            timeout,
        })
    }

    /// The base URL, always ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for DogConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}
