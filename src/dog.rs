//! Looking up dogs.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::config::DogConfig;
use crate::error::DogError;
use crate::extract::{extract_description, extract_image_reference, fetch_image};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::names::to_lookup_form;
use crate::status_codes::{self, Status};

/// An HTTP status dog.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct HttpDog {
    /// Status code, eg `404`.
    pub code: u16,
    /// Display name, eg `Not Found`.
    pub name: String,
    /// The page the dog was scraped from.
    pub url: String,
    /// What the status code means.
    pub description: String,
    /// Raw image bytes, usually a JPEG.
    #[serde(serialize_with = "serialize_base64")]
    pub image: Vec<u8>,
    /// Where the image was downloaded from.
    pub image_url: String,
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
}

impl HttpDog {
    /// File extension matching the image's format, if it's recognisable.
    pub fn image_extension(&self) -> Option<&'static str> {
        image::guess_format(&self.image)
            .ok()
            .and_then(|format| format.extensions_str().first().copied())
    }

    /// Writes the image to `path`, or to `<path>/<code>.<ext>` when `path` is a directory.
    pub fn save_image(&self, path: &Path) -> std::io::Result<PathBuf> {
        let target = if path.is_dir() {
            let extension = self.image_extension().unwrap_or("bin");
            path.join(format!("{}.{extension}", self.code))
        } else {
            path.to_path_buf()
        };
        std::fs::write(&target, &self.image)?;
        debug!("Wrote {} bytes to {}", self.image.len(), target.display());
        Ok(target)
    }
}

impl std::fmt::Display for HttpDog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&HttpDog> for u16 {
    fn from(dog: &HttpDog) -> Self {
        dog.code
    }
}

impl AsRef<[u8]> for HttpDog {
    fn as_ref(&self) -> &[u8] {
        &self.image
    }
}

impl From<HttpDog> for Vec<u8> {
    fn from(dog: HttpDog) -> Self {
        dog.image
    }
}

/// Fetches dogs from a dog site.
///
/// Holds no per-lookup state, so one instance can serve any number of lookups.
#[derive(Clone, Debug)]
pub struct DogLookup<F = HttpFetcher> {
    base_url: String,
    fetcher: F,
}

impl DogLookup<HttpFetcher> {
    /// Builds a lookup that fetches over HTTP.
    pub fn new(config: &DogConfig) -> Self {
        Self::with_fetcher(config, HttpFetcher::new(config.timeout))
    }
}

impl Default for DogLookup<HttpFetcher> {
    fn default() -> Self {
        Self::new(&DogConfig::default())
    }
}

impl<F: Fetcher> DogLookup<F> {
    /// Builds a lookup that uses `fetcher` for every request.
    pub fn with_fetcher(config: &DogConfig, fetcher: F) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            fetcher,
        }
    }

    /// Gets the dog for a status code.
    ///
    /// Codes not in the catalog fail with [`DogError::InvalidDog`] without
    /// touching the network.
    pub fn by_code(&self, code: u16) -> Result<HttpDog, DogError> {
        let status = status_codes::lookup_by_code(code)
            .ok_or_else(|| DogError::invalid_code(code))?;
        self.fetch(status)
    }

    /// Gets the dog for a status name, eg `"not found"` or `"NOT_FOUND"`.
    pub fn by_name(&self, name: &str) -> Result<HttpDog, DogError> {
        let name = to_lookup_form(name);
        let status =
            status_codes::lookup_by_name(&name).ok_or_else(|| DogError::invalid_name(&name))?;
        self.fetch(status)
    }

    fn fetch(&self, status: &Status) -> Result<HttpDog, DogError> {
        let url = format!("{}{}", self.base_url, status.code);
        info!("Fetching dog {} from {url}", status.code);

        let page = self.fetcher.get(&url)?;
        let html = page.text();
        let description = extract_description(&html)?;
        let image_url = extract_image_reference(&html, &self.base_url)?;
        debug!("Dog {} image at {image_url}", status.code);
        let image = fetch_image(&self.fetcher, &image_url)?;

        Ok(HttpDog {
            code: status.code,
            name: status.display_name(),
            url,
            description,
            image,
            image_url,
        })
    }
}

/// Gets the dog for `code` from httpstatusdogs.com.
pub fn dog_by_code(code: u16) -> Result<HttpDog, DogError> {
    DogLookup::default().by_code(code)
}

/// Gets the dog for status `name` from httpstatusdogs.com.
pub fn dog_by_name(name: &str) -> Result<HttpDog, DogError> {
    DogLookup::default().by_name(name)
}
