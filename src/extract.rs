//! Scraping a dog page.
//!
//! The pages look roughly like this, and anything else is a [`ParseError`]:
//!
//! ```html
//! <p class="lead">404 Not Found: The requested resource could not be found</p>
//! <img class="thumbnail" itemprop="image" src="/img/404.jpg">
//! ```

use scraper::{Html, Selector};
use tracing::instrument;

use crate::error::{ParseError, TransportError};
use crate::fetch::Fetcher;

const DESCRIPTION_SELECTOR: &str = "p.lead";
const IMAGE_SELECTOR: &str = r#"img.thumbnail[itemprop="image"]"#;

fn selector(css: &'static str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::InvalidSelector(css))
}

/// Returns the text after the first `:` of the lead paragraph, trimmed.
///
/// If there's no colon the whole paragraph is used.
#[instrument(level = "trace", skip(html), fields(html_size = html.len()))]
pub fn extract_description(html: &str) -> Result<String, ParseError> {
    let document = Html::parse_document(html);
    let lead = document
        .select(&selector(DESCRIPTION_SELECTOR)?)
        .next()
        .ok_or(ParseError::MissingDescription)?;
    let text = lead.text().collect::<String>();
    let description = match text.split_once(':') {
        Some((_, description)) => description,
        None => text.as_str(),
    };
    Ok(description.trim().to_string())
}

/// Returns the absolute URL of the page's dog picture.
///
/// The `src` is root-relative, so a single leading `/` is dropped and the rest
/// appended to `base_url` (which should end with a `/`).
#[instrument(level = "trace", skip(html), fields(html_size = html.len()))]
pub fn extract_image_reference(html: &str, base_url: &str) -> Result<String, ParseError> {
    let document = Html::parse_document(html);
    let image = document
        .select(&selector(IMAGE_SELECTOR)?)
        .next()
        .ok_or(ParseError::MissingImage)?;
    let src = image
        .value()
        .attr("src")
        .ok_or(ParseError::MissingImageSource)?;
    let path = src.strip_prefix('/').unwrap_or(src);
    Ok(format!("{base_url}{path}"))
}

/// Downloads the image at `image_url`, returning just the body.
pub fn fetch_image<F: Fetcher>(fetcher: &F, image_url: &str) -> Result<Vec<u8>, TransportError> {
    Ok(fetcher.get(image_url)?.bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEST_BASE_URL;
    use crate::fetch::FetchedPage;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>200 OK - HTTP Status Dogs</title></head>
<body>
  <div class="container">
    <p>Some other paragraph: not this one</p>
    <img class="thumbnail" src="/assets/logo.png">
    <img class="img-responsive thumbnail" itemprop="image" src="/assets/200.jpg" alt="200 OK">
    <p class="lead">Status: Everything is fine</p>
    <p class="lead">Second: ignored</p>
  </div>
</body>
</html>"#;

    #[test]
    fn bad_selector_is_reported() {
        assert_eq!(selector("p[").err(), Some(ParseError::InvalidSelector("p[")));
        assert!(selector(DESCRIPTION_SELECTOR).is_ok());
        assert!(selector(IMAGE_SELECTOR).is_ok());
    }

    #[test]
    fn test_extract_description() {
        assert_eq!(
            extract_description(PAGE).expect("description"),
            "Everything is fine"
        );
    }

    #[test]
    fn description_splits_on_first_colon_only() {
        let html = r#"<p class="lead">  418 I'm a teapot:  Short and stout: tip me over  </p>"#;
        assert_eq!(
            extract_description(html).expect("description"),
            "Short and stout: tip me over"
        );
    }

    #[test]
    fn description_without_colon_uses_whole_text() {
        let html = r#"<p class="lead">  <b>Just</b> a dog  </p>"#;
        assert_eq!(extract_description(html).expect("description"), "Just a dog");
    }

    #[test]
    fn description_decodes_entities() {
        let html = r#"<p class="lead">Gone: It&#39;s gone &amp; not coming back</p>"#;
        assert_eq!(
            extract_description(html).expect("description"),
            "It's gone & not coming back"
        );
    }

    #[test]
    fn missing_lead_is_parse_error() {
        assert_eq!(
            extract_description("<p>Status: nope</p>"),
            Err(ParseError::MissingDescription)
        );
        assert_eq!(extract_description(""), Err(ParseError::MissingDescription));
    }

    #[test]
    fn test_extract_image_reference() {
        assert_eq!(
            extract_image_reference(PAGE, TEST_BASE_URL).expect("image"),
            "https://example.com/assets/200.jpg"
        );
        let html = r#"<img class="thumbnail" itemprop="image" src="/assets/200.jpg">"#;
        assert_eq!(
            extract_image_reference(html, TEST_BASE_URL).expect("image"),
            "https://example.com/assets/200.jpg"
        );
    }

    #[test]
    fn only_one_leading_slash_is_stripped() {
        let html = r#"<img class="thumbnail" itemprop="image" src="img/404.jpg">"#;
        assert_eq!(
            extract_image_reference(html, TEST_BASE_URL).expect("image"),
            "https://example.com/img/404.jpg"
        );
        let html = r#"<img class="thumbnail" itemprop="image" src="//img/404.jpg">"#;
        assert_eq!(
            extract_image_reference(html, TEST_BASE_URL).expect("image"),
            "https://example.com//img/404.jpg"
        );
    }

    #[test]
    fn image_needs_both_class_and_itemprop() {
        let html = r#"<img class="thumbnail" src="/a.jpg"><img itemprop="image" src="/b.jpg">"#;
        assert_eq!(
            extract_image_reference(html, TEST_BASE_URL),
            Err(ParseError::MissingImage)
        );
        let html = r#"<img class="thumbnail" itemprop="image">"#;
        assert_eq!(
            extract_image_reference(html, TEST_BASE_URL),
            Err(ParseError::MissingImageSource)
        );
    }

    struct OneImage;

    impl Fetcher for OneImage {
        fn get(&self, url: &str) -> Result<FetchedPage, TransportError> {
            if url == "https://example.com/assets/200.jpg" {
                Ok(FetchedPage {
                    url: url.to_string(),
                    status: 200,
                    bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
                })
            } else {
                Err(TransportError::new(url, "http status: 404"))
            }
        }
    }

    #[test]
    fn test_fetch_image() {
        assert_eq!(
            fetch_image(&OneImage, "https://example.com/assets/200.jpg").expect("image"),
            vec![0xFF, 0xD8, 0xFF, 0xE0]
        );
        let err = fetch_image(&OneImage, "https://example.com/assets/999.jpg")
            .expect_err("missing image");
        assert_eq!(err.url, "https://example.com/assets/999.jpg");
    }
}
