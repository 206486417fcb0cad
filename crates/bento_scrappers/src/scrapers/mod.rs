use async_trait::async_trait;
use bento_core::{ExtractedArticle, Result};
use serde::Serialize;

pub mod wechat;
pub use wechat::WechatScraper;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceMetadata {
    pub name: &'static str,
    pub emoji: &'static str,
    /// Host the strategy is keyed by; subdomains match too
    pub domain: &'static str,
}

/// A scraping rule set for one content platform.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Returns the metadata of the content platform
    fn source_metadata(&self) -> SourceMetadata;

    /// Returns true if this scraper can handle the given URL
    fn can_handle(&self, url: &str) -> bool {
        utils::host_matches(url, self.source_metadata().domain)
    }

    /// Fetches and extracts the article behind the given URL
    async fn scrape_article(&self, url: &str) -> Result<ExtractedArticle>;

    /// Returns a list of CLI shorthand names for this scraper
    fn cli_names(&self) -> Vec<&str> {
        vec![]
    }
}

pub type BoxedScraper = Box<dyn Scraper>;
pub type ScraperFactory = Box<dyn Fn() -> BoxedScraper + Send + Sync>;

pub fn get_scraper_factories() -> Vec<ScraperFactory> {
    vec![Box::new(|| Box::new(WechatScraper::new()) as BoxedScraper)]
}

/// Common utilities for scrapers
pub(crate) mod utils {
    use bento_core::{Error, Result};
    use scraper::{Html, Selector};
    use url::Url;

    pub const DEFAULT_SCHEME: &str = "https";

    pub fn parse_url(url: &str) -> Result<Url> {
        parse_url_with_scheme(url, DEFAULT_SCHEME)
    }

    /// Parses `url`, prefixing `scheme://` when it has no host of its own
    /// (`mp.weixin.qq.com/s/x`, `localhost:8080/s/x`).
    pub fn parse_url_with_scheme(url: &str, scheme: &str) -> Result<Url> {
        let url = url.trim();
        match Url::parse(url) {
            Ok(parsed) if parsed.has_host() => Ok(parsed),
            _ => Url::parse(&format!("{scheme}://{url}"))
                .map_err(|e| Error::InvalidUrl(format!("{url}: {e}"))),
        }
    }

    pub fn host_matches(url: &str, domain: &str) -> bool {
        let Ok(url) = parse_url(url) else {
            return false;
        };
        match url.host_str() {
            Some(host) => host == domain || host.ends_with(&format!(".{domain}")),
            None => false,
        }
    }

    pub fn selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector)
            .map_err(|e| Error::Extraction(format!("Invalid selector {selector}: {e}")))
    }

    /// Trimmed text of the first match, or an empty string when nothing matches.
    pub fn first_text(document: &Html, selector: &str) -> Result<String> {
        let selector = self::selector(selector)?;
        Ok(document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default())
    }

    /// Text of every match joined together, whitespace runs collapsed.
    pub fn collapsed_text(document: &Html, selector: &str) -> Result<String> {
        let selector = self::selector(selector)?;
        let text = document
            .select(&selector)
            .flat_map(|el| el.text())
            .collect::<String>();
        Ok(collapse_whitespace(&text))
    }

    pub fn collapse_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::utils;
    use scraper::Html;

    #[test]
    fn test_parse_url() {
        assert!(utils::parse_url("https://example.com").is_ok());
        assert_eq!(
            utils::parse_url("mp.weixin.qq.com/s/abc").unwrap().host_str(),
            Some("mp.weixin.qq.com")
        );
        assert!(utils::parse_url("not a url at all").is_err());
        assert_eq!(
            utils::parse_url_with_scheme("localhost:8080/s/x", "http").unwrap().as_str(),
            "http://localhost:8080/s/x"
        );
    }

    #[test]
    fn test_host_matches() {
        assert!(utils::host_matches("https://mp.weixin.qq.com/s/abc", "mp.weixin.qq.com"));
        assert!(utils::host_matches("http://sub.mp.weixin.qq.com/s", "mp.weixin.qq.com"));
        assert!(!utils::host_matches("https://evil.com/mp.weixin.qq.com", "mp.weixin.qq.com"));
        assert!(!utils::host_matches("https://xmp.weixin.qq.com/s", "mp.weixin.qq.com"));
    }

    #[test]
    fn test_first_text() {
        let html = r#"
            <div class="title">  Test Title </div>
            <div class="title">Second</div>
        "#;
        let document = Html::parse_document(html);

        assert_eq!(utils::first_text(&document, ".title").unwrap(), "Test Title");
        assert_eq!(utils::first_text(&document, ".invalid").unwrap(), "");
        assert!(utils::first_text(&document, "[[").is_err());
    }

    #[test]
    fn test_collapsed_text() {
        let html = r#"
            <div class="item">Item
                1</div>
            <div class="item">  Item 2 </div>
        "#;
        let document = Html::parse_document(html);

        assert_eq!(utils::collapsed_text(&document, ".item").unwrap(), "Item 1 Item 2");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(utils::collapse_whitespace("  a \n\n b\u{a0}\tc  "), "a b c");
        assert_eq!(utils::collapse_whitespace("   "), "");
    }
}
