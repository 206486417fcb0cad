use bento_core::{Error, ExtractedArticle, Result};
use tracing::info;
use crate::scrapers::{get_scraper_factories, BoxedScraper, ScraperFactory, SourceMetadata};

/// Registry of extractor strategies, keyed by the domain each one handles.
pub struct ScraperManager {
    factories: Vec<ScraperFactory>,
}

impl Default for ScraperManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ScraperManager {
    /// A manager with every built-in strategy registered.
    pub fn new() -> Self {
        Self {
            factories: get_scraper_factories(),
        }
    }

    /// A manager with no strategies; every URL is treated as plain text.
    pub fn empty() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    pub fn add_scraper_factory(&mut self, factory: ScraperFactory) {
        self.factories.push(factory);
    }

    pub fn find_scraper(&self, url: &str) -> Option<BoxedScraper> {
        self.factories
            .iter()
            .map(|factory| factory())
            .find(|scraper| scraper.can_handle(url))
    }

    pub fn get_scraper_for_url(&self, url: &str) -> Result<BoxedScraper> {
        self.find_scraper(url)
            .ok_or_else(|| Error::Extraction(format!("No scraper found for URL: {}", url)))
    }

    /// Looks a strategy up by one of its CLI shorthand names.
    pub fn get_scraper(&self, name: &str) -> Result<BoxedScraper> {
        self.factories
            .iter()
            .map(|factory| factory())
            .find(|scraper| scraper.cli_names().contains(&name))
            .ok_or_else(|| Error::Extraction(format!("No scraper named {}", name)))
    }

    pub async fn scrape_url(&self, url: &str) -> Result<ExtractedArticle> {
        let scraper = self.get_scraper_for_url(url)?;
        let meta = scraper.source_metadata();
        info!("{} Scraping {} article: {}", meta.emoji, meta.name, url);
        scraper.scrape_article(url).await
    }

    pub fn list_scrapers(&self) -> Vec<SourceMetadata> {
        self.factories
            .iter()
            .map(|factory| factory().source_metadata())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::scrapers::Scraper;

    struct StaticScraper;

    #[async_trait]
    impl Scraper for StaticScraper {
        fn source_metadata(&self) -> SourceMetadata {
            SourceMetadata {
                name: "Static",
                emoji: "🧪",
                domain: "example.org",
            }
        }

        fn cli_names(&self) -> Vec<&str> {
            vec!["static"]
        }

        async fn scrape_article(&self, url: &str) -> Result<ExtractedArticle> {
            Ok(ExtractedArticle {
                title: "static".to_string(),
                author: String::new(),
                body_text: url.to_string(),
            })
        }
    }

    #[test]
    fn test_builtin_strategies() {
        let manager = ScraperManager::new();
        let sources = manager.list_scrapers();
        assert!(sources.iter().any(|s| s.domain == "mp.weixin.qq.com"));
        assert!(manager.find_scraper("https://mp.weixin.qq.com/s/x").is_some());
        assert!(manager.find_scraper("https://example.org/post").is_none());
        assert!(manager.get_scraper("wechat").is_ok());
        assert!(manager.get_scraper("nope").is_err());
    }

    #[tokio::test]
    async fn test_added_strategy_is_used() {
        let mut manager = ScraperManager::empty();
        manager.add_scraper_factory(Box::new(|| Box::new(StaticScraper) as BoxedScraper));

        let article = manager.scrape_url("https://blog.example.org/post").await.unwrap();
        assert_eq!(article.title, "static");
        assert_eq!(article.body_text, "https://blog.example.org/post");

        let err = manager.scrape_url("https://mp.weixin.qq.com/s/x").await.unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }
}
