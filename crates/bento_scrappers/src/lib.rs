pub mod logging;
pub mod manager;
pub mod scrapers;

pub use logging::{init_logging, init_logging_with};
pub use manager::ScraperManager;
pub use scrapers::{BoxedScraper, Scraper, ScraperFactory, SourceMetadata, WechatScraper};

pub mod prelude {
    pub use super::scrapers::Scraper;
    pub use bento_core::{ExtractedArticle, Result, Error};
}
