use std::sync::Arc;
use bento_core::{BentoResult, CompletionModel, Error, RawInput, Result};
use bento_inference::prompt::build_request;
use bento_inference::repair::{finalize, parse_reply, Provenance};
use bento_inference::{create_model, retry_with_backoff, Config, RetryPolicy};
use bento_scrappers::ScraperManager;
use tracing::{error, info, warn};

const EXTRACTION_HINT: &str = "Could not fetch the article, make sure the link is valid and reachable";

/// Text handed to the model plus what extraction learnt about it.
struct PreparedContent {
    content: String,
    author: String,
    raw_content: String,
}

/// One request's path from input to [`BentoResult`]: extract, truncate,
/// complete (with retries), repair.
pub struct Pipeline {
    scrapers: Arc<ScraperManager>,
    model: Option<Arc<dyn CompletionModel>>,
    retry: RetryPolicy,
}

impl Pipeline {
    pub fn new(
        scrapers: Arc<ScraperManager>,
        model: Option<Arc<dyn CompletionModel>>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            scrapers,
            model,
            retry,
        }
    }

    /// A model that cannot be built (say, no credential) is not fatal here;
    /// requests fail with a configuration error instead.
    pub fn from_config(scrapers: Arc<ScraperManager>, config: &Config) -> Self {
        let model = match create_model(config) {
            Ok(model) => {
                info!("🧠 Inference model initialized (using {})", model.name());
                Some(model)
            }
            Err(e) => {
                warn!("⚠️ No inference model available: {}", e);
                None
            }
        };
        Self::new(scrapers, model, config.retry)
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model.as_deref().map(|model| model.name())
    }

    pub fn scrapers(&self) -> &ScraperManager {
        &self.scrapers
    }

    pub async fn process(&self, input: RawInput) -> Result<BentoResult> {
        let content = input
            .content
            .as_deref()
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| Error::InvalidInput("content must not be empty".to_string()))?;

        let model = self.model.as_deref().ok_or_else(|| {
            error!("Kimi API key is not set");
            Error::Configuration("Kimi API key is not set".to_string())
        })?;

        let prepared = self.prepare(content, input.is_url).await?;
        let request = build_request(&prepared.content);

        let request_ref = &request;
        let reply = retry_with_backoff(self.retry, move || model.complete(request_ref)).await?;
        let parsed = parse_reply(&reply)?;

        Ok(finalize(
            parsed,
            Provenance {
                author: prepared.author,
                content: request.user_content,
                raw_content: prepared.raw_content,
            },
        ))
    }

    async fn prepare(&self, content: &str, is_url: bool) -> Result<PreparedContent> {
        let plain = || PreparedContent {
            content: content.to_string(),
            author: String::new(),
            raw_content: String::new(),
        };

        if !is_url {
            return Ok(plain());
        }

        let url = content.trim();
        let Some(scraper) = self.scrapers.find_scraper(url) else {
            warn!("No extractor for {}, sending the link as text", url);
            return Ok(plain());
        };

        let meta = scraper.source_metadata();
        info!("{} Extracting {} article: {}", meta.emoji, meta.name, url);
        let article = scraper.scrape_article(url).await.map_err(|e| {
            error!("Error extracting {}: {}", url, e);
            Error::Extraction(format!("{EXTRACTION_HINT}: {e}"))
        })?;

        Ok(PreparedContent {
            content: article.model_content(),
            author: article.author,
            raw_content: article.body_text,
        })
    }
}
