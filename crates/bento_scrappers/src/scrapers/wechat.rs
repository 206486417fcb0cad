use async_trait::async_trait;
use bento_core::{Error, ExtractedArticle, Result};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use scraper::Html;
use crate::scrapers::{utils, Scraper, SourceMetadata};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const TITLE_SELECTOR: &str = "h1.rich_media_title";
const AUTHOR_SELECTOR: &str = "strong.rich_media_meta_text";
const CONTENT_SELECTOR: &str = "div.rich_media_content";

/// WeChat official account articles (mp.weixin.qq.com).
///
/// The selectors follow the platform's current markup. When it changes the
/// fields silently come back empty instead of failing.
#[derive(Debug, Clone)]
pub struct WechatScraper {
    client: Client,
    /// Scheme assumed for links pasted without one
    default_scheme: &'static str,
}

impl Default for WechatScraper {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

impl WechatScraper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            default_scheme: utils::DEFAULT_SCHEME,
        }
    }

    pub fn with_default_scheme(mut self, scheme: &'static str) -> Self {
        self.default_scheme = scheme;
        self
    }

    pub fn parse_article(html: &str) -> Result<ExtractedArticle> {
        let document = Html::parse_document(html);

        Ok(ExtractedArticle {
            title: utils::first_text(&document, TITLE_SELECTOR)?,
            author: utils::first_text(&document, AUTHOR_SELECTOR)?,
            body_text: utils::collapsed_text(&document, CONTENT_SELECTOR)?,
        })
    }

    /// Accepts links without a scheme, the same way [`Scraper::can_handle`] does.
    async fn fetch_html(&self, url: &str) -> Result<String> {
        let url = utils::parse_url_with_scheme(url, self.default_scheme)?;
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                url: url.into(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Scraper for WechatScraper {
    fn source_metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "微信公众号",
            emoji: "💬",
            domain: "mp.weixin.qq.com",
        }
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["wechat", "weixin"]
    }

    async fn scrape_article(&self, url: &str) -> Result<ExtractedArticle> {
        let html = self.fetch_html(url).await?;
        let article = Self::parse_article(&html)?;

        tracing::debug!(
            title = %article.title,
            author = %article.author,
            "📄 WeChat body text: {}",
            article.body_text
        );

        Ok(article)
    }
}
