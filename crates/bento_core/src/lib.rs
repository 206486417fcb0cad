pub mod error;
pub mod layout;
pub mod models;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use models::CompletionModel;
pub use storage::ResultStore;
pub use types::{
    BentoResult, CoreNumber, ExtractedArticle, ModelRequest, RawInput, Section, SectionItem,
    MAX_CONTENT_CHARS,
};
