use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Deserializer};

use crate::Result;

/// Identifier the trivia service assigns to a category.
pub type CategoryId = u64;

/// Default base URL of the trivia service.
pub const DEFAULT_SERVICE_URL: &str = "http://jservice.io/";

/// `GET <base>/api/categories?count=<N>`
pub const CATEGORIES_PATH: &str = "api/categories";

/// `GET <base>/api/category?id=<id>`
pub const CATEGORY_PATH: &str = "api/category";

/// Joins the service base URL and an endpoint path with exactly one slash.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// One entry of the category listing. Only the id is used.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryPayload {
    #[serde(default)]
    pub id: Option<CategoryId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<CluePayload>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CluePayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> core::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Read-only transport to the trivia service.
///
/// Implementations run on a single thread; the returned futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait TriviaApi {
    /// Lists up to `count` categories.
    async fn category_summaries(&self, count: usize) -> Result<Vec<CategorySummary>>;

    /// Fetches one category with all of its clues.
    async fn category(&self, id: CategoryId) -> Result<CategoryPayload>;
}
