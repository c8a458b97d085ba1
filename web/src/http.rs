use core::fmt::Display;

use gloo::net::http::{Request, Response};
use jeopardy_core::{
    CATEGORIES_PATH, CATEGORY_PATH, CategoryId, CategoryPayload, CategorySummary, Result,
    TriviaApi, TriviaError, endpoint_url,
};
use serde::de::DeserializeOwned;
use yew::AttrValue;

/// [`TriviaApi`] over the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GlooTriviaApi {
    base_url: AttrValue,
}

impl GlooTriviaApi {
    pub(crate) fn new(base_url: AttrValue) -> Self {
        log::debug!("trivia service at {}", base_url);
        Self { base_url }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: (&str, String)) -> Result<T> {
        let url = endpoint_url(&self.base_url, path);
        log::trace!("GET {}?{}={}", url, query.0, query.1);

        let response = Request::get(&url)
            .query([query])
            .send()
            .await
            .map_err(|err| TriviaError::Network(format!("GET {} failed: {}", url, err)))?;

        Self::parse_response(&url, response).await
    }

    async fn parse_response<T: DeserializeOwned>(url: &str, response: Response) -> Result<T> {
        let body = response.text().await;

        if !response.ok() {
            let body = body.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(url, response.status(), &body));
        }

        let body = body.map_err(|err| decode_error(url, err))?;
        decode_body(url, &body)
    }
}

/// Error for a response that arrived with a non-success status.
fn status_error(url: &str, status: u16, body: &str) -> TriviaError {
    TriviaError::Network(format!("GET {} returned HTTP {}: {}", url, status, body))
}

fn decode_error(url: &str, err: impl Display) -> TriviaError {
    TriviaError::Network(format!("Failed to parse response from {}: {}", url, err))
}

fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|err| decode_error(url, err))
}

impl TriviaApi for GlooTriviaApi {
    async fn category_summaries(&self, count: usize) -> Result<Vec<CategorySummary>> {
        self.get_json(CATEGORIES_PATH, ("count", count.to_string()))
            .await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryPayload> {
        self.get_json(CATEGORY_PATH, ("id", id.to_string())).await
    }
}
