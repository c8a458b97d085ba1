use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Request {
    Summaries(usize),
    Category(CategoryId),
}

/// Scripted in-memory trivia service.
#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    pub pool: Vec<CategoryId>,
    pub categories: BTreeMap<CategoryId, CategoryPayload>,
    pub fail_listing: bool,
    pub fail_category: Option<CategoryId>,
    pub log: RefCell<Vec<Request>>,
}

impl FakeApi {
    /// Every id in `ids` is listed and resolves to a category with `clue_count` clues.
    pub fn with_pool(ids: impl IntoIterator<Item = CategoryId>, clue_count: usize) -> Self {
        let pool: Vec<_> = ids.into_iter().collect();
        let categories = pool
            .iter()
            .map(|&id| (id, payload(&format!("Category {}", id), clue_count)))
            .collect();
        Self {
            pool,
            categories,
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.log.borrow().clone()
    }
}

impl TriviaApi for FakeApi {
    async fn category_summaries(&self, count: usize) -> Result<Vec<CategorySummary>> {
        self.log.borrow_mut().push(Request::Summaries(count));
        if self.fail_listing {
            return Err(TriviaError::Network("connection refused".to_string()));
        }
        Ok(self
            .pool
            .iter()
            .take(count)
            .map(|&id| CategorySummary { id })
            .collect())
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryPayload> {
        self.log.borrow_mut().push(Request::Category(id));
        if self.fail_category == Some(id) {
            return Err(TriviaError::Network(format!("HTTP 500 for category {}", id)));
        }
        self.categories
            .get(&id)
            .cloned()
            .ok_or_else(|| TriviaError::Network(format!("HTTP 404 for category {}", id)))
    }
}

pub(crate) fn payload(title: &str, clue_count: usize) -> CategoryPayload {
    CategoryPayload {
        id: None,
        title: title.to_string(),
        clues: (0..clue_count)
            .map(|i| CluePayload {
                question: format!("{} question {}", title, i),
                answer: format!("{} answer {}", title, i),
            })
            .collect(),
    }
}

pub(crate) fn category(title: &str, clue_count: usize) -> Category {
    let clues = payload(title, clue_count)
        .clues
        .into_iter()
        .map(|clue| Clue::new(clue.question, clue.answer))
        .collect();
    Category::new(title, clues)
}
