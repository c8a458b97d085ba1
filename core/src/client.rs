use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Fetches categories from a [`TriviaApi`] and samples them down to board size.
#[derive(Clone, Debug)]
pub struct TriviaClient<A> {
    api: A,
    config: BoardConfig,
    rng: SmallRng,
}

impl<A: TriviaApi> TriviaClient<A> {
    pub fn new(api: A, config: BoardConfig, seed: u64) -> Self {
        Self {
            api,
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Picks `num_categories` distinct category ids out of a pool of `category_pool`.
    pub async fn fetch_category_ids(&mut self) -> Result<Vec<CategoryId>> {
        let summaries = self
            .api
            .category_summaries(self.config.category_pool)
            .await?;
        let listed = summaries.len();

        let mut seen = BTreeSet::new();
        let pool: Vec<CategoryId> = summaries
            .into_iter()
            .map(|summary| summary.id)
            .filter(|&id| seen.insert(id))
            .collect();
        if pool.len() != listed {
            log::debug!(
                "dropped {} duplicate category ids from the pool",
                listed - pool.len()
            );
        }

        let needed = self.config.num_categories;
        let available = pool.len();
        let ids = sample_without_replacement(&mut self.rng, pool, needed).ok_or(
            TriviaError::DataShape {
                what: "categories",
                needed,
                available,
            },
        )?;
        log::debug!("selected categories {:?} out of {}", ids, available);
        Ok(ids)
    }

    /// Fetches one category and samples `clues_per_category` of its clues, all hidden.
    pub async fn fetch_category(&mut self, id: CategoryId) -> Result<Category> {
        let payload = self.api.category(id).await?;
        if payload.id.is_some_and(|returned| returned != id) {
            log::warn!(
                "asked for category {}, service answered with {:?}",
                id,
                payload.id
            );
        }

        let needed = self.config.clues_per_category;
        let available = payload.clues.len();
        let Some(picked) = sample_without_replacement(&mut self.rng, payload.clues, needed) else {
            log::warn!(
                "category {} has only {} clues, {} required",
                id,
                available,
                needed
            );
            return Err(TriviaError::DataShape {
                what: "clues",
                needed,
                available,
            });
        };

        let clues = picked
            .into_iter()
            .map(|clue| Clue::new(clue.question, clue.answer))
            .collect();
        log::trace!("category {} ({:?}) loaded", id, payload.title);
        Ok(Category::new(payload.title, clues))
    }
}

/// Uniform sample of `amount` items without replacement, `None` when there are too few.
fn sample_without_replacement<T, R>(rng: &mut R, items: Vec<T>, amount: usize) -> Option<Vec<T>>
where
    R: Rng + ?Sized,
{
    if items.len() < amount {
        return None;
    }

    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    let picked = rand::seq::index::sample(rng, slots.len(), amount)
        .iter()
        .filter_map(|index| slots[index].take())
        .collect();
    Some(picked)
}
