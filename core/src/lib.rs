#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use api::*;
pub use board::*;
pub use client::*;
pub use clue::*;
pub use error::*;
pub use render::*;
pub use session::*;

mod api;
mod board;
mod client;
mod clue;
mod error;
mod render;
mod session;

#[cfg(test)]
mod testing;

/// Reference number of categories (board columns).
pub const NUM_CATEGORIES: usize = 6;

/// Reference number of clues per category (board rows).
pub const NUM_CLUES_PER_CAT: usize = 5;

/// Reference size of the category pool the random selection is drawn from.
pub const CATEGORY_POOL_SIZE: usize = 100;

/// Shape of a board and how large a pool its categories are sampled from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub num_categories: usize,
    pub clues_per_category: usize,
    pub category_pool: usize,
}

impl BoardConfig {
    pub const fn new_unchecked(
        num_categories: usize,
        clues_per_category: usize,
        category_pool: usize,
    ) -> Self {
        Self {
            num_categories,
            clues_per_category,
            category_pool,
        }
    }

    pub fn new(num_categories: usize, clues_per_category: usize, category_pool: usize) -> Self {
        let num_categories = num_categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        let category_pool = category_pool.max(num_categories);
        Self::new_unchecked(num_categories, clues_per_category, category_pool)
    }

    pub const fn total_cells(&self) -> usize {
        self.num_categories.saturating_mul(self.clues_per_category)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(NUM_CATEGORIES, NUM_CLUES_PER_CAT, CATEGORY_POOL_SIZE)
    }
}
