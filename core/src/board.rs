use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Typed address of a board cell: column is the category, row is the clue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub category: usize,
    pub clue: usize,
}

impl CellCoord {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }

    /// `[row, column]` index into a rendered grid.
    pub const fn to_nd_index(self) -> [usize; 2] {
        [self.clue, self.category]
    }
}

impl From<(usize, usize)> for CellCoord {
    fn from((category, clue): (usize, usize)) -> Self {
        Self::new(category, clue)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }
}

/// All categories and clues of one game. Only ever replaced wholesale.
///
/// Not `Deserialize`: [`Board::new`] is the only way in, so the shape always holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Builds a board, checking it has exactly the configured shape.
    pub fn new(categories: Vec<Category>, config: &BoardConfig) -> Result<Self> {
        if categories.len() != config.num_categories {
            return Err(TriviaError::DataShape {
                what: "categories",
                needed: config.num_categories,
                available: categories.len(),
            });
        }

        if let Some(short) = categories
            .iter()
            .find(|category| category.clues.len() != config.clues_per_category)
        {
            return Err(TriviaError::DataShape {
                what: "clues",
                needed: config.clues_per_category,
                available: short.clues.len(),
            });
        }

        Ok(Self { categories })
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }

    pub fn clues_per_category(&self) -> usize {
        self.categories
            .first()
            .map_or(0, |category| category.clues.len())
    }

    pub fn clue(&self, coord: CellCoord) -> Result<&Clue> {
        self.categories
            .get(coord.category)
            .and_then(|category| category.clues.get(coord.clue))
            .ok_or(TriviaError::InvalidCoordinate)
    }

    pub fn clue_mut(&mut self, coord: CellCoord) -> Result<&mut Clue> {
        self.categories
            .get_mut(coord.category)
            .and_then(|category| category.clues.get_mut(coord.clue))
            .ok_or(TriviaError::InvalidCoordinate)
    }
}
