use alloc::string::{String, ToString};
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Text shown in a cell whose clue has not been activated yet.
pub const PLACEHOLDER: &str = "?";

/// New text for a single cell after an activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellUpdate {
    pub coord: CellCoord,
    pub text: String,
}

/// Display projection of a [`Board`]: a header row of category titles and a grid of
/// cell texts with one row per clue index and one column per category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    headers: Vec<String>,
    cells: Array2<String>,
}

/// Projects `board` into a fresh view with every cell masked.
pub fn render(board: &Board) -> BoardView {
    let headers = board
        .categories()
        .iter()
        .map(|category| category.title.clone())
        .collect();
    let cells = Array2::from_elem(
        (board.clues_per_category(), board.num_categories()),
        PLACEHOLDER.to_string(),
    );
    BoardView { headers, cells }
}

impl BoardView {
    pub fn empty() -> Self {
        render(&Board::empty())
    }

    /// `(rows, columns)`, i.e. `(clues_per_category, num_categories)`.
    pub fn dim(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn text_at(&self, coord: CellCoord) -> Option<&str> {
        self.cells.get(coord.to_nd_index()).map(String::as_str)
    }

    /// Rows of `(coordinate, text)` pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = (CellCoord, &str)>> {
        self.cells.outer_iter().enumerate().map(|(clue, row)| {
            row.into_iter()
                .enumerate()
                .map(move |(category, text)| (CellCoord::new(category, clue), text.as_str()))
        })
    }

    /// Writes one cell. Returns `false` if the coordinate is outside the grid.
    pub fn apply(&mut self, update: &CellUpdate) -> bool {
        match self.cells.get_mut(update.coord.to_nd_index()) {
            Some(text) => {
                text.clone_from(&update.text);
                true
            }
            None => false,
        }
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::empty()
    }
}
