use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Network request failed: {0}")]
    Network(String),
    #[error("Expected at least {needed} {what}, the service returned {available}")]
    DataShape {
        what: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("Coordinates do not address a clue")]
    InvalidCoordinate,
    #[error("A game setup is already in progress")]
    SetupInProgress,
}

impl TriviaError {
    pub const fn is_data_shape(&self) -> bool {
        matches!(self, Self::DataShape { .. })
    }
}

pub type Result<T> = core::result::Result<T, TriviaError>;
