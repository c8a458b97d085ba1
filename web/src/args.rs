use clap::Parser;
use jeopardy_core::{
    BoardConfig, CATEGORY_POOL_SIZE, DEFAULT_SERVICE_URL, NUM_CATEGORIES, NUM_CLUES_PER_CAT,
};

use crate::app::AppProps;

/// Startup options, read from the page URL hash, e.g. `#--api-url=http://localhost:3000&-vv`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the trivia service
    #[arg(long, default_value = DEFAULT_SERVICE_URL)]
    pub api_url: String,

    /// Number of categories (columns) on the board
    #[arg(long, default_value_t = NUM_CATEGORIES)]
    pub categories: usize,

    /// Number of clues (rows) per category
    #[arg(long, default_value_t = NUM_CLUES_PER_CAT)]
    pub clues: usize,

    /// How many categories to draw the board from
    #[arg(long, default_value_t = CATEGORY_POOL_SIZE)]
    pub pool: usize,
}

impl Args {
    pub(crate) fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash
            .trim_start_matches('#')
            .split('&')
            .filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once(env!("CARGO_PKG_NAME")).chain(args))
    }

    /// Like [`Args::from_location_hash`], but falls back to the defaults on a bad hash
    /// and hands back the parse error for reporting once logging is up.
    pub(crate) fn from_location_hash_or_default(hash: &str) -> (Self, Option<clap::Error>) {
        match Self::from_location_hash(hash) {
            Ok(args) => (args, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub(crate) fn board_config(&self) -> BoardConfig {
        BoardConfig::new(self.categories, self.clues, self.pool)
    }

    pub(crate) fn app_props(&self) -> AppProps {
        AppProps {
            api_url: self.api_url.clone().into(),
            config: self.board_config(),
            seed: self.seed,
        }
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::parse_from([env!("CARGO_PKG_NAME")])
    }
}
