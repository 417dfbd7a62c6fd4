pub mod analysis;
pub mod assistant;
pub mod export;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod sample_data;
pub mod ui;

pub use analysis::normalize_and_rank;
pub use models::{Config, ScreenerError, ScreenerMode, ScreenerResult, StockRecord};
