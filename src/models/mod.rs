use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One normalized row of a screening sheet.
///
/// `raw` is the canonical display row: everything the table, the export and
/// the assistant context render comes from it. The typed numeric fields feed
/// the ranking engine; a missing or unparsable cell is `f64::NEG_INFINITY`
/// (see the `parser` module), never `NaN` and never a separate option type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRecord {
    pub id: String,
    pub raw: Vec<String>,

    pub pl_projected: f64,
    pub pl_deviation: f64,
    pub dividend_yield: f64,
    pub margin_of_safety: f64,
    pub cagr: f64,
    pub debt_to_ebitda: f64,
    pub current_price: f64,
    pub fair_price: f64,
    pub price_diff_percent: f64,

    pub ticker: String,
    pub company: String,
    pub sector: String,

    // 1-based ranks, assigned by the ranking engine; 0 until then
    pub rank_pl: usize,
    pub rank_deviation: usize,
    pub rank_dividend_yield: usize,
    pub rank_margin: usize,
    pub rank_cagr: usize,
    pub rank_debt: usize,
    pub rank_total: usize,
    pub rank_general: usize,
}

/// Which of the two supported sheet schemas the pasted text uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ScreenerMode {
    /// 33-column canonical layout, or the simplified 21-column export that
    /// is auto-detected and remapped into it.
    Standard,
    /// Fixed 21-column layout with no rank columns.
    Neto,
}

impl std::fmt::Display for ScreenerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenerMode::Standard => write!(f, "standard"),
            ScreenerMode::Neto => write!(f, "neto"),
        }
    }
}

/// Table layout metadata for the active mode. Presentation only; the ranking
/// engine never reads this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub sticky_columns: Vec<usize>,
    pub ticker_column: usize,
    pub company_column: usize,
    pub status_column: Option<usize>,
    pub general_rank_column: Option<usize>,
}

/// Everything one "process" action produces. The UI shell holds exactly one
/// of these as its source of truth and replaces it wholesale on reprocess.
#[derive(Debug, Clone)]
pub struct ScreenerResult {
    pub records: Vec<StockRecord>,
    pub headers: Vec<String>,
    pub initial_hidden_columns: Vec<usize>,
    pub layout: LayoutConfig,
}

/// Pipeline errors. Individual bad cells never abort processing (they degrade
/// to the missing sentinel); only total structural failure does.
#[derive(Debug, Error)]
pub enum ScreenerError {
    #[error("input must contain a header row and at least one data row")]
    MalformedInput,
}

/// Configuration for the application. Only the assistant boundary needs any;
/// the pipeline itself is configuration-free.
#[derive(Debug, Clone)]
pub struct Config {
    pub assistant_api_key: Option<String>,
    pub assistant_base_url: String,
    pub assistant_model: String,
    pub assistant_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Config {
            assistant_api_key: std::env::var("ASSISTANT_API_KEY").ok().filter(|k| !k.is_empty()),
            assistant_base_url: std::env::var("ASSISTANT_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            assistant_model: std::env::var("ASSISTANT_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            assistant_timeout_secs: std::env::var("ASSISTANT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        }
    }
}

impl StockRecord {
    /// The six metric ranks in their canonical order.
    pub fn metric_ranks(&self) -> [usize; 6] {
        [
            self.rank_pl,
            self.rank_deviation,
            self.rank_dividend_yield,
            self.rank_margin,
            self.rank_cagr,
            self.rank_debt,
        ]
    }
}
