//! Fixed column layouts for the two supported sheet schemas.
//!
//! All positional knowledge about the sheets lives in this module as named
//! tables, so each schema's contract is testable on its own and a layout
//! change touches exactly one table.

/// Canonical 33-column header set for `standard` mode.
pub const STANDARD_HEADERS: [&str; 33] = [
    "Rank Geral",
    "Status",
    "Rank P/L",
    "Rank Desvio",
    "Rank DY",
    "Rank Margem",
    "Rank CAGR",
    "Rank Dívida",
    "Rank Total",
    "Empresa",
    "Ticker",
    "Setor",
    "P/L Atual",
    "P/L Médio 10a",
    "Lucro Projetado",
    "P/L Projetado",
    "Desvio Padrão",
    "Desvio P/L Médio",
    "CAGR Lucros 5a",
    "Dívida/EBITDA",
    "ROE",
    "Payout Médio",
    "Liquidez Diária",
    "Dividend Yield",
    "Preço Atual",
    "Preço Justo",
    "Margem de Segurança",
    "Preço de Entrada",
    "Preço/Justo (%)",
    "Frequência",
    "Mês",
    "Última Atualização",
    "Perfil",
];

/// Fixed header set emitted for `neto` mode regardless of the input's own
/// header row.
pub const NETO_HEADERS: [&str; 21] = [
    "Empresa",
    "Ticker",
    "Setor",
    "Subsetor",
    "Lucro Atual",
    "Lucro Projetado",
    "P/L Projetado",
    "P/L Médio 10a",
    "Desvio P/L Médio",
    "CAGR Lucros 5a",
    "Dívida/EBITDA",
    "ROE",
    "Payout Médio",
    "Proventos 12m",
    "Dividend Yield",
    "Preço Atual",
    "Preço Justo",
    "Margem de Segurança",
    "Upside",
    "Recomendação",
    "Atualizado Em",
];

/// Source positions of the typed record fields within one schema's rows.
pub struct ColumnMap {
    pub company: usize,
    pub ticker: usize,
    pub sector: usize,
    pub pl_projected: usize,
    pub pl_deviation: usize,
    pub cagr: usize,
    pub debt_to_ebitda: usize,
    pub dividend_yield: usize,
    pub current_price: usize,
    pub fair_price: usize,
    pub margin_of_safety: usize,
    /// Column holding the price-vs-fair percent; `None` when the layout has
    /// no such column and the value is derived from price and fair price.
    pub price_diff: Option<usize>,
}

pub const STANDARD_COLUMNS: ColumnMap = ColumnMap {
    company: 9,
    ticker: 10,
    sector: 11,
    pl_projected: 15,
    pl_deviation: 17,
    cagr: 18,
    debt_to_ebitda: 19,
    dividend_yield: 23,
    current_price: 24,
    fair_price: 25,
    margin_of_safety: 26,
    price_diff: Some(STANDARD_PRICE_DIFF_COLUMN),
};

pub const NETO_COLUMNS: ColumnMap = ColumnMap {
    company: 0,
    ticker: 1,
    sector: 2,
    pl_projected: 6,
    pl_deviation: 8,
    cagr: 9,
    debt_to_ebitda: 10,
    dividend_yield: 14,
    current_price: 15,
    fair_price: 16,
    margin_of_safety: 17,
    price_diff: None,
};

/// Translation table for the simplified 21-column `standard` export:
/// (simplified index, canonical index) pairs. Simplified columns without a
/// canonical counterpart are dropped; canonical columns without a source
/// stay empty.
pub const SIMPLIFIED_REMAP: [(usize, usize); 14] = [
    (0, 9),   // company
    (1, 10),  // ticker
    (2, 11),  // sector
    (6, 15),  // projected P/L
    (8, 17),  // deviation from historical P/L
    (9, 18),  // earnings CAGR
    (10, 19), // debt/EBITDA
    (14, 23), // dividend yield
    (15, 24), // current price
    (16, 25), // fair price
    (17, 26), // margin of safety
    (18, 29), // payment frequency
    (19, 30), // payment month
    (20, 31), // last update
];

/// Number of columns in the simplified export.
pub const SIMPLIFIED_COLUMN_COUNT: usize = 21;

/// Columns hidden by default when the simplified remap triggers: status and
/// entry price, which the simplified export cannot fill.
pub const SIMPLIFIED_HIDDEN_COLUMNS: [usize; 2] = [1, 27];

/// Canonical column that receives the synthesized external profile link.
pub const STANDARD_PROFILE_COLUMN: usize = 32;

/// Canonical column holding the price-vs-fair-value percent.
pub const STANDARD_PRICE_DIFF_COLUMN: usize = 28;

/// Leading display columns that hold computed ranks in the standard layout,
/// in write order: general, P/L, deviation, DY, margin, CAGR, debt, total.
/// Position 1 between them is the status column and is never written.
pub const STANDARD_RANK_COLUMNS: [usize; 8] = [0, 2, 3, 4, 5, 6, 7, 8];

/// Header cell that marks the simplified export (matched case-insensitively).
pub const SIMPLIFIED_MARKER: &str = "empresa";
