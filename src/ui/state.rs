//! Session state for the TUI shell.
//!
//! One [`ScreenerResult`] is the single source of truth for everything the
//! shell renders; filtering, sorting and column hiding are views over it and
//! never mutate the records.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::models::{ScreenerMode, ScreenerResult};
use crate::parser::parse_decimal_ascending;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Table,
    Summary,
    Assistant,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Table, Tab::Summary, Tab::Assistant];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Table => "Table",
            Tab::Summary => "Summary",
            Tab::Assistant => "Assistant",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }
}

/// Where keystrokes currently go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Filter,
    Question,
}

/// User-selected column sort, toggling direction on repeat.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSort {
    pub column: usize,
    pub descending: bool,
}

/// One question/answer pair in the assistant transcript.
#[derive(Debug, Clone)]
pub struct AssistantExchange {
    pub question: String,
    pub answer: String,
    pub at: DateTime<Utc>,
}

pub struct SessionState {
    pub result: ScreenerResult,
    pub mode: ScreenerMode,
    pub hidden_columns: HashSet<usize>,
    pub filter: String,
    pub sort: Option<ColumnSort>,
    pub selected_row: usize,
    /// Index into `display_columns()`, not into the header list.
    pub selected_column: usize,
    pub tab: Tab,
    pub input: InputMode,
    pub question: String,
    pub transcript: Vec<AssistantExchange>,
    pub status: String,
}

impl SessionState {
    pub fn new(result: ScreenerResult, mode: ScreenerMode) -> Self {
        let hidden_columns = result.initial_hidden_columns.iter().copied().collect();
        Self {
            result,
            mode,
            hidden_columns,
            filter: String::new(),
            sort: None,
            selected_row: 0,
            selected_column: 0,
            tab: Tab::Table,
            input: InputMode::Normal,
            question: String::new(),
            transcript: Vec::new(),
            status: String::from("q quit · / filter · s sort · h hide column · Tab switch view"),
        }
    }

    /// Header indices in display order: sticky columns first, then every
    /// visible remaining column in layout order.
    pub fn display_columns(&self) -> Vec<usize> {
        let sticky = &self.result.layout.sticky_columns;
        let mut columns = sticky.clone();
        for idx in 0..self.result.headers.len() {
            if !sticky.contains(&idx) && !self.hidden_columns.contains(&idx) {
                columns.push(idx);
            }
        }
        columns
    }

    /// Record indices matching the filter, in the user sort order (or the
    /// pipeline's default order when no column sort is active).
    pub fn visible_rows(&self) -> Vec<usize> {
        let matcher = SkimMatcherV2::default();
        let mut rows: Vec<usize> = (0..self.result.records.len())
            .filter(|&idx| {
                if self.filter.is_empty() {
                    return true;
                }
                let record = &self.result.records[idx];
                let haystack = format!("{} {}", record.ticker, record.company);
                matcher.fuzzy_match(&haystack, &self.filter).is_some()
            })
            .collect();

        if let Some(sort) = self.sort {
            rows.sort_by(|&a, &b| {
                let ordering = self
                    .cell_sort_key(a, sort.column)
                    .partial_cmp(&self.cell_sort_key(b, sort.column))
                    .unwrap_or(std::cmp::Ordering::Equal);
                if sort.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        rows
    }

    /// Numeric cells sort numerically with missing values last; everything
    /// else falls back to case-insensitive text order after the numbers.
    fn cell_sort_key(&self, record_idx: usize, column: usize) -> (f64, String) {
        let cell = self.result.records[record_idx]
            .raw
            .get(column)
            .map(String::as_str)
            .unwrap_or_default();
        (parse_decimal_ascending(Some(cell)), cell.to_lowercase())
    }

    pub fn move_selection(&mut self, delta: isize) {
        let count = self.visible_rows().len();
        if count == 0 {
            self.selected_row = 0;
            return;
        }
        let current = self.selected_row.min(count - 1) as isize;
        self.selected_row = (current + delta).clamp(0, count as isize - 1) as usize;
    }

    pub fn move_column(&mut self, delta: isize) {
        let count = self.display_columns().len();
        if count == 0 {
            return;
        }
        let current = self.selected_column.min(count - 1) as isize;
        self.selected_column = (current + delta).clamp(0, count as isize - 1) as usize;
    }

    /// Toggle sorting on the selected column: ascending, then descending.
    pub fn toggle_sort(&mut self) {
        let columns = self.display_columns();
        let Some(&column) = columns.get(self.selected_column) else {
            return;
        };
        self.sort = match self.sort {
            Some(sort) if sort.column == column && !sort.descending => Some(ColumnSort {
                column,
                descending: true,
            }),
            Some(sort) if sort.column == column => None,
            _ => Some(ColumnSort {
                column,
                descending: false,
            }),
        };
        self.status = match self.sort {
            Some(sort) => format!(
                "Sorted by {} ({})",
                self.result.headers[sort.column],
                if sort.descending { "desc" } else { "asc" }
            ),
            None => "Default order restored".to_string(),
        };
    }

    /// Hide the selected column. Sticky columns stay put.
    pub fn hide_selected_column(&mut self) {
        let columns = self.display_columns();
        let Some(&column) = columns.get(self.selected_column) else {
            return;
        };
        if self.result.layout.sticky_columns.contains(&column) {
            self.status = format!("{} is pinned", self.result.headers[column]);
            return;
        }
        self.hidden_columns.insert(column);
        self.status = format!("Hidden: {} (H restores all)", self.result.headers[column]);
        self.move_column(0);
    }

    pub fn unhide_all_columns(&mut self) {
        self.hidden_columns.clear();
        self.status = "All columns visible".to_string();
    }
}
