//! Common test utilities and fixtures

pub mod fixtures {
    use rust_screener::normalizer::columns::{
        SIMPLIFIED_COLUMN_COUNT, STANDARD_HEADERS, STANDARD_RANK_COLUMNS,
    };

    /// Header row of the simplified 21-column export.
    pub fn simplified_header() -> String {
        let mut titles = vec!["Empresa", "Ticker", "Setor"];
        titles.resize(SIMPLIFIED_COLUMN_COUNT, "Coluna");
        titles.join("\t")
    }

    /// One simplified data row with the given cells at their export
    /// positions (company 0, ticker 1, sector 2, P/L 6, deviation 8, CAGR 9,
    /// debt 10, DY 14, price 15, fair 16, margin 17).
    #[allow(clippy::too_many_arguments)]
    pub fn simplified_row(
        company: &str,
        ticker: &str,
        sector: &str,
        pl: &str,
        deviation: &str,
        cagr: &str,
        debt: &str,
        dy: &str,
        price: &str,
        fair: &str,
        margin: &str,
    ) -> String {
        let mut cells = vec![String::new(); SIMPLIFIED_COLUMN_COUNT];
        cells[0] = company.to_string();
        cells[1] = ticker.to_string();
        cells[2] = sector.to_string();
        cells[6] = pl.to_string();
        cells[8] = deviation.to_string();
        cells[9] = cagr.to_string();
        cells[10] = debt.to_string();
        cells[14] = dy.to_string();
        cells[15] = price.to_string();
        cells[16] = fair.to_string();
        cells[17] = margin.to_string();
        cells.join("\t")
    }

    /// A simplified sheet with `n` generated rows of varied finite values.
    pub fn simplified_sheet(n: usize) -> String {
        let mut sheet = simplified_header();
        for i in 0..n {
            let row = simplified_row(
                &format!("Company {i}"),
                &format!("TCK{i}"),
                if i % 2 == 0 { "Energia" } else { "Bancos" },
                &format!("{},5", 5 + (i * 3) % 17),
                &format!("-{i},0%"),
                &format!("{},2%", (i * 7) % 23),
                &format!("{},{}", i % 5, i % 10),
                &format!("{},8%", (i * 11) % 13),
                &format!("R$ {},00", 10 + i),
                &format!("R$ {},00", 8 + (i * 5) % 20),
                &format!("{}%", (i * 13) % 40),
            );
            sheet.push('\n');
            sheet.push_str(&row);
        }
        sheet
    }

    /// One canonical 33-column standard row. Rank cells carry placeholder
    /// text so tests can observe the write-back replacing them.
    pub fn standard_row(ticker: &str, company: &str, price_diff: &str) -> Vec<String> {
        let mut cells: Vec<String> = (0..STANDARD_HEADERS.len())
            .map(|i| format!("c{i}"))
            .collect();
        cells[9] = company.to_string();
        cells[10] = ticker.to_string();
        cells[11] = "Setor".to_string();
        cells[15] = "7,5".to_string();
        cells[17] = "-10%".to_string();
        cells[18] = "9,1%".to_string();
        cells[19] = "1,4".to_string();
        cells[23] = "6,2%".to_string();
        cells[24] = "R$ 20,00".to_string();
        cells[25] = "R$ 25,00".to_string();
        cells[26] = "20%".to_string();
        cells[28] = price_diff.to_string();
        cells
    }

    /// A full standard sheet from pre-built 33-column rows.
    pub fn standard_sheet(rows: &[Vec<String>]) -> String {
        let mut sheet = STANDARD_HEADERS.join("\t");
        for row in rows {
            sheet.push('\n');
            sheet.push_str(&row.join("\t"));
        }
        sheet
    }

    /// Display-row positions the ranking engine overwrites.
    pub fn rank_columns() -> Vec<usize> {
        STANDARD_RANK_COLUMNS.to_vec()
    }
}
