//! Rendering for the TUI shell. Pure functions of the session state; all
//! displayed values come from the canonical display rows and the computed
//! rank fields.

use std::collections::HashMap;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame,
};

use super::state::{InputMode, SessionState, Tab};

pub fn draw(f: &mut Frame, session: &SessionState, assistant_busy: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tab bar
            Constraint::Min(0),    // content
            Constraint::Length(3), // status bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], session);
    match session.tab {
        Tab::Table => render_table_tab(f, chunks[1], session),
        Tab::Summary => render_summary_tab(f, chunks[1], session),
        Tab::Assistant => render_assistant_tab(f, chunks[1], session, assistant_busy),
    }
    render_status_bar(f, chunks[2], session);
}

fn render_tab_bar(f: &mut Frame, area: Rect, session: &SessionState) {
    let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Stock Screener [{} mode]", session.mode)),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .select(session.tab.index());
    f.render_widget(tabs, area);
}

fn render_table_tab(f: &mut Frame, area: Rect, session: &SessionState) {
    let show_filter = session.input == InputMode::Filter || !session.filter.is_empty();
    let (filter_area, table_area) = if show_filter {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    if let Some(filter_area) = filter_area {
        let cursor = if session.input == InputMode::Filter { "_" } else { "" };
        let filter = Paragraph::new(format!("{}{}", session.filter, cursor)).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Filter (ticker/company, Esc clears)"),
        );
        f.render_widget(filter, filter_area);
    }

    let columns = session.display_columns();
    let rows_idx = session.visible_rows();

    let header = Row::new(columns.iter().enumerate().map(|(display_idx, &col)| {
        let mut style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        if display_idx == session.selected_column {
            style = style.bg(Color::DarkGray);
        }
        Cell::from(session.result.headers[col].clone()).style(style)
    }))
    .height(1);

    let rows = rows_idx.iter().map(|&idx| {
        let record = &session.result.records[idx];
        Row::new(columns.iter().map(|&col| {
            Cell::from(record.raw.get(col).cloned().unwrap_or_default())
        }))
    });

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|&col| {
            let width = session.result.headers[col].chars().count().clamp(8, 18) as u16;
            Constraint::Length(width)
        })
        .collect();

    let title = format!(
        "{} of {} companies",
        rows_idx.len(),
        session.result.records.len()
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    if !rows_idx.is_empty() {
        state.select(Some(session.selected_row.min(rows_idx.len() - 1)));
    }
    f.render_stateful_widget(table, table_area, &mut state);
}

fn render_summary_tab(f: &mut Frame, area: Rect, session: &SessionState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // companies per sector, largest first
    let mut sector_counts: HashMap<&str, u64> = HashMap::new();
    for record in &session.result.records {
        let sector = if record.sector.is_empty() {
            "(none)"
        } else {
            record.sector.as_str()
        };
        *sector_counts.entry(sector).or_insert(0) += 1;
    }
    let mut sectors: Vec<(&str, u64)> = sector_counts.into_iter().collect();
    sectors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    sectors.truncate(8);

    let sector_chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Companies per sector"))
        .data(&sectors)
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(sector_chart, chunks[0]);

    // distribution of the summed metric ranks
    let records = &session.result.records;
    let buckets = rank_total_buckets(records.iter().map(|r| r.rank_total));
    let bucket_data: Vec<(&str, u64)> = buckets
        .iter()
        .map(|(label, count)| (label.as_str(), *count))
        .collect();
    let rank_chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Total-rank distribution"))
        .data(&bucket_data)
        .bar_width(9)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    f.render_widget(rank_chart, chunks[1]);
}

/// Four even buckets across the observed total-rank range.
fn rank_total_buckets(totals: impl Iterator<Item = usize>) -> Vec<(String, u64)> {
    let totals: Vec<usize> = totals.collect();
    let Some(&min) = totals.iter().min() else {
        return Vec::new();
    };
    let max = *totals.iter().max().unwrap_or(&min);
    let span = (max - min).max(1);
    let bucket_size = span.div_ceil(4);

    let mut buckets = Vec::new();
    for i in 0..4 {
        let low = min + i * bucket_size;
        let high = (low + bucket_size - 1).min(max);
        if low > max {
            break;
        }
        let count = totals.iter().filter(|&&t| t >= low && t <= high).count() as u64;
        buckets.push((format!("{low}-{high}"), count));
    }
    buckets
}

fn render_assistant_tab(f: &mut Frame, area: Rect, session: &SessionState, assistant_busy: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    if session.transcript.is_empty() {
        lines.push(Line::from(
            "Ask a question about the screened companies (press i to type).",
        ));
    }
    for exchange in &session.transcript {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] Q: ", exchange.at.format("%H:%M:%S")),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(exchange.question.clone()),
        ]));
        lines.push(Line::from(format!("A: {}", exchange.answer)));
        lines.push(Line::from(""));
    }

    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Assistant"))
        .wrap(Wrap { trim: false });
    f.render_widget(transcript, chunks[0]);

    let input_title = if assistant_busy {
        "Waiting for the assistant..."
    } else {
        "Question (i to type, Enter to send)"
    };
    let cursor = if session.input == InputMode::Question { "_" } else { "" };
    let input = Paragraph::new(format!("{}{}", session.question, cursor))
        .block(Block::default().borders(Borders::ALL).title(input_title));
    f.render_widget(input, chunks[1]);
}

fn render_status_bar(f: &mut Frame, area: Rect, session: &SessionState) {
    let status = Paragraph::new(session.status.clone())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
