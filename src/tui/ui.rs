//! Rendering for the gainers/losers dashboard.

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use rust_decimal::Decimal;

use crate::models::ticker::Ticker24h;

use super::app::App;

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title and clock
            Constraint::Length(1), // Instrument count
            Constraint::Fill(1),   // Gainers table
            Constraint::Fill(1),   // Losers table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, main_layout[0]);
    render_count_line(frame, main_layout[1], app);
    render_ranked_table(
        frame,
        main_layout[2],
        " Gainers Top 10 ",
        Color::Green,
        app.dataset.as_ref().map(|d| d.gainers.as_slice()),
    );
    render_ranked_table(
        frame,
        main_layout[3],
        " Losers Top 10 ",
        Color::Red,
        app.dataset.as_ref().map(|d| d.losers.as_slice()),
    );
    render_status_bar(frame, main_layout[4], app);
}

/// Renders the title line with the wall clock on the right.
fn render_header(frame: &mut Frame, area: Rect) {
    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(21)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        " Perpetual Futures Movers",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, header_layout[0]);

    let clock = Paragraph::new(Span::styled(
        Local::now().format("%Y-%m-%d %H:%M:%S ").to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(clock, header_layout[1]);
}

/// Renders the valid-instrument count line.
fn render_count_line(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.dataset {
        Some(dataset) => format!(" tracking {} valid perpetual instruments", dataset.valid_count),
        None => " fetching instrument data…".to_string(),
    };
    let para = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)));
    frame.render_widget(para, area);
}

/// Renders one ranked table (gainers or losers).
fn render_ranked_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    entries: Option<&[Ticker24h]>,
) {
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(entries) = entries else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let para = Paragraph::new(Span::styled(
            "waiting for data…",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(para, inner);
        return;
    };

    let header = Row::new(vec![
        Cell::from("Symbol"),
        Cell::from(Line::from("Price").right_aligned()),
        Cell::from(Line::from("Change%").right_aligned()),
        Cell::from(Line::from("24h Volume").right_aligned()),
        Cell::from(Line::from("24h High").right_aligned()),
        Cell::from(Line::from("24h Low").right_aligned()),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = entries.iter().map(ticker_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(block);

    frame.render_widget(table, area);
}

/// Builds one table row from a ticker entry.
fn ticker_row(ticker: &Ticker24h) -> Row<'static> {
    let change_color = if ticker.price_change_percent > Decimal::ZERO {
        Color::Green
    } else if ticker.price_change_percent < Decimal::ZERO {
        Color::Red
    } else {
        Color::Gray
    };

    Row::new(vec![
        Cell::from(ticker.symbol.clone()),
        Cell::from(Line::from(format!("{:.4}", ticker.last_price)).right_aligned()),
        Cell::from(
            Line::from(Span::styled(
                format!("{:+.2}%", ticker.price_change_percent),
                Style::default().fg(change_color),
            ))
            .right_aligned(),
        ),
        Cell::from(Line::from(ticker.volume_display()).right_aligned()),
        Cell::from(Line::from(format!("{:.4}", ticker.high_price)).right_aligned()),
        Cell::from(Line::from(format!("{:.4}", ticker.low_price)).right_aligned()),
    ])
}

/// Renders the status bar.
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let state_span = if app.refreshing {
        Span::styled(" Refreshing ", Style::default().fg(Color::Yellow))
    } else if let Some(error) = &app.error {
        Span::styled(format!(" {error} "), Style::default().fg(Color::Red))
    } else if let Some(updated) = app.last_update {
        Span::styled(
            format!(" updated {} ", updated.format("%H:%M:%S")),
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled(" fetching data… ", Style::default().fg(Color::Gray))
    };

    let help = " r refresh │ q quit ";
    let spans = vec![
        state_span,
        Span::raw(format!(
            "{:>width$}",
            help,
            width = area.width.saturating_sub(30) as usize
        )),
    ];

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
