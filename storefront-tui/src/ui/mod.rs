//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.

pub mod pager;

use crate::app::AppState;
use libstorefront::types::category_label;
use libstorefront::{CatalogView, Product, PAGE_SIZE};
use pager::{page_items, PageItem, MARGIN_PAGES, PAGE_RANGE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CARD_COLUMNS: usize = 2;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let view = state.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Controls
            Constraint::Min(4),    // Product cards
            Constraint::Length(3), // Pagination
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_controls(frame, chunks[0], state);
    render_products(frame, chunks[1], state, &view);
    render_pager(frame, chunks[2], state, &view);
    render_status_bar(frame, chunks[3], state, &view);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Style helper honoring NO_COLOR
fn color(state: &AppState, style: Style) -> Style {
    if state.config.colors_enabled {
        style
    } else {
        Style::default()
    }
}

fn accent(state: &AppState) -> Style {
    color(state, Style::default().fg(Color::Indexed(62)))
}

fn render_controls(frame: &mut Frame, area: Rect, state: &AppState) {
    let catalog = &state.catalog;
    let line = Line::from(vec![
        Span::raw("Category: "),
        Span::styled(
            category_label(&catalog.selected_category).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Sort by: "),
        Span::styled(catalog.sort_by.label(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(
            format!("[{}]", catalog.sort_direction.label()),
            color(state, Style::default().fg(Color::White).bg(Color::Indexed(62)))
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let controls = Paragraph::new(line).block(
        Block::default()
            .title(" Storefront ")
            .borders(Borders::ALL)
            .border_style(accent(state)),
    );
    frame.render_widget(controls, area);
}

fn render_products(frame: &mut Frame, area: Rect, state: &AppState, view: &CatalogView<'_>) {
    if view.items.is_empty() {
        let message = if state.is_loading() {
            "Loading products..."
        } else {
            "No products to show"
        };
        let empty = Paragraph::new(vec![Line::from(""), Line::from(message)])
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let rows = PAGE_SIZE.div_ceil(CARD_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row, chunk) in view.items.chunks(CARD_COLUMNS).enumerate() {
        let Some(row_area) = row_areas.get(row) else {
            break;
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, CARD_COLUMNS as u32); CARD_COLUMNS])
            .split(*row_area);

        for (product, cell) in chunk.iter().zip(cells.iter()) {
            render_card(frame, *cell, state, product);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, state: &AppState, product: &Product) {
    let lines = vec![
        Line::from(Span::styled(
            product.display_price(),
            color(state, Style::default().fg(Color::Green)).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(category_label(&product.category).to_string())),
        Line::from(Span::styled(
            product.image.clone(),
            color(state, Style::default().fg(Color::DarkGray)),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", product.title))
                .borders(Borders::ALL)
                .border_style(accent(state)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

/// Previous / numbered pages / next, with the current page highlighted
pub fn pager_line(state: &AppState, view: &CatalogView<'_>) -> Line<'static> {
    let unicode = state.config.unicode_enabled;
    let (prev, next, gap) = if unicode {
        ("‹ Prev", "Next ›", "…")
    } else {
        ("< Prev", "Next >", "...")
    };

    let enabled = Style::default();
    let disabled = color(state, Style::default().fg(Color::DarkGray));
    let active = if state.config.colors_enabled {
        Style::default().fg(Color::White).bg(Color::Indexed(62))
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
    .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(prev, if view.has_previous() { enabled } else { disabled }),
        Span::raw("  "),
    ];

    for item in page_items(view.page_count, view.page_number, PAGE_RANGE, MARGIN_PAGES) {
        match item {
            PageItem::Page(index) if index == view.page_number => {
                spans.push(Span::styled(format!(" {} ", index + 1), active));
            }
            PageItem::Page(index) => spans.push(Span::raw(format!(" {} ", index + 1))),
            PageItem::Break => spans.push(Span::raw(format!(" {} ", gap))),
        }
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(next, if view.has_next() { enabled } else { disabled }));
    Line::from(spans)
}

fn render_pager(frame: &mut Frame, area: Rect, state: &AppState, view: &CatalogView<'_>) {
    let pager = Paragraph::new(pager_line(state, view))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(pager, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, view: &CatalogView<'_>) {
    let summary = if state.is_loading() {
        "Loading...".to_string()
    } else if view.page_count == 0 {
        format!("0 of {} products", view.total)
    } else {
        format!(
            "Showing {} of {} products | Page {}/{}",
            view.items.len(),
            view.matching,
            view.page_number + 1,
            view.page_count
        )
    };

    let line = Line::from(vec![
        Span::raw(summary),
        Span::raw(" | "),
        Span::styled(
            "c: Category  s: Sort  d: Direction  ←/→: Page  r: Reload  F1: Help  q: Quit",
            color(state, Style::default().fg(Color::Gray)),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::ALL)), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Catalog:"),
        Line::from("  c / C       - Next / previous category"),
        Line::from("  s           - Sort by name or price"),
        Line::from("  d           - Toggle ascending / descending"),
        Line::from(""),
        Line::from("Pages:"),
        Line::from("  ← / h       - Previous page"),
        Line::from("  → / l       - Next page"),
        Line::from("  Home / End  - First / last page"),
        Line::from("  1-9         - Jump to page"),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  r           - Reload products"),
        Line::from("  F1 / ?      - Toggle help"),
        Line::from("  q           - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(color(state, Style::default().fg(Color::Cyan))),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
