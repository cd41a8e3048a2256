use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::store::PageItem;
use crate::tui::app::App;
use crate::tui::constants::{URL_TRUNCATE_LENGTH, colors};
use crate::utils::{relative_time, truncate_url};

pub fn draw_list_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search + page size
            Constraint::Min(5),    // links
            Constraint::Length(3), // selected entry detail
            Constraint::Length(3), // pagination
        ])
        .split(area);

    draw_search_row(frame, app, chunks[0]);
    draw_links(frame, app, chunks[1]);
    draw_detail(frame, app, chunks[2]);
    draw_pagination(frame, app, chunks[3]);
}

fn draw_search_row(frame: &mut Frame, app: &App, area: Rect) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(area);

    let title = if app.store.is_searching {
        "Search (searching...)".to_string()
    } else if app.inline_search_mode {
        "Search".to_string()
    } else {
        "Search [/]".to_string()
    };

    let border_style = if app.inline_search_mode {
        Style::default()
            .fg(colors::WARNING)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let search = Paragraph::new(app.store.search_input.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title)
                .border_style(border_style),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(search, row[0]);

    let page_size = Paragraph::new(format!("{} per page", app.store.items_per_page))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Size [s]")
                .border_style(Style::default().fg(Color::White)),
        )
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(page_size, row[1]);
}

fn draw_links(frame: &mut Frame, app: &mut App, area: Rect) {
    // Spinner only while there is nothing to show yet; refetches over
    // existing rows keep the rows visible.
    if app.store.links.is_empty() && app.store.loading {
        let loading = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Loading links...",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .block(list_block(app))
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(loading, area);
        return;
    }

    if app.store.links.is_empty() {
        let empty_text = if !app.store.applied_search().is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No matching links found. Try adjusting your search.",
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        "[Esc]",
                        Style::default()
                            .fg(colors::WARNING)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" to clear the search", Style::default().fg(Color::DarkGray)),
                ]),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No short links yet",
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        "[a]",
                        Style::default()
                            .fg(colors::SUCCESS)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        " to create your first link",
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
            ]
        };

        let empty = Paragraph::new(empty_text)
            .block(list_block(app))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Span::styled(
            "Short URL",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Original URL",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Created",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(""),
    ])
    .bottom_margin(1);

    let public_base = app.public_base_url().to_string();
    let mut rows = Vec::with_capacity(app.store.links.len());
    for link in &app.store.links {
        let copied = app.store.copied_id == Some(link.id);

        let marker = if copied {
            Span::styled(
                "Copied!",
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("")
        };

        rows.push(Row::new(vec![
            Span::styled(
                link.short_url(&public_base),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                truncate_url(&link.url, URL_TRUNCATE_LENGTH),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(
                relative_time(link.created_at),
                Style::default().fg(Color::Gray),
            ),
            marker,
        ]));
    }

    let table = Table::new(
        rows,
        [
            Constraint::Min(26),    // Short URL
            Constraint::Min(24),    // Original URL
            Constraint::Length(12), // Created
            Constraint::Length(8),  // Copy feedback
        ],
    )
    .header(header)
    .block(list_block(app))
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    app.table_state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn list_block(app: &App) -> Block<'static> {
    let mut title_parts = Vec::new();

    if !app.store.applied_search().is_empty() {
        title_parts.push(format!(
            "Search: \"{}\" ({} found)",
            app.store.applied_search(),
            app.store.total_count
        ));
    } else {
        title_parts.push(format!("Short Links ({})", app.store.total_count));
    }

    if app.store.total_pages > 1 {
        title_parts.push(format!(
            "Page {}/{}",
            app.store.current_page, app.store.total_pages
        ));
    }

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title_parts.join(" | "))
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
}

/// Full original URL of the selected entry; the list column only shows a
/// truncated version.
fn draw_detail(frame: &mut Frame, app: &App, area: Rect) {
    let content = match app.selected_link() {
        Some(link) => Line::from(vec![
            Span::styled(
                format!("/{} → ", link.slug),
                Style::default().fg(colors::PRIMARY),
            ),
            Span::styled(link.url.clone(), Style::default().fg(Color::White)),
        ]),
        None => Line::from(""),
    };

    let detail = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Original URL")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(detail, area);
}

fn draw_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.store.current_page;
    let total = app.store.total_pages;

    let mut spans = Vec::new();

    let prev_style = if current <= 1 {
        Style::default().fg(colors::MUTED)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled("‹ Prev", prev_style));
    spans.push(Span::raw("  "));

    for item in app.store.page_items() {
        match item {
            PageItem::Page(page) => {
                let style = if page == current {
                    Style::default()
                        .fg(colors::HIGHLIGHT_FG)
                        .bg(colors::HIGHLIGHT_BG)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::PRIMARY)
                };
                spans.push(Span::styled(format!(" {} ", page), style));
            }
            PageItem::Gap => {
                spans.push(Span::styled(" … ", Style::default().fg(colors::MUTED)));
            }
        }
        spans.push(Span::raw(" "));
    }

    let next_style = if current >= total {
        Style::default().fg(colors::MUTED)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::raw(" "));
    spans.push(Span::styled("Next ›", next_style));

    let pagination = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(pagination, area);
}
