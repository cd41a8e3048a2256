use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::app::{App, CurrentScreen};
use crate::tui::constants::colors;

/// Draw the tab bar: creation form on the left, list on the right.
pub fn draw_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let active = Style::default()
        .fg(colors::PRIMARY)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(colors::MUTED);

    let on_create = app.current_screen == CurrentScreen::Create;
    let list_label = if app.store.links.is_empty() {
        "My Links".to_string()
    } else {
        format!("My Links ({})", app.store.links.len())
    };

    let tabs = Line::from(vec![
        Span::styled(" Create Link ", if on_create { active } else { inactive }),
        Span::styled("|", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {} ", list_label),
            if on_create { inactive } else { active },
        ),
        Span::styled(
            format!("   linkdeck v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let bar = Paragraph::new(tabs)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(bar, area);
}

/// Draw the status bar: errors win over status, otherwise "Ready".
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default()
                .fg(Color::White)
                .bg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[OK] {}", app.status_message),
            Style::default()
                .fg(Color::Black)
                .bg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw the footer with keyboard shortcuts for the current screen.
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts: Vec<(&str, &str, Color)> = if app.inline_search_mode {
        vec![
            ("Enter", "Apply", Color::Green),
            ("Esc", "Clear", Color::Red),
        ]
    } else {
        match app.current_screen {
            CurrentScreen::List => vec![
                ("Up/Down", "Select", Color::Cyan),
                ("Left/Right", "Page", Color::Cyan),
                ("/", "Search", Color::Cyan),
                ("s", "Page Size", Color::Cyan),
                ("y", "Copy", Color::Green),
                ("Enter", "Open", Color::Green),
                ("a", "Create", Color::Yellow),
                ("r", "Refresh", Color::Magenta),
                ("?", "Help", Color::Blue),
                ("q", "Quit", Color::Magenta),
            ],
            CurrentScreen::Create => vec![
                ("Tab", "Switch Field", Color::Cyan),
                ("Enter", "Shorten", Color::Green),
                ("Esc", "My Links", Color::Red),
            ],
            CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
            CurrentScreen::Exiting => {
                vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
            }
        }
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(footer, area);
}
