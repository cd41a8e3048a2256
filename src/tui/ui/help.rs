use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::constants::popup;
use crate::tui::ui::widgets::Popup;

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<12}", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn draw_help_popup(frame: &mut Frame) {
    let area = frame.area();
    let inner = Popup::new("Help", popup::HELP).render(frame, area);

    let lines = vec![
        section("My Links"),
        key_line("Up/Down j/k", "Move selection"),
        key_line("Left/Right", "Previous / next page"),
        key_line("Home/End", "First / last page"),
        key_line("/", "Search by URL or slug"),
        key_line("Esc", "Clear search"),
        key_line("s", "Cycle page size (5/10/25/50)"),
        key_line("y", "Copy short URL to clipboard"),
        key_line("Enter / o", "Open original URL in browser"),
        key_line("r", "Refresh the current page"),
        Line::from(""),
        section("Create Link"),
        key_line("Tab", "Switch between URL and slug"),
        key_line("Enter", "Shorten URL"),
        key_line("Esc", "Back to My Links"),
        Line::from(""),
        section("Anywhere"),
        key_line("a", "Create a new link"),
        key_line("?", "This help"),
        key_line("q", "Quit"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
