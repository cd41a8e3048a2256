use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::constants::popup;
use crate::tui::ui::widgets::Popup;

pub fn draw_exiting_popup(frame: &mut Frame) {
    let area = frame.area();
    let inner = Popup::new("Quit", popup::EXITING)
        .theme_color(Color::Red)
        .render(frame, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit linkdeck?",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[y]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Yes   ", Style::default().fg(Color::Gray)),
            Span::styled(
                "[n]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" No", Style::default().fg(Color::Gray)),
        ]),
    ];

    let content = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(content, inner);
}
