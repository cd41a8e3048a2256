use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::app::{App, FormField};
use crate::tui::constants::colors;
use crate::tui::ui::widgets::InputField;

pub fn draw_create_screen(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL field
            Constraint::Length(3), // slug field
            Constraint::Length(1), // slug feedback
            Constraint::Length(2), // slug hint
            Constraint::Length(3), // form error
            Constraint::Length(3), // submit
            Constraint::Min(0),
        ])
        .split(area);

    InputField::new("URL to Shorten", &app.form.url)
        .active(app.form.editing == Some(FormField::Url))
        .required()
        .placeholder("https://example.com/very-long-url")
        .render(frame, chunks[0]);

    InputField::new("Custom Slug", &app.form.slug)
        .active(app.form.editing == Some(FormField::Slug))
        .placeholder("custom-slug")
        .render(frame, chunks[1]);

    draw_slug_feedback(frame, app, chunks[2]);

    let hint = Paragraph::new(
        "Leave blank to generate a random slug. Must be at least 4 characters.",
    )
    .style(Style::default().fg(colors::MUTED));
    frame.render_widget(hint, chunks[3]);

    if let Some(error) = &app.form.error {
        let error_box = Paragraph::new(error.clone())
            .style(Style::default().fg(colors::ERROR))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(colors::ERROR)),
            );
        frame.render_widget(error_box, chunks[4]);
    }

    draw_submit(frame, app, chunks[5]);
}

fn draw_slug_feedback(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.form.slug_checking {
        Line::from(Span::styled(
            "Checking availability...",
            Style::default().fg(Color::Gray),
        ))
    } else if let Some(status) = &app.form.slug_status {
        if status.available {
            Line::from(Span::styled(
                "This slug is available",
                Style::default().fg(colors::SUCCESS),
            ))
        } else {
            let message = status
                .error
                .clone()
                .unwrap_or_else(|| "This slug is already taken".to_string());
            Line::from(Span::styled(message, Style::default().fg(colors::ERROR)))
        }
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_submit(frame: &mut Frame, app: &App, area: Rect) {
    let (label, style) = if app.form.submitting {
        (
            "Shortening...",
            Style::default().fg(colors::WARNING),
        )
    } else if app.form.is_valid() {
        (
            "Shorten URL [Enter]",
            Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Shorten URL [Enter]", Style::default().fg(colors::MUTED))
    };

    let button = Paragraph::new(label)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        )
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(button, area);
}
