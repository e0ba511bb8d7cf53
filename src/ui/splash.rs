use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::render::centered_rect;
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>) {
    let area = centered_rect(60, 40, frame.area());
    let lines = vec![
        Line::from(Span::styled(
            "Savor..",
            Style::default()
                .fg(theme::INK)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Cook Anything, Anytime",
            Style::default().fg(theme::MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
