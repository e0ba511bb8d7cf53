use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::onboard::state::{OnboardState, SLIDES};
use crate::ui::render::centered_rect;
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, state: &OnboardState) {
    let slide = &SLIDES[state.slide.min(SLIDES.len() - 1)];
    let area = centered_rect(70, 60, frame.area());

    let mut lines = Vec::new();
    if !slide.heading.is_empty() {
        lines.push(Line::from(Span::styled(
            slide.heading,
            Style::default()
                .fg(theme::INK)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    if !slide.tagline.is_empty() {
        lines.push(Line::from(Span::styled(
            slide.tagline,
            Style::default()
                .fg(theme::INK)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        slide.body,
        Style::default().fg(theme::MUTED),
    )));
    lines.push(Line::from(""));

    // Progress dots, current slide highlighted.
    let dots: Line = Line::from(
        (0..SLIDES.len())
            .map(|i| {
                let style = if i == state.slide {
                    Style::default().fg(theme::ACCENT_ORANGE)
                } else {
                    Style::default().fg(theme::MUTED)
                };
                Span::styled(if i == state.slide { " ● " } else { " ○ " }, style)
            })
            .collect::<Vec<_>>(),
    );
    lines.push(dots);
    lines.push(Line::from(""));

    let action = if state.is_last() {
        "Enter: Get Started"
    } else {
        "Enter: Continue   ←: Back"
    };
    lines.push(Line::from(Span::styled(
        action,
        Style::default().fg(theme::ACCENT_ORANGE),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
