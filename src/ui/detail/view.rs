use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::detail::state::DetailState;
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, state: &DetailState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let lines = match state {
        DetailState::Loading => vec![Line::from(Span::styled(
            "Loading…",
            Style::default().fg(theme::MUTED),
        ))],
        DetailState::Failed { message } => vec![Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(theme::ERROR_RED),
        ))],
        DetailState::Loaded { recipe } => {
            let mut lines = vec![Line::from(Span::styled(
                recipe.name.clone(),
                Style::default()
                    .fg(theme::INK)
                    .add_modifier(Modifier::BOLD),
            ))];
            if let Some(rating) = recipe.rating_label() {
                lines.push(Line::from(Span::styled(
                    rating,
                    Style::default().fg(theme::STAR_GOLD),
                )));
            }
            if let Some(cuisine) = &recipe.cuisine {
                lines.push(Line::from(Span::styled(
                    format!("Cuisine: {cuisine}"),
                    Style::default().fg(theme::MUTED),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Ingredients",
                Style::default()
                    .fg(theme::INK)
                    .add_modifier(Modifier::BOLD),
            )));
            for ingredient in &recipe.ingredients {
                lines.push(Line::from(format!("• {ingredient}")));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Instructions",
                Style::default()
                    .fg(theme::INK)
                    .add_modifier(Modifier::BOLD),
            )));
            for (i, step) in recipe.instructions.iter().enumerate() {
                lines.push(Line::from(format!("{}. {step}", i + 1)));
            }
            lines
        }
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Esc: back",
            Style::default().fg(theme::MUTED),
        )),
        rows[1],
    );
}
