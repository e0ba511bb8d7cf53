use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::login::state::{LoginField, LoginFormState};
use crate::ui::render::centered_rect;
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, state: &LoginFormState) {
    let area = centered_rect(60, 70, frame.area());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(1), // subtitle
            Constraint::Length(1),
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1), // status line
            Constraint::Length(1),
            Constraint::Min(1), // hints
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Savor..",
            Style::default()
                .fg(theme::INK)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Cook Anything, Anytime",
            Style::default().fg(theme::MUTED),
        ))
        .alignment(Alignment::Center),
        rows[1],
    );

    frame.render_widget(
        field("Username or Email", &state.username, state.focus == LoginField::Username),
        rows[3],
    );
    frame.render_widget(
        field(
            "Password (min 6 chars)",
            &state.password_display(),
            state.focus == LoginField::Password,
        ),
        rows[4],
    );

    let status = if state.submitting {
        Line::from(Span::styled("Logging in…", Style::default().fg(theme::MUTED)))
    } else if let Some(error) = &state.error {
        Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(theme::ERROR_RED),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), rows[5]);

    let hints = vec![
        Line::from(Span::styled(
            "Tab: switch field   Ctrl-E: show/hide password   Enter: log in",
            Style::default().fg(theme::MUTED),
        )),
        Line::from(Span::styled(
            "Demo account — id: emilys, password: emilyspass",
            Style::default().fg(theme::MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), rows[7]);
}

fn field<'a>(label: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused {
        Style::default().fg(theme::ACCENT_ORANGE)
    } else {
        Style::default().fg(theme::MUTED)
    };
    Paragraph::new(value.to_string())
        .style(Style::default().fg(theme::INK).bg(theme::FIELD_BG))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(label),
        )
}
