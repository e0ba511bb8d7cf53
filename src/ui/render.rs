use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::ui::app::{App, Screen};
use crate::ui::{dashboard, detail, login, onboard, splash, theme};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    // Cream canvas behind every screen.
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::CREAM_BG).fg(theme::INK)),
        frame.area(),
    );

    match app.screen() {
        Screen::Splash => splash::draw(frame),
        Screen::Onboarding => onboard::view::draw(frame, app.onboard()),
        Screen::Login => login::view::draw(frame, app.login()),
        Screen::Dashboard => dashboard::view::draw(frame, app),
        Screen::Detail { .. } => detail::view::draw(frame, app.detail()),
    }
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
