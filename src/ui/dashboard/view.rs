use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::api::Recipe;
use crate::ui::app::App;
use crate::ui::dashboard::state::DashboardLoadState;
use crate::ui::search::SearchState;
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // greeting
            Constraint::Length(3), // search box
            Constraint::Min(3),    // content region
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Hi, {} ", app.username()),
                Style::default()
                    .fg(theme::INK)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("— Savor..", Style::default().fg(theme::ACCENT_ORANGE)),
        ])),
        rows[0],
    );

    draw_search_box(frame, app, rows[1]);

    // The idle dashboard content and the search lifecycle are disjoint:
    // featured/tags/popular render only while search is Idle.
    match app.search().state() {
        SearchState::Idle => draw_idle_content(frame, app, rows[2]),
        SearchState::Debouncing { .. } | SearchState::InFlight { .. } => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Searching…",
                    Style::default().fg(theme::MUTED),
                )),
                rows[2],
            );
        }
        SearchState::Succeeded { results, .. } => {
            if results.is_empty() {
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        "No recipes matched.",
                        Style::default().fg(theme::MUTED),
                    )),
                    rows[2],
                );
            } else {
                draw_recipe_list(frame, "Results", results, Some(app.selection()), rows[2]);
            }
        }
        SearchState::Failed { error, .. } => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    error.as_str(),
                    Style::default().fg(theme::ERROR_RED),
                )),
                rows[2],
            );
        }
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            "↑/↓: select   Enter: open   Esc: clear search   Ctrl-R: reload   Ctrl-D: log out",
            Style::default().fg(theme::MUTED),
        )),
        rows[3],
    );
}

fn draw_search_box(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let border = if app.search().state().is_idle() {
        Style::default().fg(theme::MUTED)
    } else {
        Style::default().fg(theme::ACCENT_ORANGE)
    };
    frame.render_widget(
        Paragraph::new(format!("🔍 {}", app.search().input()))
            .style(Style::default().fg(theme::INK).bg(theme::FIELD_BG))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title("Search recipes"),
            ),
        area,
    );
}

fn draw_idle_content(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match app.dashboard() {
        DashboardLoadState::Loading => {
            frame.render_widget(
                Paragraph::new(Span::styled("Loading…", Style::default().fg(theme::MUTED))),
                area,
            );
        }
        DashboardLoadState::Failed { message } => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    message.as_str(),
                    Style::default().fg(theme::ERROR_RED),
                )),
                area,
            );
        }
        DashboardLoadState::Loaded { data } => {
            let sections = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4), // featured strip
                    Constraint::Length(2), // categories row
                    Constraint::Min(3),    // popular list
                ])
                .split(area);

            draw_featured_strip(frame, &data.featured, sections[0]);
            draw_tag_row(frame, &data.tags, app.tag_row_limit(), sections[1]);
            draw_recipe_list(
                frame,
                "Popular Recipes",
                &data.popular,
                Some(app.selection()),
                sections[2],
            );
        }
    }
}

fn draw_featured_strip(frame: &mut Frame<'_>, featured: &[Recipe], area: Rect) {
    let mut spans = Vec::new();
    for (i, recipe) in featured.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(theme::MUTED)));
        }
        spans.push(Span::styled(
            recipe.name.clone(),
            Style::default().fg(theme::INK),
        ));
        if let Some(rating) = recipe.rating_label() {
            spans.push(Span::styled(
                format!(" {rating}"),
                Style::default().fg(theme::STAR_GOLD),
            ));
        }
    }

    let lines = vec![
        Line::from(Span::styled(
            "Featured Recipes",
            Style::default()
                .fg(theme::INK)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(spans),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_tag_row(frame: &mut Frame<'_>, tags: &[String], limit: usize, area: Rect) {
    let mut spans = vec![Span::styled(
        "Categories  ",
        Style::default()
            .fg(theme::INK)
            .add_modifier(Modifier::BOLD),
    )];
    for tag in tags.iter().take(limit) {
        spans.push(Span::styled(
            format!("[{tag}] "),
            Style::default().fg(theme::ACCENT_ORANGE),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_recipe_list(
    frame: &mut Frame<'_>,
    title: &str,
    recipes: &[Recipe],
    selected: Option<usize>,
    area: Rect,
) {
    let items: Vec<ListItem> = recipes
        .iter()
        .map(|recipe| {
            let mut spans = vec![Span::styled(
                recipe.name.clone(),
                Style::default().fg(theme::INK),
            )];
            let subtitle = recipe.subtitle();
            if !subtitle.is_empty() {
                spans.push(Span::styled(
                    format!("  {subtitle}"),
                    Style::default().fg(theme::MUTED),
                ));
            }
            if let Some(rating) = recipe.rating_label() {
                spans.push(Span::styled(
                    format!("  {rating}"),
                    Style::default().fg(theme::STAR_GOLD),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::TOP).title(title.to_string()))
        .highlight_style(
            Style::default()
                .bg(theme::SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(selected.filter(|_| !recipes.is_empty()));
    frame.render_stateful_widget(list, area, &mut state);
}
