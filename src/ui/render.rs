use crate::ui::app::{App, Focus};
use crate::ui::layout::layout_regions;
use crate::ui::lookup::RenderMode;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BACKGROUND, DISABLED, HOVER, LINK};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const PROMPT_TEXT: &str = "Enter a word to get started.";
pub const LOADING_TEXT: &str = "Loading...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(BACKGROUND)), area);

    let title = Paragraph::new(Line::from(Span::styled(
        "THESAURUS",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(DISABLED)));
    frame.render_widget(title, regions.header);

    render_input(frame, app, regions.input);

    render_body(frame, app, regions.body);

    frame.render_widget(footer(), regions.footer);
}

fn render_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Input;
    let border = if focused { HOVER } else { ACCENT };
    let input = Paragraph::new(Line::from(Span::styled(
        app.lookup().input_text().to_string(),
        Style::default().fg(ACCENT),
    )))
    .block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, area);

    if focused && area.width > 2 && area.height > 2 {
        let typed = u16::try_from(app.lookup().input_text().chars().count()).unwrap_or(u16::MAX);
        let x = area.x + 1 + typed.min(area.width.saturating_sub(3));
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// Draws the body for the current render mode.
///
/// In Results the navigation line gets its own bottom row, and the list
/// above it scrolls so the highlighted row stays on screen.
fn render_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let lookup = app.lookup();
    if lookup.render_mode() != RenderMode::Results {
        let status = Paragraph::new(status_lines(app)).alignment(Alignment::Center);
        frame.render_widget(status, area);
        return;
    }

    let [list_area, nav_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let offset = list_scroll(app.cursor(), list_area.height);
    let list = Paragraph::new(result_lines(app))
        .alignment(Alignment::Center)
        .scroll((offset, 0));
    frame.render_widget(list, list_area);

    let nav = Paragraph::new(navigation_line(
        lookup.can_go_previous(),
        lookup.can_go_next(),
        lookup.page_index(),
        lookup.page_count(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(nav, nav_area);
}

/// First list row to draw so that `cursor` fits in `height` rows.
fn list_scroll(cursor: usize, height: u16) -> u16 {
    if height == 0 {
        return 0;
    }
    let offset = cursor.saturating_sub(usize::from(height) - 1);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Prompt or Loading text.
fn status_lines(app: &App) -> Vec<Line<'static>> {
    match app.lookup().render_mode() {
        RenderMode::Prompt => vec![
            Line::from(""),
            Line::from(Span::styled(PROMPT_TEXT, Style::default().fg(ACCENT))),
        ],
        _ => {
            let spinner = SPINNER_FRAMES[(app.animation_tick() as usize) % SPINNER_FRAMES.len()];
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("{spinner} "), Style::default().fg(HOVER)),
                    Span::styled(LOADING_TEXT, Style::default().fg(ACCENT)),
                ]),
            ]
        }
    }
}

/// One line per word on the current page.
fn result_lines(app: &App) -> Vec<Line<'static>> {
    let highlight_rows = app.focus() == Focus::Results;
    app.lookup()
        .visible_results()
        .iter()
        .enumerate()
        .map(|(idx, word)| {
            let mut style = Style::default().fg(ACCENT);
            if highlight_rows && idx == app.cursor() {
                style = style.fg(HOVER).bg(ACTIVE_HIGHLIGHT);
            }
            Line::from(Span::styled(word.clone(), style))
        })
        .collect()
}

fn navigation_line(previous: bool, next: bool, page_index: usize, pages: usize) -> Line<'static> {
    let control = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DISABLED).add_modifier(Modifier::DIM)
        };
        Span::styled(format!("( {label} )"), style)
    };

    Line::from(vec![
        control("<", previous),
        Span::styled(
            format!("   page {} / {}   ", page_index + 1, pages),
            Style::default().fg(DISABLED),
        ),
        control(">", next),
    ])
}

fn footer() -> Paragraph<'static> {
    let hint_style = Style::default().fg(DISABLED).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(
            " Enter: Look up │ Tab: Results │ ←/→ PgUp/PgDn: Page │ Ctrl+Q: Quit   ",
            hint_style,
        ),
        Span::styled("Powered by ", Style::default().fg(ACCENT)),
        Span::styled("datamuse", Style::default().fg(LINK)),
        Span::styled(".", Style::default().fg(ACCENT)),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(DISABLED)),
    )
}
