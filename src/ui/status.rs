use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::logic;
use crate::state::{AppState, Notice};
use crate::theme::theme;

/// Render the status strip: notice plus export counter on the first
/// line, key hints on the second.
pub(super) fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();

    let mut top: Vec<Span> = Vec::new();
    match &app.notice {
        Some(Notice::Success(msg)) => {
            top.push(Span::styled(msg.clone(), Style::default().fg(th.green)));
        }
        Some(Notice::Error(msg)) => {
            top.push(Span::styled(msg.clone(), Style::default().fg(th.red)));
        }
        None => {
            top.push(Span::styled("Ready", Style::default().fg(th.subtext0)));
        }
    }
    top.push(Span::styled(
        format!(
            "  |  {} of {} downloadable",
            logic::downloadable_count(app),
            app.records.len()
        ),
        Style::default().fg(th.text),
    ));
    top.push(Span::styled(
        format!("  |  sort: {}", app.sort_order.label()),
        Style::default().fg(th.subtext0),
    ));
    if app.search_in_flight {
        top.push(Span::styled(
            "  Searching…",
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        ));
    }
    if app.export_in_flight {
        top.push(Span::styled(
            "  Exporting…",
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let hints = Line::from(Span::styled(
        "Tab: switch  Enter: search  Space: select  s: sort  e: export  o: open  c: clear filter  q: quit",
        Style::default().fg(th.subtext0),
    ));

    let widget = Paragraph::new(vec![Line::from(top), hints])
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled("Status", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(widget, area);
}
