use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::logic::source_filter_active;
use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::util::truncate_to_width;

/// Render the source filter pane: one row per outlet with its record
/// count, toggled outlets marked.
pub(super) fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Sources);
    let name_width = area.width.saturating_sub(10) as usize;

    let items: Vec<ListItem> = app
        .source_counts
        .iter()
        .map(|s| {
            let active = source_filter_active(app, &s.name);
            let marker = if active { "[x] " } else { "[ ] " };
            let marker_style = Style::default().fg(if active { th.green } else { th.subtext0 });
            let name_style = if active {
                Style::default().fg(th.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(if focused { th.text } else { th.subtext0 })
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(truncate_to_width(&s.name, name_width), name_style),
                Span::styled(format!("  {}", s.count), Style::default().fg(th.overlay1)),
            ]))
        })
        .collect();

    let title = if app.active_sources.is_empty() {
        format!("Sources ({})", app.source_counts.len())
    } else {
        format!(
            "Sources ({}, {} toggled)",
            app.source_counts.len(),
            app.active_sources.len()
        )
    };
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
        )
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.sources_state);
}
