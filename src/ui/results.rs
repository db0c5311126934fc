use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::logic::{self, RowView};
use crate::state::{AppState, Focus, NewsRecord, Sentiment};
use crate::theme::{Theme, theme};
use crate::util::truncate_to_width;

/// Render the results pane. Every loaded record gets a row; rows hidden
/// by the source filter are dimmed instead of dropped, so the list never
/// shifts under the cursor when filters change.
pub(super) fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Results);
    let title_width = area.width.saturating_sub(38) as usize;

    let items: Vec<ListItem> = logic::rows(app)
        .iter()
        .map(|row| render_row(row, &th, title_width))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    format!("Results ({})", app.records.len()),
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
        )
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.results_state);
}

/// Build one list row: marker, date, outlet tag, sentiment badge, title.
fn render_row(row: &RowView<'_>, th: &Theme, title_width: usize) -> ListItem<'static> {
    let r = row.record;
    let marker = if row.selected { "[x] " } else { "[ ] " };
    let badge = r.sentiment_class();

    let (marker_fg, date_fg, source_fg, badge_fg, title_fg) = if row.visible {
        (
            if row.selected { th.green } else { th.subtext0 },
            th.subtext0,
            th.sapphire,
            sentiment_color(badge, th),
            th.text,
        )
    } else {
        (
            th.overlay1,
            th.overlay1,
            th.overlay1,
            th.overlay1,
            th.overlay1,
        )
    };

    let mut segs = vec![
        Span::styled(marker, Style::default().fg(marker_fg)),
        Span::styled(format!("{} ", date_cell(r)), Style::default().fg(date_fg)),
        Span::styled(
            format!("[{}] ", truncate_to_width(&r.source, 12)),
            Style::default().fg(source_fg),
        ),
        Span::styled(
            format!("{} ", badge.badge()),
            Style::default().fg(badge_fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate_to_width(&r.title, title_width),
            Style::default().fg(title_fg),
        ),
    ];
    if !row.visible {
        for seg in &mut segs {
            seg.style = seg.style.add_modifier(Modifier::DIM);
        }
    }
    ListItem::new(Line::from(segs))
}

/// Accent color for a sentiment badge.
fn sentiment_color(sentiment: Sentiment, th: &Theme) -> Color {
    match sentiment {
        Sentiment::Positive => th.green,
        Sentiment::Negative => th.red,
        Sentiment::Neutral => th.yellow,
    }
}

/// Fixed-width date column. Unparsable timestamps show as question
/// marks rather than leaking whatever string the service sent.
fn date_cell(record: &NewsRecord) -> String {
    let ts = logic::published_ts(record);
    if ts == logic::sort::VERY_OLD {
        return "????-??-??".into();
    }
    chrono::DateTime::from_timestamp(ts, 0).map_or_else(
        || "????-??-??".into(),
        |dt| dt.format("%Y-%m-%d").to_string(),
    )
}
