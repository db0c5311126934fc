use ratatui::{
    Frame,
    layout::Rect,
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus, FormField};
use crate::theme::theme;

/// Label column shown before each form value.
const LABELS: [(&str, FormField); 4] = [
    ("Keyword  ", FormField::Keyword),
    ("Logic    ", FormField::Logic),
    ("From     ", FormField::StartDate),
    ("To       ", FormField::EndDate),
];

/// Render the query form pane and place the text cursor on the active
/// field while the pane has focus.
pub(super) fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Query);

    let lines: Vec<Line> = LABELS
        .iter()
        .map(|&(label, field)| {
            let active = focused && app.form_field == field;
            let label_style = Style::default().fg(if active { th.sapphire } else { th.subtext0 });
            let value_style = if active {
                Style::default().fg(th.text).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(if focused { th.text } else { th.subtext0 })
            };
            let value = match field {
                FormField::Keyword => app.keyword.as_str(),
                FormField::Logic => app.logic.as_str(),
                FormField::StartDate => app.start_date.as_str(),
                FormField::EndDate => app.end_date.as_str(),
            };
            Line::from(vec![
                Span::styled(label, label_style),
                Span::styled(value.to_string(), value_style),
            ])
        })
        .collect();

    let title = if app.search_in_flight {
        "Query (searching…)"
    } else if focused {
        "Query (focused)"
    } else {
        "Query"
    };
    let form = Paragraph::new(lines).style(Style::default().bg(th.base)).block(
        Block::default()
            .title(Span::styled(
                title,
                Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
    );
    f.render_widget(form, area);

    // Cursor at the end of the active text field; the logic line has no
    // text to edit, so it gets no cursor.
    let target = match app.form_field {
        FormField::Keyword => Some((0u16, app.keyword.as_str())),
        FormField::StartDate => Some((2, app.start_date.as_str())),
        FormField::EndDate => Some((3, app.end_date.as_str())),
        FormField::Logic => None,
    };
    if focused && let Some((line_idx, value)) = target {
        let label_w = LABELS[0].0.width() as u16;
        let right = area.x + area.width.saturating_sub(1);
        let x = std::cmp::min(area.x + 1 + label_w + value.width() as u16, right);
        let y = area.y + 1 + line_idx;
        f.set_cursor_position(Position::new(x, y));
    }
}
