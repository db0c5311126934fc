//! Rendering layer for the newsdeck TUI.
//!
//! `draw` paints the whole frame: query form and source filter on the
//! left, results on the right, and a status strip along the bottom. Each
//! pane renders in its own submodule.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod form;
mod results;
mod sources;
mod status;

/// Render one frame of the interface.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(area);
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(outer[0]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(main[0]);

    form::render(f, left[0], app);
    sources::render(f, left[1], app);
    results::render(f, main[1], app);
    status::render(f, outer[1], app);
}
