use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::submit_query;
use crate::state::{AppState, FormField, QueryInput};

/// Handle key events while the query form is focused.
///
/// Up/Down move between fields, printable characters edit the active text
/// field, and Enter submits the query. The logic line is a toggle rather
/// than a text field. Returns `true` to exit the app, `false` to continue.
pub fn handle_form_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match (ke.code, ke.modifiers) {
        (KeyCode::Enter, _) => submit_query(app, query_tx),
        (KeyCode::Up, _) => app.form_field = app.form_field.prev(),
        (KeyCode::Down, _) => app.form_field = app.form_field.next(),
        (KeyCode::Left | KeyCode::Right, _) if app.form_field == FormField::Logic => {
            toggle_logic(app);
        }
        (KeyCode::Char(' '), _) if app.form_field == FormField::Logic => toggle_logic(app),
        (KeyCode::Backspace, _) => {
            if let Some(field) = text_field_mut(app) {
                field.pop();
            }
        }
        (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            if let Some(field) = text_field_mut(app) {
                field.push(ch);
            }
        }
        _ => {}
    }
    false
}

/// Flip the combination mode between AND and OR.
fn toggle_logic(app: &mut AppState) {
    app.logic = if app.logic == "AND" {
        "OR".into()
    } else {
        "AND".into()
    };
}

/// The editable string behind the active form field, when it has one.
fn text_field_mut(app: &mut AppState) -> Option<&mut String> {
    match app.form_field {
        FormField::Keyword => Some(&mut app.keyword),
        FormField::StartDate => Some(&mut app.start_date),
        FormField::EndDate => Some(&mut app.end_date),
        FormField::Logic => None,
    }
}
