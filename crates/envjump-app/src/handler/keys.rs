//! Key event handling

use crate::input_key::InputKey;
use crate::message::Message;
use crate::selection::resolve_key;
use crate::state::AppState;

/// Convert a key event to a message against the current state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Dismiss
        InputKey::Esc | InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Navigation
        InputKey::Down | InputKey::Char('j') => Some(Message::HighlightNext),
        InputKey::Up | InputKey::Char('k') => Some(Message::HighlightPrevious),
        InputKey::Home => Some(Message::HighlightFirst),
        InputKey::End => Some(Message::HighlightLast),

        // Click on the highlighted row
        InputKey::Enter => Some(Message::SelectHighlighted),

        // Number keys
        InputKey::Char(c) => {
            let order = state.display_order();
            resolve_key(c, order.len()).map(|index| Message::SelectEnvironment {
                name: order[index].clone(),
            })
        }

        _ => None,
    }
}
