//! Popup layout
//!
//! The popup is a fixed-width box centered on screen whose height follows
//! the number of environment rows, up to a cap.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::widgets::modal_overlay::centered_rect;

/// Popup box width including borders
pub const POPUP_WIDTH: u16 = 48;

/// Rows shown before the list starts scrolling
pub const MAX_LIST_ROWS: u16 = 12;

/// Screen areas for the popup
#[derive(Debug, Clone, Copy)]
pub struct PopupAreas {
    /// Outer box (border included)
    pub popup: Rect,

    /// Environment rows, or the loading/empty message
    pub body: Rect,

    /// In-flight launch indicator
    pub status: Rect,

    /// Key help
    pub footer: Rect,
}

/// Lay out the popup for `row_count` environment rows
pub fn create_popup(area: Rect, row_count: usize) -> PopupAreas {
    let body_height = (row_count as u16).clamp(1, MAX_LIST_ROWS);
    // Borders (2) + top padding + status + footer
    let popup = centered_rect(POPUP_WIDTH, body_height + 5, area);

    let inner = Rect::new(
        popup.x.saturating_add(1),
        popup.y.saturating_add(1),
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );

    let chunks = Layout::vertical([
        Constraint::Length(1), // Padding
        Constraint::Min(1),    // Body
        Constraint::Length(1), // Status
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    PopupAreas {
        popup,
        body: chunks[1],
        status: chunks[2],
        footer: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_grows_with_rows() {
        let area = Rect::new(0, 0, 80, 24);

        let two = create_popup(area, 2);
        assert_eq!(two.popup.height, 7);
        assert_eq!(two.body.height, 2);

        let five = create_popup(area, 5);
        assert_eq!(five.body.height, 5);
    }

    #[test]
    fn test_empty_mapping_still_has_message_row() {
        let layout = create_popup(Rect::new(0, 0, 80, 24), 0);
        assert_eq!(layout.body.height, 1);
    }

    #[test]
    fn test_rows_capped() {
        let layout = create_popup(Rect::new(0, 0, 80, 40), 30);
        assert_eq!(layout.body.height, MAX_LIST_ROWS);
    }

    #[test]
    fn test_popup_centered() {
        let layout = create_popup(Rect::new(0, 0, 80, 24), 2);
        assert_eq!(layout.popup.x, 16);
        assert_eq!(layout.popup.width, POPUP_WIDTH);
        assert_eq!(layout.footer.y + 1, layout.popup.y + layout.popup.height - 1);
    }
}
