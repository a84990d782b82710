//! Toast stack in the bottom-right corner

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use envjump_app::toast::ToastQueue;

use super::modal_overlay::clear_area;
use crate::theme::styles;

const TOAST_HEIGHT: u16 = 3;
const TOAST_MAX_WIDTH: u16 = 44;

/// Renders visible toasts newest at the bottom
pub struct ToastStack<'a> {
    toasts: &'a ToastQueue,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a ToastQueue) -> Self {
        Self { toasts }
    }
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = TOAST_MAX_WIDTH.min(area.width);
        let x = area.x + area.width.saturating_sub(width);
        let mut bottom = area.y + area.height;

        for toast in self.toasts.iter().rev() {
            if bottom < area.y + TOAST_HEIGHT {
                break;
            }
            let rect = Rect::new(x, bottom - TOAST_HEIGHT, width, TOAST_HEIGHT);
            clear_area(buf, rect);
            Paragraph::new(Line::styled(
                toast.title.as_str(),
                styles::toast_text(toast.variant),
            ))
            .block(styles::toast_block(toast.variant))
            .render(rect, buf);
            bottom -= TOAST_HEIGHT;
        }
    }
}
