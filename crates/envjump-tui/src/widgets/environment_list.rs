//! Numbered environment rows

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::styles;

/// Row label: `"{index}. {name}"` with a 1-based index
pub fn row_label(index: usize, name: &str) -> String {
    format!("{}. {}", index + 1, name)
}

/// One row per environment, in display order, with the highlighted row
/// drawn in the accent style.
///
/// When there are more rows than fit, the view scrolls so the highlighted
/// row stays visible.
pub struct EnvironmentList<'a> {
    names: &'a [String],
    highlighted: usize,
}

impl<'a> EnvironmentList<'a> {
    pub fn new(names: &'a [String], highlighted: usize) -> Self {
        Self { names, highlighted }
    }

    fn first_visible(&self, height: usize) -> usize {
        if height == 0 || self.highlighted < height {
            0
        } else {
            self.highlighted + 1 - height
        }
    }
}

impl Widget for EnvironmentList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height as usize;
        let start = self.first_visible(height);

        for (offset, (index, name)) in self
            .names
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .enumerate()
        {
            let style = if index == self.highlighted {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };

            let row = Rect::new(area.x, area.y + offset as u16, area.width, 1);
            let label = format!(" {} ", row_label(index, name));
            let line = Line::from(Span::styled(label, style)).centered();
            line.render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_row_label_is_one_based() {
        assert_eq!(row_label(0, "dev"), "1. dev");
        assert_eq!(row_label(11, "qa"), "12. qa");
    }

    #[test]
    fn test_renders_numbered_rows_in_order() {
        let names = names(&["dev", "prod"]);
        let mut term = TestTerminal::with_size(30, 4);
        term.render_widget(EnvironmentList::new(&names, 0), term.area());

        assert!(term.line_contains(0, "1. dev"));
        assert!(term.line_contains(1, "2. prod"));
    }

    #[test]
    fn test_scrolls_to_keep_highlight_visible() {
        let names: Vec<String> = (0..10).map(|i| format!("env{}", i)).collect();
        let mut term = TestTerminal::with_size(30, 3);
        term.render_widget(EnvironmentList::new(&names, 7), term.area());

        assert!(term.line_contains(2, "8. env7"));
        assert!(!term.buffer_contains("1. env0"));
    }
}
