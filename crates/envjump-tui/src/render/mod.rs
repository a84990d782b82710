//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use envjump_app::i18n::TextKey;
use envjump_app::state::{AppState, MAX_NUMBERED_ROWS};

use crate::layout::{self, PopupAreas};
use crate::theme::{palette, styles};
use crate::widgets::{modal_overlay, EnvironmentList, ToastStack};

/// Render the popup. Pure function of state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let rows = state.display_order().len();
    let areas = layout::create_popup(area, rows);

    modal_overlay::render_shadow(frame.buffer_mut(), areas.popup);
    modal_overlay::clear_area(frame.buffer_mut(), areas.popup);

    // No title in the empty state: the invitation is the only message
    let title = if state.is_loading() || rows > 0 {
        state.text(TextKey::PopupTitle)
    } else {
        ""
    };
    frame.render_widget(styles::popup_block(title), areas.popup);

    if state.is_loading() {
        render_message(frame, areas.body, state.text(TextKey::Loading), styles::text_muted());
    } else if rows == 0 {
        render_message(frame, areas.body, state.text(TextKey::CreateEnv), styles::accent_bold());
    } else {
        frame.render_widget(
            EnvironmentList::new(state.display_order(), state.highlighted),
            areas.body,
        );
    }

    render_status(frame, &areas, state);
    render_footer(frame, &areas, state);

    frame.render_widget(ToastStack::new(&state.toasts), area);
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    frame.render_widget(
        Paragraph::new(Line::styled(text, style))
            .centered()
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_status(frame: &mut Frame, areas: &PopupAreas, state: &AppState) {
    if state.in_flight == 0 {
        return;
    }
    let text = if state.in_flight > 1 {
        format!("{} ({})", state.text(TextKey::Launching), state.in_flight)
    } else {
        state.text(TextKey::Launching).to_string()
    };
    frame.render_widget(
        Paragraph::new(Line::styled(text, styles::status_launching())).centered(),
        areas.status,
    );
}

fn render_footer(frame: &mut Frame, areas: &PopupAreas, state: &AppState) {
    let rows = state.display_order().len();
    if rows == 0 {
        return;
    }

    let numbered = rows.min(MAX_NUMBERED_ROWS);
    let range = if numbered == 1 {
        "1".to_string()
    } else {
        format!("1-{}", numbered)
    };

    let line = Line::from(vec![
        Span::styled(range, styles::keybinding()),
        Span::raw(" "),
        Span::styled(state.text(TextKey::HelpKeys), styles::text_secondary()),
    ]);
    frame.render_widget(Paragraph::new(line).centered(), areas.footer);
}
