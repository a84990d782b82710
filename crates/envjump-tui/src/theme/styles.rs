//! Semantic style builders

use envjump_app::toast::ToastVariant;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the highlighted row
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_launching() -> Style {
    Style::default()
        .fg(palette::STATUS_BLUE)
        .add_modifier(Modifier::ITALIC)
}

// --- Block builders ---
pub fn popup_block(title: &str) -> Block<'_> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
        .style(Style::default().bg(palette::POPUP_BG));

    if title.is_empty() {
        block
    } else {
        block.title(format!(" {} ", title)).title_style(accent_bold())
    }
}

pub fn toast_block(variant: ToastVariant) -> Block<'static> {
    let (border, bg) = match variant {
        ToastVariant::Default => (palette::BORDER_DIM, palette::TOAST_BG),
        ToastVariant::Destructive => (palette::STATUS_RED, palette::TOAST_DESTRUCTIVE_BG),
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(bg))
}

pub fn toast_text(variant: ToastVariant) -> Style {
    match variant {
        ToastVariant::Default => text_primary(),
        ToastVariant::Destructive => Style::default()
            .fg(palette::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    }
}
