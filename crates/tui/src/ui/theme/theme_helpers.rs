use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Rounded block with a warning-colored border; used by the warning dialog.
pub fn warning_block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>) -> Block<'a> {
    let border_style = theme.status_warning();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, border_style.add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers.
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Table header text: secondary + bold over the muted surface.
pub fn table_header_style<T: Theme + ?Sized>(theme: &T) -> Style {
    Style::default()
        .bg(theme.roles().surface_muted)
        .fg(theme.roles().text_secondary)
        .add_modifier(Modifier::BOLD)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// Non-RGB colors are returned unchanged.
pub(crate) fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let dr = (r as f32 * f).round().clamp(0.0, 255.0) as u8;
            let dg = (g as f32 * f).round().clamp(0.0, 255.0) as u8;
            let db = (b as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(dr, dg, db)
        }
        other => other,
    }
}

/// Zebra striping for table rows.
pub fn table_row_style<T: Theme + ?Sized>(theme: &T, row_index: usize) -> Style {
    let ThemeRoles {
        table_row_even,
        table_row_odd,
        text,
        ..
    } = *theme.roles();
    let bg = if row_index % 2 == 0 { table_row_even } else { table_row_odd };
    Style::default().bg(bg).fg(text)
}

pub fn table_selected_style<T: Theme + ?Sized>(theme: &T) -> Style {
    theme.selection_style().add_modifier(Modifier::BOLD)
}

/// Build `key description` hint spans for the status bar.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

/// Color family of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTone {
    Neutral,
    Positive,
    Caution,
    Destructive,
}

impl ButtonTone {
    fn color<T: Theme + ?Sized>(self, theme: &T) -> Color {
        let roles = theme.roles();
        match self {
            Self::Neutral => roles.accent_secondary,
            Self::Positive => roles.success,
            Self::Caution => roles.warning,
            Self::Destructive => roles.error,
        }
    }
}

/// Render a bordered button. Focused buttons are filled with their tone.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, tone: ButtonTone, is_focused: bool, theme: &T) {
    let color = tone.color(theme);
    let (style, border_style) = if is_focused {
        (
            Style::default().bg(color).fg(theme.roles().background).add_modifier(Modifier::BOLD),
            Style::default().fg(color),
        )
    } else {
        (Style::default().fg(color), theme.border_style(false))
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(Block::bordered().border_style(border_style))
            .style(style),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DraculaTheme;

    #[test]
    fn darken_only_touches_rgb() {
        assert_eq!(darken_rgb(Color::Rgb(100, 50, 0), 0.5), Color::Rgb(50, 25, 0));
        assert_eq!(darken_rgb(Color::Indexed(12), 0.5), Color::Indexed(12));
    }

    #[test]
    fn hint_spans_pair_keys_with_descriptions() {
        let theme = DraculaTheme::new();
        let spans = build_hint_spans(&theme, &[("Tab", " focus "), ("Ctrl+S", " add ")]);
        let text: Vec<&str> = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(text, ["Tab", " focus ", "Ctrl+S", " add "]);
    }

    #[test]
    fn rows_alternate_backgrounds() {
        let theme = DraculaTheme::new();
        assert_ne!(table_row_style(&theme, 0).bg, table_row_style(&theme, 1).bg);
        assert_eq!(table_row_style(&theme, 0).bg, table_row_style(&theme, 2).bg);
    }
}
