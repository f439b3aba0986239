use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::theme::theme_helpers::panel_style;

/// Bottom line: the collection count on the left, key hints on the right.
pub fn render_status_bar(frame: &mut Frame, rect: Rect, app: &App, hints: Vec<Span<'_>>) {
    let theme = &*app.ctx.theme;
    let status = Span::styled(
        format!(" {}", app.collection.status()),
        theme.status_success().add_modifier(Modifier::BOLD),
    );
    let status_width = u16::try_from(status.width()).unwrap_or(u16::MAX);
    let [status_area, hints_area] = Layout::horizontal([Constraint::Length(status_width + 2), Constraint::Min(0)]).areas(rect);

    frame.render_widget(Paragraph::new(Line::from(status)).style(panel_style(theme)), status_area);
    frame.render_widget(
        Paragraph::new(Line::from(hints)).right_aligned().style(panel_style(theme)),
        hints_area,
    );
}
