use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::app::{App, Effect};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers::{ButtonTone, build_hint_spans, render_button, warning_block};

const BUTTON_WIDTH: u16 = 10;

/// Blocking warning dialog with a single OK button.
#[derive(Default, Debug, Clone)]
pub struct WarningModal {
    button_area: Rect,
}

impl Component for WarningModal {
    fn handle_key_events(&mut self, _app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => vec![Effect::CloseModal],
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, _app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let MouseEvent { kind, column, row, .. } = mouse;
        if kind == MouseEventKind::Down(MouseButton::Left) && self.button_area.contains(Position::new(column, row)) {
            return vec![Effect::CloseModal];
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let Some(warning) = app.warning.as_ref() else {
            return;
        };
        let theme = &*app.ctx.theme;
        let block = warning_block(theme, Some(warning.title.as_str()));
        let inner = block.inner(rect);

        frame.render_widget(Clear, rect);
        frame.render_widget(&block, rect);

        let [message_area, _, button_row] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1), Constraint::Length(3)]).areas(inner);

        let lines = warning
            .message
            .lines()
            .map(|line| Line::from(Span::from(line.to_string())))
            .collect::<Vec<Line>>();
        frame.render_widget(
            Paragraph::new(lines).block(Block::default()).wrap(Wrap { trim: false }),
            message_area,
        );

        let [_, button_area, _] = Layout::horizontal([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH), Constraint::Min(0)])
            .areas(button_row);
        render_button(frame, button_area, "OK", ButtonTone::Neutral, true, theme);
        self.button_area = button_area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        build_hint_spans(&*app.ctx.theme, &[("Enter/Esc", " close")])
    }
}
