use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use herbarium_types::COLUMN_HEADERS;
use ratatui::Frame;
use ratatui::layout::{Constraint, Position, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::app::{App, Effect, Msg};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

const HEADER_HEIGHT: u16 = 1;

/// Read-only table of every record in the collection.
#[derive(Debug, Default)]
pub struct PlantTableComponent {
    /// Area of the data rows (below the header) from the last render.
    rows_area: Rect,
}

impl Component for PlantTableComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up => app.collection.select_previous(),
            KeyCode::Down => app.collection.select_next(),
            KeyCode::Home => app.collection.select_first(),
            KeyCode::End => app.collection.select_last(),
            KeyCode::Esc => {
                app.collection.select(None);
            }
            KeyCode::Delete | KeyCode::Backspace => return vec![Effect::SendMsg(Msg::DeleteSelected)],
            _ => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                app.focus.focus(&app.table.f_table);
                let position = Position::new(mouse.column, mouse.row);
                let offset = app.table.table_state.offset();
                match row_at_position(self.rows_area, position, offset, app.collection.len()) {
                    Some(index) => vec![Effect::SendMsg(Msg::SelectRow(index))],
                    None => Vec::new(),
                }
            }
            MouseEventKind::ScrollDown => {
                app.collection.select_next();
                Vec::new()
            }
            MouseEventKind::ScrollUp => {
                app.collection.select_previous();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.table.f_table.get();
        let block = th::block(theme, Some("Koleksi Tanaman"), focused);
        let inner = block.inner(rect);
        self.rows_area = Rect {
            y: inner.y.saturating_add(HEADER_HEIGHT),
            height: inner.height.saturating_sub(HEADER_HEIGHT),
            ..inner
        };

        if app.collection.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled("Belum ada tanaman.", theme.text_muted_style()))
                    .centered()
                    .block(block),
                rect,
            );
            app.table.table_state.select(None);
            return;
        }

        let header = Row::new(COLUMN_HEADERS.iter().map(|title| Cell::from(*title))).style(th::table_header_style(theme));
        let rows: Vec<Row> = app
            .collection
            .rows()
            .enumerate()
            .map(|(index, cells)| Row::new(cells).style(th::table_row_style(theme, index)))
            .collect();

        let table = Table::new(rows, [Constraint::Ratio(1, 5); 5])
            .header(header)
            .block(block)
            .row_highlight_style(th::table_selected_style(theme))
            .highlight_symbol("▶ ");

        app.table.table_state.select(app.collection.selected());
        frame.render_stateful_widget(table, rect, &mut app.table.table_state);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[("↑/↓", " select  "), ("Del", " delete  "), ("Esc", " clear  ")])
    }
}

/// Map a click inside the rows area to a record index.
pub(crate) fn row_at_position(area: Rect, position: Position, offset: usize, len: usize) -> Option<usize> {
    if !area.contains(position) {
        return None;
    }
    let index = offset + usize::from(position.y - area.y);
    (index < len).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crossterm::event::{KeyEventKind, KeyModifiers};
    use herbarium_types::CareLevel;

    fn seed(app: &mut App, names: &[&str]) {
        for name in names {
            let form = app.collection.form_mut();
            form.name = name.to_string();
            form.care_level = Some(CareLevel::Mudah);
            app.update(&Msg::AddPlant);
        }
    }

    #[test]
    fn click_outside_rows_is_ignored() {
        let area = Rect::new(0, 2, 40, 5);
        assert_eq!(row_at_position(area, Position::new(50, 3), 0, 10), None);
        assert_eq!(row_at_position(area, Position::new(1, 1), 0, 10), None);
    }

    #[test]
    fn click_accounts_for_scroll_offset() {
        let area = Rect::new(0, 2, 40, 5);
        assert_eq!(row_at_position(area, Position::new(1, 4), 3, 10), Some(5));
    }

    #[test]
    fn click_past_last_record_selects_nothing() {
        let area = Rect::new(0, 2, 40, 5);
        assert_eq!(row_at_position(area, Position::new(1, 5), 0, 2), None);
    }

    #[test]
    fn arrows_move_selection_and_delete_key_requests_removal() {
        let mut app = test_app();
        seed(&mut app, &["Anggrek", "Kaktus"]);
        let mut table = PlantTableComponent::default();
        let key = |code| KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press);

        table.handle_key_events(&mut app, key(KeyCode::Down));
        table.handle_key_events(&mut app, key(KeyCode::Down));
        assert_eq!(app.collection.selected(), Some(1));

        let effects = table.handle_key_events(&mut app, key(KeyCode::Delete));
        assert_eq!(effects, vec![Effect::SendMsg(Msg::DeleteSelected)]);
        assert_eq!(app.collection.len(), 2);

        app.update(&Msg::DeleteSelected);
        assert_eq!(app.collection.len(), 1);
        assert_eq!(app.collection.selected(), Some(0));

        table.handle_key_events(&mut app, key(KeyCode::Esc));
        assert_eq!(app.collection.selected(), None);
    }
}
