use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::{Frame, style::Style};

use super::components::status_bar::render_status_bar;
use super::components::{Component, FormComponent, PlantTableComponent, WarningModal};
use super::theme::theme_helpers as th;
use super::utils::centered_rect_with_min;
use crate::app::{App, Effect, Msg};

/// Width of the form column in the side-by-side layout.
const FORM_WIDTH: u16 = 46;
/// Height of the form when stacked above the table on narrow terminals.
const FORM_HEIGHT: u16 = 23;
/// Below this width the form and table are stacked vertically.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

/// Root view: lays out the form, the table, the status bar and, when a
/// warning is pending, the warning dialog on top.
#[derive(Debug, Default)]
pub struct MainView {
    pub form_view: FormComponent,
    pub table_view: PlantTableComponent,
    pub warning_view: WarningModal,

    form_area: Rect,
    table_area: Rect,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a message to the app and collect its follow-up effects.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg)
    }

    /// Apply dialog effects. Returns the effects this view does not own.
    pub fn handle_navigation_effect(&mut self, app: &mut App, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::ShowWarning(warning) => {
                tracing::debug!(title = %warning.title, "Showing warning");
                app.warning = Some(warning);
                None
            }
            Effect::CloseModal => {
                app.warning = None;
                None
            }
            other => Some(other),
        }
    }

    fn handle_global_keys(app: &mut App, key: KeyEvent) -> Option<Vec<Effect>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let effect = match key.code {
                KeyCode::Char('q') => Effect::Quit,
                KeyCode::Char('s') => Effect::SendMsg(Msg::AddPlant),
                KeyCode::Char('r') => Effect::SendMsg(Msg::ResetForm),
                KeyCode::Char('d') => Effect::SendMsg(Msg::DeleteSelected),
                KeyCode::Char('t') => Effect::SendMsg(Msg::CycleTheme),
                _ => return None,
            };
            return Some(vec![effect]);
        }
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
                Some(Vec::new())
            }
            KeyCode::BackTab => {
                app.focus.prev();
                Some(Vec::new())
            }
            _ => None,
        }
    }

    fn hints(&self, app: &App) -> Vec<Span<'static>> {
        let theme = &*app.ctx.theme;
        let local = if app.warning.is_some() {
            self.warning_view.get_hint_spans(app)
        } else if app.table.f_table.get() {
            self.table_view.get_hint_spans(app)
        } else {
            self.form_view.get_hint_spans(app)
        };
        let mut spans: Vec<Span<'static>> = local.into_iter().map(|span| Span::styled(span.content.into_owned(), span.style)).collect();
        if app.warning.is_none() {
            spans.extend(th::build_hint_spans(
                theme,
                &[("Tab", " focus  "), ("Ctrl+S/R/D", " add/reset/delete  "), ("Ctrl+T", " theme  "), ("Ctrl+Q", " quit ")],
            ));
        }
        spans
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.warning.is_some() {
            return self.warning_view.handle_key_events(app, key);
        }
        if let Some(effects) = Self::handle_global_keys(app, key) {
            return effects;
        }
        if app.table.f_table.get() {
            self.table_view.handle_key_events(app, key)
        } else {
            self.form_view.handle_key_events(app, key)
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.warning.is_some() {
            return self.warning_view.handle_mouse_events(app, mouse);
        }
        let position = Position::new(mouse.column, mouse.row);
        if self.form_area.contains(position) {
            self.form_view.handle_mouse_events(app, mouse)
        } else if self.table_area.contains(position) {
            self.table_view.handle_mouse_events(app, mouse)
        } else {
            Vec::new()
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        frame.render_widget(Block::default().style(Style::default().bg(app.ctx.theme.roles().background)), rect);

        let [body, status_area] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(rect);
        let [form_area, table_area] = if body.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Layout::horizontal([Constraint::Length(FORM_WIDTH), Constraint::Min(0)]).areas(body)
        } else {
            Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)]).areas(body)
        };
        self.form_area = form_area;
        self.table_area = table_area;

        self.form_view.render(frame, form_area, app);
        self.table_view.render(frame, table_area, app);

        let hints = self.hints(app);
        render_status_bar(frame, status_area, app, hints);

        if app.warning.is_some() {
            frame.render_widget(Block::default().style(app.ctx.theme.modal_background_style()), body);
            let dialog_area = centered_rect_with_min(40, 25, 44, 8, rect);
            self.warning_view.render(frame, dialog_area, app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crossterm::event::KeyEventKind;
    use herbarium_types::CareLevel;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, KeyEventKind::Press)
    }

    fn drain(view: &mut MainView, app: &mut App, mut effects: Vec<Effect>) -> Vec<Effect> {
        let mut leftover = Vec::new();
        while !effects.is_empty() {
            for effect in std::mem::take(&mut effects) {
                match view.handle_navigation_effect(app, effect) {
                    Some(Effect::SendMsg(msg)) => effects.extend(view.handle_message(app, msg)),
                    Some(other) => leftover.push(other),
                    None => {}
                }
            }
        }
        leftover
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn warning_blocks_input_until_dismissed() {
        let mut app = test_app();
        let mut view = MainView::new();

        let effects = view.handle_key_events(&mut app, key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        drain(&mut view, &mut app, effects);
        assert_eq!(app.warning.as_ref().map(|w| w.title.as_str()), Some("Input Error"));

        let effects = view.handle_key_events(&mut app, key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(effects.is_empty());
        assert_eq!(app.collection.form().name, "");

        let effects = view.handle_key_events(&mut app, key(KeyCode::Enter, KeyModifiers::NONE));
        drain(&mut view, &mut app, effects);
        assert!(app.warning.is_none());
    }

    #[test]
    fn ctrl_q_requests_quit() {
        let mut app = test_app();
        let mut view = MainView::new();
        let effects = view.handle_key_events(&mut app, key(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(drain(&mut view, &mut app, effects), vec![Effect::Quit]);
    }

    #[test]
    fn tab_moves_focus_to_next_control() {
        let mut app = test_app();
        let mut view = MainView::new();
        view.handle_key_events(&mut app, key(KeyCode::Tab, KeyModifiers::NONE));
        assert!(app.form.f_type.get());
        assert!(!app.form.f_name.get());
    }

    #[test]
    fn melati_scenario_through_the_ui() {
        let mut app = test_app();
        let mut view = MainView::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

        for c in "Melati".chars() {
            let effects = view.handle_key_events(&mut app, key(KeyCode::Char(c), KeyModifiers::NONE));
            drain(&mut view, &mut app, effects);
        }
        app.collection.form_mut().care_level = Some(CareLevel::Mudah);
        let effects = view.handle_key_events(&mut app, key(KeyCode::Enter, KeyModifiers::NONE));
        drain(&mut view, &mut app, effects);

        terminal.draw(|frame| view.render(frame, frame.area(), &mut app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Total tanaman: 1"));
        assert!(text.contains("Melati"));

        app.focus.focus(&app.table.f_table);
        let effects = view.handle_key_events(&mut app, key(KeyCode::Down, KeyModifiers::NONE));
        drain(&mut view, &mut app, effects);
        let effects = view.handle_key_events(&mut app, key(KeyCode::Delete, KeyModifiers::NONE));
        drain(&mut view, &mut app, effects);

        terminal.draw(|frame| view.render(frame, frame.area(), &mut app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Total tanaman: 0"));
        assert!(app.collection.is_empty());
    }
}
