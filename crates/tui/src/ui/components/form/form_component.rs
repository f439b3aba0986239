use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use herbarium_types::{COLUMN_HEADERS, CareLevel, Choice};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::FormField;
use crate::app::{App, Effect, Msg};
use crate::ui::components::Component;
use crate::ui::theme::Theme;
use crate::ui::theme::theme_helpers::{self as th, ButtonTone};

const CARE_OPTION_GAP: u16 = 2;

/// The entry form: five inputs and the add/reset/delete buttons.
#[derive(Debug, Default)]
pub struct FormComponent {
    field_areas: Vec<(FormField, Rect)>,
    care_option_areas: Vec<(CareLevel, Rect)>,
}

impl FormComponent {
    fn handle_name_key(app: &mut App, key: KeyEvent) {
        let input = &mut app.form.name_input;
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => input.insert_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => return,
        }
        app.sync_name_from_input();
    }

    fn handle_care_key(app: &mut App, key: KeyEvent) {
        let form = app.collection.form_mut();
        form.care_level = match (key.code, form.care_level) {
            (KeyCode::Left | KeyCode::Up, None) => Some(CareLevel::Sulit),
            (KeyCode::Left | KeyCode::Up, Some(level)) => Some(level.previous()),
            (KeyCode::Right | KeyCode::Down | KeyCode::Char(' '), None) => Some(CareLevel::Mudah),
            (KeyCode::Right | KeyCode::Down | KeyCode::Char(' '), Some(level)) => Some(level.next()),
            (KeyCode::Char(c @ '1'..='3'), _) => CareLevel::ALL.get(c as usize - '1' as usize).copied(),
            (_, current) => current,
        };
    }

    fn handle_age_key(app: &mut App, key: KeyEvent) {
        let form = app.collection.form_mut();
        match key.code {
            KeyCode::Up | KeyCode::Right | KeyCode::Char('+') => form.increment_age(),
            KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => form.decrement_age(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0);
                let typed = type_age_digit(form.age_months(), digit, form.age_limit());
                form.set_age_months(typed);
            }
            KeyCode::Backspace => form.set_age_months(form.age_months() / 10),
            KeyCode::Home => form.set_age_months(0),
            KeyCode::End => form.set_age_months(form.age_limit()),
            _ => {}
        }
    }

    fn handle_selector_key<C: Choice>(current: &mut C, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up => *current = current.previous(),
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => *current = current.next(),
            KeyCode::Home => *current = C::ALL[0],
            KeyCode::End => *current = C::ALL[C::ALL.len() - 1],
            _ => {}
        }
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, title: &str, focused: bool, content: Line<'_>, theme: &dyn Theme) -> Rect {
        let block = th::block(theme, Some(title), focused);
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(content).block(block), area);
        inner
    }

    fn render_care_options(&mut self, inner: Rect, app: &App, frame: &mut Frame) {
        let theme = &*app.ctx.theme;
        let selected = app.collection.form().care_level;
        let mut spans = Vec::with_capacity(CareLevel::ALL.len() * 2);
        let mut x = inner.x;
        self.care_option_areas.clear();
        for level in CareLevel::ALL {
            let is_selected = selected == Some(*level);
            let text = format!("({}) {}", if is_selected { "•" } else { " " }, level.label());
            let width = text.chars().count() as u16;
            let style = if is_selected {
                theme.accent_emphasis_style()
            } else {
                theme.text_primary_style()
            };
            self.care_option_areas.push((*level, Rect::new(x, inner.y, width, 1).intersection(inner)));
            x = x.saturating_add(width + CARE_OPTION_GAP);
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" ".repeat(CARE_OPTION_GAP as usize)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }
}

impl Component for FormComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let Some(field) = app.form.focused_field() else {
            return Vec::new();
        };

        if key.code == KeyCode::Enter || (field.is_button() && key.code == KeyCode::Char(' ')) {
            let msg = match field {
                FormField::Reset => Msg::ResetForm,
                FormField::Delete => Msg::DeleteSelected,
                _ => Msg::AddPlant,
            };
            return vec![Effect::SendMsg(msg)];
        }

        match field {
            FormField::Name => Self::handle_name_key(app, key),
            FormField::Type => Self::handle_selector_key(&mut app.collection.form_mut().plant_type, key),
            FormField::Care => Self::handle_care_key(app, key),
            FormField::Age => Self::handle_age_key(app, key),
            FormField::Health => Self::handle_selector_key(&mut app.collection.form_mut().health, key),
            FormField::Add | FormField::Reset | FormField::Delete => {}
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);
        let Some(field) = self.field_areas.iter().find(|(_, area)| area.contains(position)).map(|(field, _)| *field) else {
            return Vec::new();
        };
        app.focus.focus(app.form.flag(field));

        match field {
            FormField::Add => vec![Effect::SendMsg(Msg::AddPlant)],
            FormField::Reset => vec![Effect::SendMsg(Msg::ResetForm)],
            FormField::Delete => vec![Effect::SendMsg(Msg::DeleteSelected)],
            FormField::Care => {
                if let Some((level, _)) = self.care_option_areas.iter().find(|(_, area)| area.contains(position)) {
                    app.collection.form_mut().care_level = Some(*level);
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let form_focused = app.form.focused_field().is_some();
        let outer = th::block(&*app.ctx.theme, Some("Tanaman Baru"), form_focused);
        let inner = outer.inner(rect);
        frame.render_widget(outer, rect);

        let [name_area, type_area, care_area, age_area, health_area, _, buttons_area, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(inner);
        let [add_area, reset_area, delete_area] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(buttons_area);

        self.field_areas = vec![
            (FormField::Name, name_area),
            (FormField::Type, type_area),
            (FormField::Care, care_area),
            (FormField::Age, age_area),
            (FormField::Health, health_area),
            (FormField::Add, add_area),
            (FormField::Reset, reset_area),
            (FormField::Delete, delete_area),
        ];

        let theme = &*app.ctx.theme;
        let form = app.collection.form();
        let focused = |field: FormField| app.form.flag(field).get();
        let [name_title, type_title, care_title, age_title, health_title] = COLUMN_HEADERS;

        let name_inner = self.render_field(
            frame,
            name_area,
            name_title,
            focused(FormField::Name),
            Line::from(app.form.name_input.input().to_string()),
            theme,
        );
        if focused(FormField::Name) && app.warning.is_none() {
            let column = app.form.name_input.cursor_column().min(name_inner.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(name_inner.x + column, name_inner.y));
        }

        self.render_field(
            frame,
            type_area,
            type_title,
            focused(FormField::Type),
            selector_line(form.plant_type.label(), theme),
            theme,
        );
        let care_inner = self.render_field(frame, care_area, care_title, focused(FormField::Care), Line::default(), theme);
        self.render_field(
            frame,
            age_area,
            age_title,
            focused(FormField::Age),
            Line::from(vec![
                Span::styled(format!("‹ {} ›", form.age_months()), theme.text_primary_style()),
                Span::styled(format!("  0–{}", form.age_limit()), theme.text_muted_style()),
            ]),
            theme,
        );
        self.render_field(
            frame,
            health_area,
            health_title,
            focused(FormField::Health),
            selector_line(form.health.label(), theme),
            theme,
        );

        th::render_button(frame, add_area, "Tambah", ButtonTone::Positive, focused(FormField::Add), theme);
        th::render_button(frame, reset_area, "Reset", ButtonTone::Caution, focused(FormField::Reset), theme);
        th::render_button(frame, delete_area, "Hapus", ButtonTone::Destructive, focused(FormField::Delete), theme);

        self.render_care_options(care_inner, app, frame);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        match app.form.focused_field() {
            Some(FormField::Name) => th::build_hint_spans(theme, &[("Enter", " add  "), ("Ctrl+R", " reset  ")]),
            Some(FormField::Type | FormField::Health) => th::build_hint_spans(theme, &[("←/→", " choose  "), ("Enter", " add  ")]),
            Some(FormField::Care) => th::build_hint_spans(theme, &[("←/→ 1-3", " choose  "), ("Enter", " add  ")]),
            Some(FormField::Age) => th::build_hint_spans(theme, &[("↑/↓ 0-9", " set  "), ("Enter", " add  ")]),
            Some(_) => th::build_hint_spans(theme, &[("Enter", " press  ")]),
            None => Vec::new(),
        }
    }
}

fn selector_line<'a>(label: &'a str, theme: &dyn Theme) -> Line<'a> {
    if label.is_empty() {
        Line::from(Span::styled("‹ – ›", theme.text_muted_style()))
    } else {
        Line::from(Span::styled(format!("‹ {label} ›"), theme.text_primary_style().add_modifier(Modifier::BOLD)))
    }
}

/// Append a typed digit to the spinner value. When the result would exceed
/// the limit the digit starts a new number instead.
pub(crate) fn type_age_digit(current: u32, digit: u32, limit: u32) -> u32 {
    match current.checked_mul(10).and_then(|value| value.checked_add(digit)) {
        Some(candidate) if candidate <= limit => candidate,
        _ => digit.min(limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crossterm::event::KeyEventKind;
    use herbarium_types::{HealthStatus, PlantType};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    fn press(component: &mut FormComponent, app: &mut App, codes: &[KeyCode]) -> Vec<Effect> {
        codes.iter().flat_map(|code| component.handle_key_events(app, key(*code))).collect()
    }

    #[test]
    fn typed_digits_respect_limit() {
        assert_eq!(type_age_digit(0, 7, 99), 7);
        assert_eq!(type_age_digit(7, 2, 99), 72);
        assert_eq!(type_age_digit(72, 5, 99), 5);
        assert_eq!(type_age_digit(3, 9, 12), 9);
        assert_eq!(type_age_digit(0, 9, 5), 5);
    }

    #[test]
    fn typing_a_name_updates_the_form() {
        let mut app = test_app();
        let mut form = FormComponent::default();
        press(&mut form, &mut app, &[KeyCode::Char('M'), KeyCode::Char('a'), KeyCode::Char('x'), KeyCode::Backspace]);
        assert_eq!(app.collection.form().name, "Ma");
    }

    #[test]
    fn care_choice_is_exclusive_and_cycles() {
        let mut app = test_app();
        let mut form = FormComponent::default();
        app.focus.focus(&app.form.f_care);

        press(&mut form, &mut app, &[KeyCode::Right]);
        assert_eq!(app.collection.form().care_level, Some(CareLevel::Mudah));
        press(&mut form, &mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.collection.form().care_level, Some(CareLevel::Sulit));
        press(&mut form, &mut app, &[KeyCode::Right]);
        assert_eq!(app.collection.form().care_level, Some(CareLevel::Mudah));
    }

    #[test]
    fn selectors_cycle_through_options() {
        let mut app = test_app();
        let mut form = FormComponent::default();

        app.focus.focus(&app.form.f_type);
        press(&mut form, &mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.collection.form().plant_type, PlantType::Obat);

        app.focus.focus(&app.form.f_health);
        press(&mut form, &mut app, &[KeyCode::Left]);
        assert_eq!(app.collection.form().health, HealthStatus::LayakTanam);
    }

    #[test]
    fn age_spinner_accepts_arrows_and_digits() {
        let mut app = test_app();
        let mut form = FormComponent::default();
        app.focus.focus(&app.form.f_age);

        press(&mut form, &mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Down]);
        assert_eq!(app.collection.form().age_months(), 1);
        press(&mut form, &mut app, &[KeyCode::Char('2')]);
        assert_eq!(app.collection.form().age_months(), 12);
        press(&mut form, &mut app, &[KeyCode::Backspace]);
        assert_eq!(app.collection.form().age_months(), 1);
    }

    #[test]
    fn buttons_emit_their_messages() {
        let mut app = test_app();
        let mut form = FormComponent::default();

        app.focus.focus(&app.form.f_reset);
        assert_eq!(press(&mut form, &mut app, &[KeyCode::Enter]), vec![Effect::SendMsg(Msg::ResetForm)]);

        app.focus.focus(&app.form.f_delete);
        assert_eq!(press(&mut form, &mut app, &[KeyCode::Char(' ')]), vec![Effect::SendMsg(Msg::DeleteSelected)]);

        app.focus.focus(&app.form.f_name);
        assert_eq!(press(&mut form, &mut app, &[KeyCode::Enter]), vec![Effect::SendMsg(Msg::AddPlant)]);
    }
}
