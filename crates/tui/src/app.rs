//! Application state and message handling for the Herbarium TUI.
//!
//! `App` owns the collection manager and the UI-side state of every
//! component. Records are only added or removed through [`App::update`].

use std::sync::Arc;

use herbarium_types::{CollectionError, CollectionManager, PlantForm};
use herbarium_util::UserPreferences;
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::ui::components::form::FormState;
use crate::ui::components::plant_table::PlantTableState;
use crate::ui::theme::{self, LoadedTheme, Theme, ThemeDefinition, catalog};

/// Options the binary passes to the TUI.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Theme id requested on the command line; falls back to the saved preference.
    pub theme: Option<String>,
    /// Upper bound of the age spinner, in months.
    pub age_limit_months: u32,
    pub preferences: Arc<UserPreferences>,
}

/// Messages that drive [`App::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    AddPlant,
    ResetForm,
    DeleteSelected,
    SelectRow(usize),
    CycleTheme,
    Resize(u16, u16),
}

/// Side effects requested by components and by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendMsg(Msg),
    ShowWarning(Warning),
    CloseModal,
    Quit,
}

/// A blocking notice shown in the warning dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: String,
    pub message: String,
}

impl From<CollectionError> for Warning {
    fn from(error: CollectionError) -> Self {
        Self {
            title: error.title().to_string(),
            message: error.to_string(),
        }
    }
}

/// Cross-cutting context: theme and preferences.
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    pub active_theme: &'static ThemeDefinition,
    pub preferences: Arc<UserPreferences>,
}

impl SharedCtx {
    fn new(requested_theme: Option<&str>, preferences: Arc<UserPreferences>) -> Self {
        let saved_theme = preferences.preferred_theme();
        let LoadedTheme { definition, theme } = theme::load(requested_theme.or(saved_theme.as_deref()));
        debug!(theme = definition.id, "Loaded theme");
        Self {
            theme,
            active_theme: definition,
            preferences,
        }
    }

    /// Switch to the next truecolor palette and remember it.
    fn cycle_theme(&mut self) {
        if !theme::supports_theme_cycling() {
            debug!("Theme cycling unavailable on this terminal");
            return;
        }
        let next = catalog::next_truecolor(self.active_theme.id);
        self.theme = next.build();
        self.active_theme = next;
        info!(theme = next.id, "Switched theme");
        if let Err(error) = self.preferences.set_preferred_theme(Some(next.id.to_string())) {
            warn!(%error, "Failed to save theme preference");
        }
    }
}

pub struct App {
    pub ctx: SharedCtx,
    pub collection: CollectionManager,
    pub form: FormState,
    pub table: PlantTableState,
    /// Warning currently displayed, if any.
    pub warning: Option<Warning>,
    pub focus: Focus,
    container_focus: FocusFlag,
}

impl App {
    pub fn new(options: &TuiOptions) -> Self {
        let mut app = Self {
            ctx: SharedCtx::new(options.theme.as_deref(), Arc::clone(&options.preferences)),
            collection: CollectionManager::with_form(PlantForm::with_age_limit(options.age_limit_months)),
            form: FormState::default(),
            table: PlantTableState::default(),
            warning: None,
            focus: Focus::default(),
            container_focus: FocusFlag::new().with_name("app"),
        };
        app.focus = FocusBuilder::build_for(&app);
        app.focus.focus(&app.form.f_name);
        app
    }

    /// Apply a message and return any follow-up effects.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::AddPlant => match self.collection.add_record() {
                Ok(_) => {
                    self.form.load_from(self.collection.form());
                    self.focus.focus(&self.form.f_name);
                    Vec::new()
                }
                Err(error) => vec![Effect::ShowWarning(error.into())],
            },
            Msg::ResetForm => {
                self.collection.reset_form();
                self.form.load_from(self.collection.form());
                Vec::new()
            }
            Msg::DeleteSelected => match self.collection.delete_selected() {
                Ok(_) => Vec::new(),
                Err(error) => vec![Effect::ShowWarning(error.into())],
            },
            Msg::SelectRow(index) => {
                self.collection.select(Some(*index));
                Vec::new()
            }
            Msg::CycleTheme => {
                self.ctx.cycle_theme();
                Vec::new()
            }
            Msg::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                Vec::new()
            }
        }
    }

    /// Push the name editor's text into the manager's form.
    pub fn sync_name_from_input(&mut self) {
        self.collection.form_mut().name = self.form.name_input.input().to_string();
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        self.form.build(builder);
        builder.leaf_widget(&self.table.f_table);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use herbarium_types::{CareLevel, DEFAULT_AGE_LIMIT_MONTHS};

    pub(crate) fn test_app() -> App {
        App::new(&TuiOptions {
            theme: None,
            age_limit_months: DEFAULT_AGE_LIMIT_MONTHS,
            preferences: Arc::new(UserPreferences::ephemeral()),
        })
    }

    #[test]
    fn starts_with_name_focused_and_zero_status() {
        let app = test_app();
        assert!(app.form.f_name.get());
        assert_eq!(app.collection.status(), "Total tanaman: 0");
        assert!(app.warning.is_none());
    }

    #[test]
    fn incomplete_add_requests_input_warning() {
        let mut app = test_app();
        let effects = app.update(&Msg::AddPlant);
        assert_eq!(
            effects,
            vec![Effect::ShowWarning(Warning {
                title: "Input Error".into(),
                message: "Harap lengkapi semua data.".into(),
            })]
        );
        assert!(app.collection.is_empty());
    }

    #[test]
    fn successful_add_clears_name_editor() {
        let mut app = test_app();
        app.form.name_input = crate::ui::components::common::TextInputState::with_text("Melati");
        app.sync_name_from_input();
        app.collection.form_mut().care_level = Some(CareLevel::Mudah);

        assert!(app.update(&Msg::AddPlant).is_empty());
        assert_eq!(app.collection.len(), 1);
        assert_eq!(app.form.name_input.input(), "");
        assert_eq!(app.collection.status(), "Total tanaman: 1");
    }

    #[test]
    fn delete_without_selection_requests_warning() {
        let mut app = test_app();
        let effects = app.update(&Msg::DeleteSelected);
        let [Effect::ShowWarning(warning)] = effects.as_slice() else {
            panic!("expected a single warning, got {effects:?}");
        };
        assert_eq!(warning.title, "Peringatan");
        assert_eq!(warning.message, "Pilih baris yang ingin dihapus.");
    }

    #[test]
    fn reset_clears_form_but_keeps_records() {
        let mut app = test_app();
        app.collection.form_mut().name = "Sirih".into();
        app.collection.form_mut().care_level = Some(CareLevel::Sedang);
        app.update(&Msg::AddPlant);

        app.form.name_input = crate::ui::components::common::TextInputState::with_text("Kunyit");
        app.sync_name_from_input();
        app.collection.form_mut().care_level = Some(CareLevel::Sulit);
        app.update(&Msg::ResetForm);

        assert!(app.collection.form().is_blank());
        assert_eq!(app.form.name_input.input(), "");
        assert_eq!(app.collection.len(), 1);
    }
}
