use herbarium_types::PlantForm;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;

use crate::ui::components::common::TextInputState;

/// Focusable controls of the entry form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Type,
    Care,
    Age,
    Health,
    Add,
    Reset,
    Delete,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        Self::Name,
        Self::Type,
        Self::Care,
        Self::Age,
        Self::Health,
        Self::Add,
        Self::Reset,
        Self::Delete,
    ];

    pub fn is_button(&self) -> bool {
        matches!(self, Self::Add | Self::Reset | Self::Delete)
    }
}

/// UI-side state of the entry form: the name editor's cursor and the focus
/// flags. Field values themselves live in the collection manager's form.
#[derive(Debug, Clone)]
pub struct FormState {
    pub name_input: TextInputState,

    container_focus: FocusFlag,
    pub f_name: FocusFlag,
    pub f_type: FocusFlag,
    pub f_care: FocusFlag,
    pub f_age: FocusFlag,
    pub f_health: FocusFlag,
    pub f_add: FocusFlag,
    pub f_reset: FocusFlag,
    pub f_delete: FocusFlag,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name_input: TextInputState::new(),
            container_focus: FocusFlag::new().with_name("form"),
            f_name: FocusFlag::new().with_name("form.name"),
            f_type: FocusFlag::new().with_name("form.type"),
            f_care: FocusFlag::new().with_name("form.care"),
            f_age: FocusFlag::new().with_name("form.age"),
            f_health: FocusFlag::new().with_name("form.health"),
            f_add: FocusFlag::new().with_name("form.add"),
            f_reset: FocusFlag::new().with_name("form.reset"),
            f_delete: FocusFlag::new().with_name("form.delete"),
        }
    }
}

impl FormState {
    /// Re-sync the name editor after the manager changed the form.
    pub fn load_from(&mut self, form: &PlantForm) {
        if self.name_input.input() != form.name {
            self.name_input = TextInputState::with_text(form.name.clone());
        }
    }

    pub fn flag(&self, field: FormField) -> &FocusFlag {
        match field {
            FormField::Name => &self.f_name,
            FormField::Type => &self.f_type,
            FormField::Care => &self.f_care,
            FormField::Age => &self.f_age,
            FormField::Health => &self.f_health,
            FormField::Add => &self.f_add,
            FormField::Reset => &self.f_reset,
            FormField::Delete => &self.f_delete,
        }
    }

    pub fn focused_field(&self) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| self.flag(*field).get())
    }
}

impl HasFocus for FormState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for field in FormField::ALL {
            builder.leaf_widget(self.flag(field));
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
