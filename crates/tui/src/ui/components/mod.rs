pub mod common;
pub mod component;
pub mod form;
pub mod plant_table;
pub mod status_bar;
pub mod warning_modal;

pub(crate) use component::Component;
pub use form::FormComponent;
pub use plant_table::PlantTableComponent;
pub use warning_modal::WarningModal;
