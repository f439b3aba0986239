mod warning_modal_component;

pub use warning_modal_component::WarningModal;
