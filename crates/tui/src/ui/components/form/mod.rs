mod form_component;
mod state;

pub use form_component::FormComponent;
pub use state::FormState;
