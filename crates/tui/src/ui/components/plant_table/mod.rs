mod plant_table_component;
mod state;

pub use plant_table_component::PlantTableComponent;
pub use state::PlantTableState;
