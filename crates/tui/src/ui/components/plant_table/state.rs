use rat_focus::FocusFlag;
use ratatui::widgets::TableState;

/// UI-side state of the plant table: focus and scroll offset. The selected
/// row itself is owned by the collection manager.
#[derive(Debug, Clone)]
pub struct PlantTableState {
    pub f_table: FocusFlag,
    pub table_state: TableState,
}

impl Default for PlantTableState {
    fn default() -> Self {
        Self {
            f_table: FocusFlag::new().with_name("table"),
            table_state: TableState::default(),
        }
    }
}
