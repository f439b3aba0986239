//! The collection manager: the single authoritative list of plant records
//! together with the entry form and the table selection.
//!
//! The table view is rendered from [`CollectionManager::rows`] on every frame,
//! so records and rows always correspond one to one.

use thiserror::Error;
use tracing::{info, warn};

use crate::form::PlantForm;
use crate::plant::PlantRecord;

/// Prefix of the status line.
pub const STATUS_PREFIX: &str = "Total tanaman: ";

/// Why a collection operation was refused. Refused operations never mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// Add attempted without a name or without a care level.
    #[error("Harap lengkapi semua data.")]
    IncompleteInput,
    /// Delete attempted with no row selected.
    #[error("Pilih baris yang ingin dihapus.")]
    NoSelection,
}

impl CollectionError {
    /// Title of the warning shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Self::IncompleteInput => "Input Error",
            Self::NoSelection => "Peringatan",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectionManager {
    records: Vec<PlantRecord>,
    form: PlantForm,
    selected: Option<usize>,
    status: String,
}

impl CollectionManager {
    pub fn new() -> Self {
        Self::with_form(PlantForm::default())
    }

    pub fn with_form(form: PlantForm) -> Self {
        let mut manager = Self {
            records: Vec::new(),
            form,
            selected: None,
            status: String::new(),
        };
        manager.update_status();
        manager
    }

    pub fn records(&self) -> &[PlantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display cells for every record, in collection order.
    pub fn rows(&self) -> impl Iterator<Item = [String; 5]> + '_ {
        self.records.iter().map(PlantRecord::cells)
    }

    pub fn form(&self) -> &PlantForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PlantForm {
        &mut self.form
    }

    /// Text currently shown in the status bar.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Validate the form and append it as a new record.
    ///
    /// On success the status is refreshed and the form cleared. On failure
    /// neither the records nor the form change.
    pub fn add_record(&mut self) -> Result<&PlantRecord, CollectionError> {
        let Some(record) = self.form.to_record() else {
            warn!(
                has_name = !self.form.name.is_empty(),
                has_care_level = self.form.care_level.is_some(),
                "Rejected incomplete plant entry"
            );
            return Err(CollectionError::IncompleteInput);
        };

        info!(name = %record.name, care_level = %record.care_level, "Added plant");
        self.records.push(record);
        self.update_status();
        self.reset_form();
        Ok(&self.records[self.records.len() - 1])
    }

    /// Clear the entry form. Records and selection are untouched.
    pub fn reset_form(&mut self) {
        self.form.clear();
    }

    /// Remove the selected record.
    ///
    /// The selection then moves to the row that took its place, or to the new
    /// last row, or is cleared when the collection becomes empty.
    pub fn delete_selected(&mut self) -> Result<PlantRecord, CollectionError> {
        let Some(index) = self.selected.filter(|index| *index < self.records.len()) else {
            warn!("Delete requested without a selected row");
            self.selected = None;
            return Err(CollectionError::NoSelection);
        };

        let removed = self.records.remove(index);
        self.selected = if self.records.is_empty() {
            None
        } else {
            Some(index.min(self.records.len() - 1))
        };
        info!(name = %removed.name, index, "Removed plant");
        self.update_status();
        Ok(removed)
    }

    /// Recompute the status line from the current record count.
    pub fn update_status(&mut self) {
        self.status = format!("{STATUS_PREFIX}{}", self.records.len());
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select a row. Indices past the end are refused and leave the
    /// selection unchanged; returns whether the selection was applied.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(index) if index >= self.records.len() => false,
            other => {
                self.selected = other;
                true
            }
        }
    }

    pub fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let last = self.records.len() - 1;
        self.selected = Some(self.selected.map_or(0, |index| (index + 1).min(last)));
    }

    pub fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |index| index.saturating_sub(1)));
    }

    pub fn select_first(&mut self) {
        self.select(Some(0));
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.records.len().checked_sub(1) {
            self.selected = Some(last);
        }
    }
}
