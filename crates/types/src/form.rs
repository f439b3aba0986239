//! Draft values held by the entry form before they become a record.

use crate::plant::{CareLevel, HealthStatus, PlantRecord, PlantType};

/// Upper bound of the age spinner when none is configured.
pub const DEFAULT_AGE_LIMIT_MONTHS: u32 = 99;

/// Current contents of the entry form.
///
/// The care level is `None` until the user picks one; clearing the form puts
/// it back to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantForm {
    pub name: String,
    pub plant_type: PlantType,
    pub care_level: Option<CareLevel>,
    age_months: u32,
    pub health: HealthStatus,
    age_limit: u32,
}

impl Default for PlantForm {
    fn default() -> Self {
        Self::with_age_limit(DEFAULT_AGE_LIMIT_MONTHS)
    }
}

impl PlantForm {
    pub fn with_age_limit(age_limit: u32) -> Self {
        Self {
            name: String::new(),
            plant_type: PlantType::Unspecified,
            care_level: None,
            age_months: 0,
            health: HealthStatus::Unspecified,
            age_limit,
        }
    }

    pub fn age_months(&self) -> u32 {
        self.age_months
    }

    pub fn age_limit(&self) -> u32 {
        self.age_limit
    }

    /// Set the age, clamped to the spinner bounds.
    pub fn set_age_months(&mut self, months: u32) {
        self.age_months = months.min(self.age_limit);
    }

    pub fn increment_age(&mut self) {
        self.set_age_months(self.age_months.saturating_add(1));
    }

    pub fn decrement_age(&mut self) {
        self.set_age_months(self.age_months.saturating_sub(1));
    }

    /// Restore every field to its blank default. The age limit is kept.
    pub fn clear(&mut self) {
        *self = Self::with_age_limit(self.age_limit);
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::with_age_limit(self.age_limit)
    }

    /// Build a record if both required fields are present.
    pub fn to_record(&self) -> Option<PlantRecord> {
        if self.name.is_empty() {
            return None;
        }
        let care_level = self.care_level?;
        Some(PlantRecord {
            name: self.name.clone(),
            plant_type: self.plant_type,
            care_level,
            age_months: self.age_months,
            health: self.health,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_is_clamped_to_limit() {
        let mut form = PlantForm::with_age_limit(12);
        form.set_age_months(40);
        assert_eq!(form.age_months(), 12);
        form.increment_age();
        assert_eq!(form.age_months(), 12);

        form.set_age_months(0);
        form.decrement_age();
        assert_eq!(form.age_months(), 0);
    }

    #[test]
    fn clear_keeps_age_limit() {
        let mut form = PlantForm::with_age_limit(24);
        form.name = "Lidah buaya".into();
        form.plant_type = PlantType::Obat;
        form.care_level = Some(CareLevel::Sulit);
        form.set_age_months(7);
        form.health = HealthStatus::Sakit;

        form.clear();
        assert!(form.is_blank());
        assert_eq!(form.age_limit(), 24);
        assert_eq!(form.care_level, None);
    }

    #[test]
    fn record_requires_name_and_care_level() {
        let mut form = PlantForm::default();
        form.care_level = Some(CareLevel::Mudah);
        assert!(form.to_record().is_none());

        form.name = " Cabai ".into();
        form.care_level = None;
        assert!(form.to_record().is_none());

        form.care_level = Some(CareLevel::Sedang);
        let record = form.to_record().expect("complete form");
        assert_eq!(record.name, " Cabai ");
        assert_eq!(record.care_level, CareLevel::Sedang);
    }

    #[test]
    fn whitespace_counts_as_a_name() {
        let mut form = PlantForm::default();
        form.name = "   ".into();
        form.care_level = Some(CareLevel::Mudah);
        assert_eq!(form.to_record().map(|record| record.name), Some("   ".to_string()));
    }
}
