//! Plant records and the enumerated choices offered by the entry form.
//!
//! Every choice type keeps its options in the order the form selectors show
//! them, and renders to the exact Indonesian labels used in the table.

use std::fmt;
use std::str::FromStr;

/// Table column headers, in display order.
pub const COLUMN_HEADERS: [&str; 5] = ["Nama", "Jenis", "Perawatan", "Usia (bulan)", "Kesehatan"];

/// A closed set of options with stable display labels.
///
/// Selectors cycle through `ALL` in order and wrap at both ends.
pub trait Choice: Copy + PartialEq + Sized + 'static {
    /// All options in selector order.
    const ALL: &'static [Self];

    /// Display label shown in selectors and table cells.
    fn label(&self) -> &'static str;

    fn position(&self) -> usize {
        Self::ALL.iter().position(|option| option == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    fn previous(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    /// Parse an exact label back into an option.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.label() == label)
    }
}

/// Error returned when a label does not name any option of a choice set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{label}'")]
pub struct ParseChoiceError {
    kind: &'static str,
    label: String,
}

/// Kind of plant. `Unspecified` is the blank first entry of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlantType {
    #[default]
    Unspecified,
    /// Ornamental
    Hias,
    /// Medicinal
    Obat,
    /// Vegetable
    Sayur,
    /// Fruit
    Buah,
    /// Anything else
    Lainnya,
}

impl Choice for PlantType {
    const ALL: &'static [Self] = &[Self::Unspecified, Self::Hias, Self::Obat, Self::Sayur, Self::Buah, Self::Lainnya];

    fn label(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Hias => "Hias",
            Self::Obat => "Obat",
            Self::Sayur => "Sayur",
            Self::Buah => "Buah",
            Self::Lainnya => "Lainnya",
        }
    }
}

/// How demanding a plant is to look after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CareLevel {
    /// Easy
    Mudah,
    /// Moderate
    Sedang,
    /// Hard
    Sulit,
}

impl Choice for CareLevel {
    const ALL: &'static [Self] = &[Self::Mudah, Self::Sedang, Self::Sulit];

    fn label(&self) -> &'static str {
        match self {
            Self::Mudah => "Mudah",
            Self::Sedang => "Sedang",
            Self::Sulit => "Sulit",
        }
    }
}

/// Health of a plant. `Unspecified` is the blank first entry of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HealthStatus {
    #[default]
    Unspecified,
    /// Healthy
    Sehat,
    /// Sick
    Sakit,
    /// Ready to plant out
    LayakTanam,
}

impl Choice for HealthStatus {
    const ALL: &'static [Self] = &[Self::Unspecified, Self::Sehat, Self::Sakit, Self::LayakTanam];

    fn label(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Sehat => "Sehat",
            Self::Sakit => "Sakit",
            Self::LayakTanam => "Layak Tanam",
        }
    }
}

macro_rules! impl_label_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ParseChoiceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as Choice>::from_label(s).ok_or_else(|| ParseChoiceError {
                    kind: $kind,
                    label: s.to_string(),
                })
            }
        }
    };
}

impl_label_traits!(PlantType, "plant type");
impl_label_traits!(CareLevel, "care level");
impl_label_traits!(HealthStatus, "health status");

/// A single entry of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantRecord {
    pub name: String,
    pub plant_type: PlantType,
    pub care_level: CareLevel,
    pub age_months: u32,
    pub health: HealthStatus,
}

impl PlantRecord {
    /// Display cells in [`COLUMN_HEADERS`] order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.plant_type.to_string(),
            self.care_level.to_string(),
            self.age_months.to_string(),
            self.health.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_start_blank_and_wrap() {
        assert_eq!(PlantType::default().label(), "");
        assert_eq!(PlantType::Lainnya.next(), PlantType::Unspecified);
        assert_eq!(PlantType::Unspecified.previous(), PlantType::Lainnya);
        assert_eq!(HealthStatus::Sakit.next(), HealthStatus::LayakTanam);
        assert_eq!(CareLevel::Mudah.previous(), CareLevel::Sulit);
    }

    #[test]
    fn labels_parse_back() {
        assert_eq!("Layak Tanam".parse::<HealthStatus>(), Ok(HealthStatus::LayakTanam));
        assert_eq!("".parse::<PlantType>(), Ok(PlantType::Unspecified));
        assert_eq!("Sedang".parse::<CareLevel>(), Ok(CareLevel::Sedang));

        let error = "Kaktus".parse::<PlantType>().unwrap_err();
        assert_eq!(error.to_string(), "unknown plant type 'Kaktus'");
        assert!("".parse::<CareLevel>().is_err());
    }

    #[test]
    fn cells_follow_header_order() {
        let record = PlantRecord {
            name: "Melati".into(),
            plant_type: PlantType::Hias,
            care_level: CareLevel::Mudah,
            age_months: 3,
            health: HealthStatus::Sehat,
        };
        assert_eq!(record.cells(), ["Melati", "Hias", "Mudah", "3", "Sehat"]);
    }
}
