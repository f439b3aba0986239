//! Shared domain types for Herbarium: plant records, the entry form draft and
//! the collection manager that keeps them together.

pub mod collection;
pub mod form;
pub mod plant;

pub use collection::{CollectionError, CollectionManager, STATUS_PREFIX};
pub use form::{DEFAULT_AGE_LIMIT_MONTHS, PlantForm};
pub use plant::{COLUMN_HEADERS, CareLevel, Choice, HealthStatus, ParseChoiceError, PlantRecord, PlantType};
