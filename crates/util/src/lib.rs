pub mod logging;
pub mod path_processing;
pub mod preferences;

pub use logging::*;
pub use path_processing::*;
pub use preferences::*;
