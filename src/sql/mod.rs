//! Safe SQL builder: identifiers from the catalog only, values as parameters.

mod builder;
pub mod merge;
pub mod params;
pub use builder::*;
pub use merge::{plan as merge_plan, MergePlan, NO_FIELDS_MESSAGE};
pub use params::*;
