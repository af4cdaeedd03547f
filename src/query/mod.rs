pub mod criteria;
pub mod engine;
pub mod fuzzy;

pub use criteria::{SearchCriteria, SortKey, TagMode};
pub use engine::search;
