pub mod schema;
pub mod store;
pub mod types;

pub use store::CatalogStore;
pub use types::{Catalog, CatalogMetadata, ModeUsage, ToolDraft, ToolPatch, ToolRecord};
