pub mod analytics;
pub mod enrichment;
pub mod loader;
pub mod query;
pub mod reference;
pub mod repository;
pub mod standings;

pub use enrichment::*;
pub use loader::*;
pub use reference::*;
pub use repository::*;
pub use standings::*;
