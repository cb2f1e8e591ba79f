pub mod events;
pub mod matches;
pub mod patch;
pub mod raw;
pub mod views;
pub mod error;

pub use events::*;
pub use matches::*;
pub use patch::*;
pub use raw::*;
pub use views::*;
pub use error::*;
