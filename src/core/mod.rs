pub mod input;
pub mod menu;
pub mod messages;
pub mod notebook;
pub mod shell;

pub use crate::domain::model::Record;
pub use crate::domain::ports::RecordStore;
pub use crate::utils::error::Result;
