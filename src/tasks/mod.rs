//! Task model.
//!
//! Tasks are owned by the caller; everything in `core` and `features` only
//! reads them.

mod draft;
pub mod types;

pub use draft::{TaskDraft, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
pub use types::{Priority, Task};
