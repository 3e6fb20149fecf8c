//! Wire types shared between the Takeout Lens client and the export service.
//!
//! The service exposes one paginated list endpoint per collection; the types
//! here describe the item payloads, the query parameters, and the response
//! envelope. Everything is plain data, with no behavior beyond the accessors
//! that the client's local filtering needs.

pub mod comment;
pub mod error;
pub mod note;
pub mod pagination;
pub mod video;

pub use comment::CommentEntry;
pub use error::ApiErrorBody;
pub use note::{ChecklistItem, NoteEntry};
pub use pagination::{Page, PageBody, PageInfo, PageQuery, Paginated, SortMode, WireSort};
pub use video::VideoEntry;
