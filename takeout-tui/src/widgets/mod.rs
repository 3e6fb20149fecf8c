//! Reusable widget components.

pub mod pager;
pub mod search;
pub mod tabs;

pub use pager::Pager;
pub use search::SearchBar;
pub use tabs::TabBar;
