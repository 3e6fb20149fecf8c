//! Event types for the TUI event loop.

use crate::coordinator::FetchToken;
use crossterm::event::KeyEvent;
use takeout_api::{CommentEntry, NoteEntry, Page, VideoEntry};

/// One fetched page, typed by collection. Watch and search history share the
/// video shape.
#[derive(Debug, Clone)]
pub enum PageItems {
    Videos(Page<VideoEntry>),
    Comments(Page<CommentEntry>),
    Notes(Page<NoteEntry>),
}

impl PageItems {
    pub fn total_pages(&self) -> u32 {
        match self {
            PageItems::Videos(page) => page.total_pages,
            PageItems::Comments(page) => page.total_pages,
            PageItems::Notes(page) => page.total_pages,
        }
    }

    pub fn total_count(&self) -> u64 {
        match self {
            PageItems::Videos(page) => page.total_count,
            PageItems::Comments(page) => page.total_count,
            PageItems::Notes(page) => page.total_count,
        }
    }
}

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Resize { width: u16, height: u16 },
    Page {
        token: FetchToken,
        result: Result<PageItems, String>,
    },
}
