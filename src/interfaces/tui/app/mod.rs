//! TUI application state

mod state;

pub use state::{App, CurrentScreen};
