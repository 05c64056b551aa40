//! System-level modules
//!
//! Platform glue shared by the interfaces:
//! - Logging initialization
//! - Clipboard access

pub mod clipboard;
pub mod logging;
