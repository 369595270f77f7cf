//! folio: Terminal portfolio with an interactive skills carousel.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod logging;
pub mod profile;
pub mod report;
pub mod tui;
pub mod types;
