//! Interactive terminal portfolio.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Section, Action, Target, Transition)
//! - `update`: Pure transitions (App, Action) → Transition
//! - `layout`: Pure geometry and hit testing
//! - `view`: Pure rendering into ratatui frames
//! - `theme`: Dark/light palettes
//! - `timer`: Dismiss timer and role ticker threads
//! - `run`: Effects (terminal, event loop, link opening)

pub mod layout;
pub mod run;
pub mod state;
pub mod theme;
pub mod timer;
pub mod update;
pub mod view;

pub use run::{RunOptions, run};
