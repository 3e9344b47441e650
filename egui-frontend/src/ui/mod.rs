//! # UI Module
//!
//! The application shell and every egui view. Other modules can import what
//! they need with `use crate::ui::*`.

pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::*;
pub use components::*;
