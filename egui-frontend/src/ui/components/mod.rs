//! # UI Components Module
//!
//! This module organizes all UI components for the college life planner.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `styling` - Global theme (dark mode, font size)
//! - `theme` - Color constants and category mappings
//! - `ui_components` - Reusable drawing helpers (cards, badges, section headers)
//! - `tab_manager` - Bottom tab bar and content routing
//! - `actions` - Submit handlers behind the creation dialogs
//! - `modals` - Creation dialogs
//! - `*_view` - One module per screen
//!
//! ## Architecture:
//! Views read view models from the domain services and collect the actions a
//! user clicked; the actions are applied once the frame's borrows end.

pub mod actions;
pub mod budget_view;
pub mod career_view;
pub mod dashboard_view;
pub mod modals;
pub mod routines_view;
pub mod settings_view;
pub mod social_view;
pub mod styling;
pub mod tab_manager;
pub mod theme;
pub mod ui_components;

pub use styling::apply_theme;
pub use theme::*;
