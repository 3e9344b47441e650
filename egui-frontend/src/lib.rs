//! College life planner built on egui.
//!
//! - `backend` holds the in-memory domain services (expenses, goals, routines,
//!   social hub, settings, dashboard) seeded from fixtures.
//! - `ui` holds the application shell and the egui views that render the
//!   services' view models and forward user actions to them.
//! - `config` resolves the start-up configuration.

pub mod backend;
pub mod config;
pub mod ui;
