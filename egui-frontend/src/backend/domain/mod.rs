//! # Domain Module
//!
//! Business logic for the college life planner. Each feature screen has one
//! service that owns its list, derives the view model the screen renders, and
//! exposes the named actions the screen may trigger.
//!
//! ## Module Organization
//!
//! - **expense_service**: expenses, category totals, budget status
//! - **goal_service**: career goals, completion and progress, category × status partitions
//! - **routine_service**: weekly routines and per-day membership
//! - **social_service**: events (RSVP, favorites), groups, friends, clubs
//! - **settings_service**: notification switches, font size, dark-mode access
//! - **dashboard_service**: greeting, day-at-a-glance fixtures, live budget card
//! - **partition** / **id_generator**: list views and record ids shared by all services
//! - **fixtures**: seed data
//! - **models**: validation errors for the create actions
//!
//! ## Business Rules
//!
//! - Create actions validate required fields and return an error without
//!   touching the list when input is missing
//! - Toggle, update and delete actions never fail; unknown ids are ignored
//! - Every mutation installs a complete new list

pub mod dashboard_service;
pub mod expense_service;
pub mod fixtures;
pub mod goal_service;
pub mod id_generator;
pub mod models;
pub mod partition;
pub mod routine_service;
pub mod settings_service;
pub mod social_service;

pub use dashboard_service::*;
pub use expense_service::*;
pub use goal_service::*;
pub use routine_service::*;
pub use settings_service::*;
pub use social_service::*;
