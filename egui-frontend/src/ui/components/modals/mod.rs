//! # Modals Module
//!
//! Creation dialogs for the budget, career and routines screens.
//!
//! ## Module Organization:
//! - `expense_creation` - Add Expense dialog
//! - `goal_creation` - Add Goal dialog
//! - `routine_creation` - Add Routine dialog
//! - `shared` - Common modal frame, field helpers and the modal coordinator
//!
//! ## Architecture:
//! Each dialog edits its form in `ModalState` directly and reports a
//! `ModalOutcome`; the coordinator turns a submit into the matching add action.

pub mod expense_creation;
pub mod goal_creation;
pub mod routine_creation;
pub mod shared;
