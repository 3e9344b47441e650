//! # State Module
//!
//! UI-side state, split by concern:
//! - `app_state` - shell state (current view, dark mode)
//! - `ui_state` - collapsible section visibility
//! - `modal_state` - creation dialogs and their form input

pub mod app_state;
pub mod modal_state;
pub mod ui_state;

pub use app_state::*;
pub use modal_state::*;
pub use ui_state::*;
