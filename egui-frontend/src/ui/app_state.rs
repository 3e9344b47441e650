//! # App State Module
//!
//! This module defines the central application state structure and initialization logic
//! for the college life planner.
//!
//! ## Key Types:
//! - `CollegeLifeApp` - Main application state struct
//!
//! ## State Management:
//! `CollegeLifeApp` holds everything in one place:
//! - the domain services (`backend`), each owning its own list
//! - the shell state (current view, dark mode)
//! - presentation-only state (open sections, dialogs, search text)
//!
//! Views borrow disjoint fields of this struct, so a screen can read a
//! service's view model while toggling its own sections in the same frame.

use log::info;
use shared::FontSize;

use crate::backend::Backend;
use crate::config::AppConfig;
use crate::ui::state::{ModalState, SectionVisibility, ShellState};

/// Main application struct for the egui college life planner
pub struct CollegeLifeApp {
    pub backend: Backend,
    pub config: AppConfig,

    /// Current view and dark mode
    pub shell: ShellState,

    /// Collapsible section state for every screen
    pub sections: SectionVisibility,

    /// Creation dialogs
    pub modals: ModalState,

    /// Text in the social screen's friend search box
    pub friend_search: String,

    /// Dark mode and font size last pushed to the egui context
    pub applied_theme: Option<(bool, FontSize)>,
}

impl CollegeLifeApp {
    /// Create a new CollegeLifeApp seeded from fixtures
    pub fn new(config: AppConfig) -> Self {
        info!("🚀 Initializing CollegeLifeApp");

        let backend = Backend::new(&config);

        Self {
            backend,
            config,
            shell: ShellState::new(),
            sections: SectionVisibility::new(),
            modals: ModalState::new(),
            friend_search: String::new(),
            applied_theme: None,
        }
    }
}
