//! # Backend Module
//!
//! Non-UI logic for the planner. Everything lives in memory and is rebuilt from
//! fixtures on every start; the `Backend` struct just bundles one instance of
//! each domain service so the UI can reach them through a single field.

pub mod domain;

use log::info;

use crate::config::AppConfig;
use crate::backend::domain::{
    DashboardService, ExpenseService, GoalService, RoutineService, SettingsService, SocialService,
};

/// All domain services, each exclusively owning its own state
#[derive(Debug, Clone)]
pub struct Backend {
    pub expense_service: ExpenseService,
    pub goal_service: GoalService,
    pub routine_service: RoutineService,
    pub social_service: SocialService,
    pub settings_service: SettingsService,
    pub dashboard_service: DashboardService,
}

impl Backend {
    pub fn new(config: &AppConfig) -> Self {
        info!("Setting up domain services (budget {:.2})", config.monthly_budget);
        Self {
            expense_service: ExpenseService::new(config.monthly_budget, &config.currency_symbol),
            goal_service: GoalService::new(),
            routine_service: RoutineService::new(),
            social_service: SocialService::new(),
            settings_service: SettingsService::new(),
            dashboard_service: DashboardService::new(&config.student_name),
        }
    }
}
