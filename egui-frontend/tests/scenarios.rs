//! End-to-end scenarios driven through the `Backend` facade and the app shell,
//! the same entry points the egui views use.

use college_life_egui::backend::domain::RoutineService;
use college_life_egui::backend::Backend;
use college_life_egui::config::AppConfig;
use college_life_egui::ui::state::ShellState;
use college_life_egui::ui::CollegeLifeApp;
use shared::{
    CreateExpenseRequest, CreateGoalRequest, CreateRoutineRequest, DayLabel, ExpenseCategory, GoalCategory,
    GoalStatus, NotificationSetting, RoutineCategory, ViewType,
};

fn titles(day: DayLabel, routines: &RoutineService) -> Vec<String> {
    routines.routines_for_day(day).iter().map(|r| r.title.clone()).collect()
}

fn create_test_backend() -> Backend {
    Backend::new(&AppConfig::default())
}

#[test]
fn test_default_budget_and_dashboard_agree() {
    let backend = create_test_backend();

    let status = backend.expense_service.budget_status();
    assert_eq!(status.budget, 800.0);
    assert_eq!(status.spent, 180.0);
    assert_eq!(status.remaining, 620.0);

    let summary = backend.dashboard_service.budget_summary(&backend.expense_service);
    assert_eq!(summary.status, status);
    assert!(summary.on_track);
}

#[test]
fn test_category_totals_cover_every_expense() {
    let mut backend = create_test_backend();
    backend
        .expense_service
        .add_expense(CreateExpenseRequest {
            item: "Concert ticket".to_string(),
            amount: "$1,020.00".to_string(),
            category: Some(ExpenseCategory::Entertainment),
        })
        .unwrap();

    let totals: f64 = backend.expense_service.category_totals().iter().map(|t| t.amount).sum();
    assert_eq!(totals, backend.expense_service.total_spent());
    assert_eq!(totals, 1200.0);
    assert!(backend.expense_service.budget_status().is_over_budget());
}

#[test]
fn test_missing_fields_leave_lists_unchanged() {
    let mut backend = create_test_backend();

    assert!(backend.expense_service.add_expense(CreateExpenseRequest::default()).is_err());
    assert!(backend.goal_service.add_goal(CreateGoalRequest::default()).is_err());
    assert!(backend.routine_service.add_routine(CreateRoutineRequest::default()).is_err());

    assert_eq!(backend.expense_service.expenses().len(), 6);
    assert_eq!(backend.goal_service.total_count(), 8);
    assert_eq!(backend.routine_service.routines().len(), 5);
}

#[test]
fn test_career_progress_flow() {
    let mut backend = create_test_backend();
    let goals = &mut backend.goal_service;

    assert_eq!(goals.total_count(), 8);
    assert_eq!(goals.completed_count(), 2);
    assert_eq!(goals.overall_progress(), 25.0);

    let goal = goals
        .add_goal(CreateGoalRequest {
            title: "Mock interview".to_string(),
            description: String::new(),
            deadline: "2025-12-05".to_string(),
            category: GoalCategory::Interviews,
            status: GoalStatus::Pending,
        })
        .unwrap();
    assert_eq!(goals.goals()[0].id, goal.id);
    assert_eq!(goals.goals_by(GoalCategory::Interviews, GoalStatus::Pending).len(), 2);

    goals.update_progress(goal.id, 100);
    assert!(goals.get_goal(goal.id).unwrap().completed);
    assert_eq!(goals.completed_count(), 3);

    // un-completing resets progress rather than restoring it
    goals.toggle_complete(goal.id);
    let goal = goals.get_goal(goal.id).unwrap();
    assert!(!goal.completed);
    assert_eq!(goal.progress, 0);
}

#[test]
fn test_weekly_schedule_membership() {
    let mut backend = create_test_backend();
    let routines = &mut backend.routine_service;

    assert!(titles(DayLabel::Wed, routines).contains(&"Computer Science 101".to_string()));
    assert!(titles(DayLabel::Sun, routines).is_empty());

    let added = routines
        .add_routine(CreateRoutineRequest {
            title: "Laundry".to_string(),
            time: "10:00 AM".to_string(),
            days: vec![DayLabel::Sun, DayLabel::Sun],
            category: RoutineCategory::Study,
        })
        .unwrap();
    assert_eq!(titles(DayLabel::Sun, routines), vec!["Laundry".to_string()]);

    routines.delete_routine(added.id);
    routines.delete_routine(added.id);
    assert_eq!(routines.routines().len(), 5);
    assert!(titles(DayLabel::Sun, routines).is_empty());
}

#[test]
fn test_favorite_and_rsvp_event() {
    let mut backend = create_test_backend();
    let social = &mut backend.social_service;

    social.toggle_favorite(2);
    social.toggle_rsvp(2);

    let partitions = social.event_partitions();
    let favorite_ids: Vec<u64> = partitions.favorites.iter().map(|e| e.id).collect();
    assert_eq!(favorite_ids, vec![1, 2, 3]);
    // event 2 starts out RSVP'd
    assert!(partitions.today.iter().any(|e| e.id == 2 && !e.rsvped));
}

#[test]
fn test_settings_drive_shell_dark_mode() {
    let backend = create_test_backend();
    let mut shell = ShellState::new();

    backend.settings_service.toggle_dark_mode(&mut shell);
    assert!(shell.dark_mode);

    backend.settings_service.set_dark_mode(&mut shell, false);
    assert!(!shell.dark_mode);
}

#[test]
fn test_notification_toggles_are_independent() {
    let mut backend = create_test_backend();
    let settings = &mut backend.settings_service;

    settings.toggle(NotificationSetting::WellnessReminders);

    assert!(settings.is_enabled(NotificationSetting::WellnessReminders));
    assert!(settings.is_enabled(NotificationSetting::AssignmentReminders));
    assert!(settings.is_enabled(NotificationSetting::EventNotifications));
    assert!(settings.is_enabled(NotificationSetting::BudgetAlerts));
}

#[test]
fn test_app_starts_on_dashboard() {
    let mut app = CollegeLifeApp::new(AppConfig::default());
    assert_eq!(app.shell.current_view, ViewType::Dashboard);
    assert!(app.modals.active_modal.is_none());

    for view in ViewType::ALL {
        app.shell.select_view(view);
        assert_eq!(app.shell.current_view, view);
    }
}

#[test]
fn test_configured_budget_flows_into_services() {
    let config = AppConfig {
        monthly_budget: 150.0,
        student_name: "Sam".to_string(),
        ..AppConfig::default()
    };
    let backend = Backend::new(&config);

    let summary = backend.dashboard_service.budget_summary(&backend.expense_service);
    assert_eq!(summary.status.remaining, -30.0);
    assert!(!summary.on_track);
    assert!(backend.dashboard_service.greeting_at(20).starts_with("Good Evening, Sam!"));
}
