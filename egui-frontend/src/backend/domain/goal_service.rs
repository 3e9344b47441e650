//! Career goal domain logic.
//!
//! Goals are grouped on screen by category and status (eight partitions) and
//! carry a manually adjusted progress value.
//!
//! ## Business Rules
//!
//! - Title and deadline are required; new goals start at 0% and go first
//! - Toggling completion overrides progress: on sets 100, off resets to 0
//!   (a manually set 80% is not restored)
//! - Setting progress to 100 marks the goal completed, anything lower clears it
//! - Overall progress is the share of completed goals, 0 for an empty list

use log::{debug, info};

use crate::backend::domain::fixtures;
use crate::backend::domain::id_generator::{next_id, now_millis};
use crate::backend::domain::models::goal::{GoalValidationError, MAX_PROGRESS};
use crate::backend::domain::partition::{filter_by, partition_by};
use shared::{CreateGoalRequest, Goal, GoalCategory, GoalStatus};

/// Goals sharing one category and status
#[derive(Debug, Clone, PartialEq)]
pub struct GoalPartition<'a> {
    pub category: GoalCategory,
    pub status: GoalStatus,
    pub goals: Vec<&'a Goal>,
}

#[derive(Debug, Clone)]
pub struct GoalService {
    goals: Vec<Goal>,
}

impl Default for GoalService {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalService {
    /// Service seeded with the default goal fixtures
    pub fn new() -> Self {
        Self::with_goals(fixtures::goals())
    }

    pub fn with_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get_goal(&self, id: u64) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn add_goal(&mut self, request: CreateGoalRequest) -> Result<Goal, GoalValidationError> {
        self.add_goal_at(request, now_millis())
    }

    pub fn add_goal_at(&mut self, request: CreateGoalRequest, now_millis: u64) -> Result<Goal, GoalValidationError> {
        let title = request.title.trim();
        let deadline = request.deadline.trim();

        let rejection = if title.is_empty() {
            Some(GoalValidationError::EmptyTitle)
        } else if deadline.is_empty() {
            Some(GoalValidationError::EmptyDeadline)
        } else {
            None
        };
        if let Some(error) = rejection {
            debug!("Rejected goal {:?}: {}", request, error);
            return Err(error);
        }

        let goal = Goal {
            id: next_id(self.goals.iter().map(|g| g.id), now_millis),
            title: title.to_string(),
            description: request.description.trim().to_string(),
            deadline: deadline.to_string(),
            progress: 0,
            category: request.category,
            status: request.status,
            completed: false,
        };

        let mut updated = Vec::with_capacity(self.goals.len() + 1);
        updated.push(goal.clone());
        updated.extend(self.goals.iter().cloned());
        self.goals = updated;

        info!("🎯 Added goal {} '{}' ({})", goal.id, goal.title, goal.category);
        Ok(goal)
    }

    /// Flip completion; progress jumps to 100 or back to 0
    pub fn toggle_complete(&mut self, id: u64) {
        self.goals = self
            .goals
            .iter()
            .map(|goal| {
                if goal.id != id {
                    return goal.clone();
                }
                let completed = !goal.completed;
                info!("✅ Goal {} completed: {}", id, completed);
                Goal {
                    completed,
                    progress: if completed { MAX_PROGRESS } else { 0 },
                    ..goal.clone()
                }
            })
            .collect();
    }

    /// Set progress (clamped to 0-100); completed iff progress reaches 100.
    ///
    /// The UI disables the slider on completed goals, but the call is still
    /// honoured here.
    pub fn update_progress(&mut self, id: u64, value: u8) {
        let progress = value.min(MAX_PROGRESS);
        self.goals = self
            .goals
            .iter()
            .map(|goal| {
                if goal.id != id {
                    return goal.clone();
                }
                debug!("Goal {} progress {} -> {}", id, goal.progress, progress);
                Goal {
                    progress,
                    completed: progress == MAX_PROGRESS,
                    ..goal.clone()
                }
            })
            .collect();
    }

    /// Goals matching both category and status exactly
    pub fn goals_by(&self, category: GoalCategory, status: GoalStatus) -> Vec<&Goal> {
        filter_by(&self.goals, |g| g.category == category && g.status == status)
    }

    /// Goals matching whichever filters are given
    pub fn goals_filtered(&self, category: Option<GoalCategory>, status: Option<GoalStatus>) -> Vec<&Goal> {
        filter_by(&self.goals, |g| {
            category.map_or(true, |c| g.category == c) && status.map_or(true, |s| g.status == s)
        })
    }

    /// All eight category × status partitions, category first
    pub fn partitions(&self) -> Vec<GoalPartition<'_>> {
        partition_by(&self.goals, |g| g.category, &GoalCategory::ALL)
            .into_iter()
            .flat_map(|(category, in_category)| {
                partition_by(&in_category, |g| g.status, &GoalStatus::ALL)
                    .into_iter()
                    .map(move |(status, goals)| GoalPartition {
                        category,
                        status,
                        goals: goals.into_iter().copied().collect(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn total_count(&self) -> usize {
        self.goals.len()
    }

    pub fn completed_count(&self) -> usize {
        self.goals.iter().filter(|g| g.completed).count()
    }

    /// Percentage of completed goals
    pub fn overall_progress(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        self.completed_count() as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> GoalService {
        GoalService::new()
    }

    fn request(title: &str, deadline: &str) -> CreateGoalRequest {
        CreateGoalRequest {
            title: title.to_string(),
            description: "Research team".to_string(),
            deadline: deadline.to_string(),
            category: GoalCategory::Networking,
            status: GoalStatus::Pending,
        }
    }

    #[test]
    fn test_default_overall_progress() {
        let service = create_test_service();

        assert_eq!(service.total_count(), 8);
        assert_eq!(service.completed_count(), 2);
        assert_eq!(service.overall_progress(), 25.0);

        let completed: Vec<_> = service.goals().iter().filter(|g| g.completed).map(|g| g.title.as_str()).collect();
        assert_eq!(completed, vec!["Google Interview - Round 1", "Attend Career Fair"]);
    }

    #[test]
    fn test_overall_progress_empty() {
        let service = GoalService::with_goals(Vec::new());
        assert_eq!(service.overall_progress(), 0.0);
    }

    #[test]
    fn test_add_goal() {
        let mut service = create_test_service();
        let goal = service.add_goal_at(request("Meet alumni", "2025-12-05"), 10_000).expect("Failed to add goal");

        assert_eq!(service.total_count(), 9);
        assert_eq!(service.goals()[0], goal);
        assert_eq!(goal.progress, 0);
        assert!(!goal.completed);
        assert_eq!(goal.status, GoalStatus::Pending);
    }

    #[test]
    fn test_add_goal_rejects_missing_fields() {
        let mut service = create_test_service();
        let before = service.goals().to_vec();

        assert_eq!(service.add_goal_at(request("", "2025-12-05"), 1), Err(GoalValidationError::EmptyTitle));
        assert_eq!(service.add_goal_at(request("Meet alumni", "  "), 1), Err(GoalValidationError::EmptyDeadline));
        assert_eq!(service.goals(), before.as_slice());
    }

    #[test]
    fn test_toggle_complete_is_not_a_progress_round_trip() {
        let mut service = create_test_service();
        // "Junior Developer Position at StartupXYZ" starts at 80%
        assert_eq!(service.get_goal(3).unwrap().progress, 80);

        service.toggle_complete(3);
        let goal = service.get_goal(3).unwrap();
        assert!(goal.completed);
        assert_eq!(goal.progress, 100);

        service.toggle_complete(3);
        let goal = service.get_goal(3).unwrap();
        assert!(!goal.completed);
        assert_eq!(goal.progress, 0);
    }

    #[test]
    fn test_toggle_complete_unknown_id_is_noop() {
        let mut service = create_test_service();
        let before = service.goals().to_vec();
        service.toggle_complete(999);
        assert_eq!(service.goals(), before.as_slice());
    }

    #[test]
    fn test_update_progress() {
        let mut service = create_test_service();

        service.update_progress(1, 100);
        assert!(service.get_goal(1).unwrap().completed);

        service.update_progress(1, 99);
        let goal = service.get_goal(1).unwrap();
        assert!(!goal.completed);
        assert_eq!(goal.progress, 99);

        service.update_progress(1, 250);
        assert_eq!(service.get_goal(1).unwrap().progress, 100);
        assert!(service.get_goal(1).unwrap().completed);
    }

    #[test]
    fn test_update_progress_unknown_id_is_noop() {
        let mut service = create_test_service();
        let before = service.goals().to_vec();
        service.update_progress(999, 50);
        assert_eq!(service.goals(), before.as_slice());
    }

    #[test]
    fn test_add_goal_ids_unique_within_same_millisecond() {
        let mut service = create_test_service();
        let first = service.add_goal_at(request("Meet alumni", "2025-12-05"), 10_000).unwrap();
        let second = service.add_goal_at(request("Meet alumni", "2025-12-05"), 10_000).unwrap();

        assert_ne!(first.id, second.id);
        let mut ids: Vec<_> = service.goals().iter().map(|g| g.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), service.total_count());
    }

    #[test]
    fn test_update_progress_on_completed_goal_still_applies() {
        let mut service = create_test_service();
        service.update_progress(5, 40);

        let goal = service.get_goal(5).unwrap();
        assert_eq!(goal.progress, 40);
        assert!(!goal.completed);
    }

    #[test]
    fn test_partitions() {
        let service = create_test_service();
        let partitions = service.partitions();

        assert_eq!(partitions.len(), 8);
        assert_eq!(partitions[0].category, GoalCategory::Internships);
        assert_eq!(partitions[0].status, GoalStatus::Current);
        assert_eq!(partitions[1].status, GoalStatus::Pending);

        let networking_current = partitions
            .iter()
            .find(|p| p.category == GoalCategory::Networking && p.status == GoalStatus::Current)
            .unwrap();
        assert_eq!(networking_current.goals.len(), 2);

        let networking_pending = service.goals_by(GoalCategory::Networking, GoalStatus::Pending);
        assert!(networking_pending.is_empty());

        let total: usize = partitions.iter().map(|p| p.goals.len()).sum();
        assert_eq!(total, service.total_count());
    }

    #[test]
    fn test_goals_filtered() {
        let service = create_test_service();

        assert_eq!(service.goals_filtered(None, None).len(), 8);
        assert_eq!(service.goals_filtered(Some(GoalCategory::Interviews), None).len(), 2);
        assert_eq!(service.goals_filtered(None, Some(GoalStatus::Pending)).len(), 3);
        assert_eq!(
            service.goals_filtered(Some(GoalCategory::Internships), Some(GoalStatus::Current))[0].id,
            1
        );
    }
}
