//! Weekly routine domain logic.
//!
//! Routines repeat on a set of weekdays; the schedule screen shows one
//! partition per day, so a Mon/Wed/Fri routine is listed three times.

use chrono::{Datelike, Local};
use log::{debug, info};

use crate::backend::domain::fixtures;
use crate::backend::domain::id_generator::{next_id, now_millis};
use crate::backend::domain::models::routine::RoutineValidationError;
use crate::backend::domain::partition::filter_by;
use shared::{CreateRoutineRequest, DayLabel, Routine};

#[derive(Debug, Clone)]
pub struct RoutineService {
    routines: Vec<Routine>,
}

impl Default for RoutineService {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutineService {
    pub fn new() -> Self {
        Self::with_routines(fixtures::routines())
    }

    pub fn with_routines(routines: Vec<Routine>) -> Self {
        Self { routines }
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn add_routine(&mut self, request: CreateRoutineRequest) -> Result<Routine, RoutineValidationError> {
        self.add_routine_at(request, now_millis())
    }

    /// Append a routine; duplicate day labels collapse to one
    pub fn add_routine_at(
        &mut self,
        request: CreateRoutineRequest,
        now_millis: u64,
    ) -> Result<Routine, RoutineValidationError> {
        let title = request.title.trim();
        let time = request.time.trim();

        let rejection = if title.is_empty() {
            Some(RoutineValidationError::EmptyTitle)
        } else if time.is_empty() {
            Some(RoutineValidationError::EmptyTime)
        } else if request.days.is_empty() {
            Some(RoutineValidationError::NoDays)
        } else {
            None
        };
        if let Some(error) = rejection {
            debug!("Rejected routine {:?}: {}", request, error);
            return Err(error);
        }

        let mut days: Vec<DayLabel> = Vec::with_capacity(request.days.len());
        for day in &request.days {
            if !days.contains(day) {
                days.push(*day);
            }
        }

        let routine = Routine {
            id: next_id(self.routines.iter().map(|r| r.id), now_millis),
            title: title.to_string(),
            time: time.to_string(),
            days,
            category: request.category,
        };

        let mut updated = self.routines.clone();
        updated.push(routine.clone());
        self.routines = updated;

        info!("📅 Added routine {} '{}' on {:?}", routine.id, routine.title, routine.days);
        Ok(routine)
    }

    /// Remove the routine with `id`; unknown ids are ignored
    pub fn delete_routine(&mut self, id: u64) {
        let before = self.routines.len();
        self.routines = self.routines.iter().filter(|r| r.id != id).cloned().collect();
        if self.routines.len() < before {
            info!("🗑️ Deleted routine {}", id);
        }
    }

    pub fn routines_for_day(&self, day: DayLabel) -> Vec<&Routine> {
        filter_by(&self.routines, |r| r.occurs_on(day))
    }

    /// One entry per weekday, Monday first
    pub fn week(&self) -> Vec<(DayLabel, Vec<&Routine>)> {
        DayLabel::ALL
            .iter()
            .map(|day| (*day, self.routines_for_day(*day)))
            .collect()
    }

    /// Today's label from the local clock; only used to highlight a day
    pub fn today_label() -> DayLabel {
        DayLabel::from(Local::now().weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RoutineCategory;

    fn request(title: &str, time: &str, days: &[DayLabel]) -> CreateRoutineRequest {
        CreateRoutineRequest {
            title: title.to_string(),
            time: time.to_string(),
            days: days.to_vec(),
            category: RoutineCategory::Study,
        }
    }

    #[test]
    fn test_routines_for_day() {
        let service = RoutineService::new();
        let cs101 = &service.routines()[0];
        assert_eq!(cs101.days, vec![DayLabel::Mon, DayLabel::Wed, DayLabel::Fri]);

        assert!(service.routines_for_day(DayLabel::Wed).contains(&cs101));
        assert!(!service.routines_for_day(DayLabel::Sun).contains(&cs101));
        assert_eq!(service.routines_for_day(DayLabel::Wed).len(), 3);
        assert!(service.routines_for_day(DayLabel::Sat).is_empty());
    }

    #[test]
    fn test_week_counts_multi_day_routines_per_day() {
        let service = RoutineService::new();
        let week = service.week();

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].0, DayLabel::Mon);
        let appearances: usize = week.iter().map(|(_, routines)| routines.len()).sum();
        let expected: usize = service.routines().iter().map(|r| r.days.len()).sum();
        assert_eq!(appearances, expected);
    }

    #[test]
    fn test_add_routine_appends() {
        let mut service = RoutineService::new();
        let routine = service
            .add_routine_at(request("Reading", "8:00 PM", &[DayLabel::Sun, DayLabel::Sun, DayLabel::Sat]), 7_000)
            .expect("Failed to add routine");

        assert_eq!(service.routines().len(), 6);
        assert_eq!(service.routines().last(), Some(&routine));
        assert_eq!(routine.days, vec![DayLabel::Sun, DayLabel::Sat]);
        assert_eq!(service.routines_for_day(DayLabel::Sun).len(), 1);
    }

    #[test]
    fn test_add_routine_ids_unique_within_same_millisecond() {
        let mut service = RoutineService::new();
        let first = service.add_routine_at(request("Reading", "8:00 PM", &[DayLabel::Sun]), 7_000).unwrap();
        let second = service.add_routine_at(request("Reading", "8:00 PM", &[DayLabel::Sun]), 7_000).unwrap();

        assert_ne!(first.id, second.id);
        let mut ids: Vec<_> = service.routines().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), service.routines().len());
    }

    #[test]
    fn test_add_routine_rejects_missing_fields() {
        let mut service = RoutineService::new();
        let before = service.routines().to_vec();

        assert_eq!(service.add_routine_at(request("", "8:00 PM", &[DayLabel::Mon]), 1), Err(RoutineValidationError::EmptyTitle));
        assert_eq!(service.add_routine_at(request("Reading", "", &[DayLabel::Mon]), 1), Err(RoutineValidationError::EmptyTime));
        assert_eq!(service.add_routine_at(request("Reading", "8:00 PM", &[]), 1), Err(RoutineValidationError::NoDays));
        assert_eq!(service.routines(), before.as_slice());
    }

    #[test]
    fn test_delete_routine_is_idempotent() {
        let mut service = RoutineService::new();

        service.delete_routine(2);
        let once = service.routines().to_vec();
        assert_eq!(once.len(), 4);
        assert!(once.iter().all(|r| r.id != 2));

        service.delete_routine(2);
        assert_eq!(service.routines(), once.as_slice());
    }

    #[test]
    fn test_delete_unknown_routine_is_noop() {
        let mut service = RoutineService::new();
        service.delete_routine(12345);
        assert_eq!(service.routines().len(), 5);
    }

    #[test]
    fn test_today_label_is_a_weekday() {
        assert!(DayLabel::ALL.contains(&RoutineService::today_label()));
    }
}
