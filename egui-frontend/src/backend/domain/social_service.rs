//! Social hub domain logic.
//!
//! Only events are mutable (RSVP and favorite flags). Groups, friends and clubs
//! are fixed lists shown as-is.

use log::info;

use crate::backend::domain::fixtures;
use crate::backend::domain::partition::{filter_by, partition_by};
use shared::{Club, Event, EventTiming, Friend, FriendStatus, Group};

/// Event views for the social screen. They overlap: a favorite event also
/// shows up under its timing.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPartitions<'a> {
    pub today: Vec<&'a Event>,
    pub upcoming: Vec<&'a Event>,
    pub favorites: Vec<&'a Event>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FriendPartitions<'a> {
    pub active: Vec<&'a Friend>,
    pub pending: Vec<&'a Friend>,
}

#[derive(Debug, Clone)]
pub struct SocialService {
    events: Vec<Event>,
    groups: Vec<Group>,
    friends: Vec<Friend>,
    clubs: Vec<Club>,
}

impl Default for SocialService {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialService {
    pub fn new() -> Self {
        Self {
            events: fixtures::events(),
            groups: fixtures::groups(),
            friends: fixtures::friends(),
            clubs: fixtures::clubs(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn get_event(&self, id: u64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn toggle_rsvp(&mut self, event_id: u64) {
        self.update_event(event_id, |event| {
            event.rsvped = !event.rsvped;
            info!("🎟️ Event {} RSVP: {}", event.id, event.rsvped);
        });
    }

    pub fn toggle_favorite(&mut self, event_id: u64) {
        self.update_event(event_id, |event| {
            event.is_favorite = !event.is_favorite;
            info!("⭐ Event {} favorite: {}", event.id, event.is_favorite);
        });
    }

    /// Install a new event list with `apply` run on the matching event
    fn update_event<F>(&mut self, event_id: u64, apply: F)
    where
        F: Fn(&mut Event),
    {
        self.events = self
            .events
            .iter()
            .cloned()
            .map(|mut event| {
                if event.id == event_id {
                    apply(&mut event);
                }
                event
            })
            .collect();
    }

    pub fn event_partitions(&self) -> EventPartitions<'_> {
        let mut by_timing = partition_by(&self.events, |e| e.timing, &[EventTiming::Today, EventTiming::Upcoming])
            .into_iter()
            .map(|(_, events)| events);

        EventPartitions {
            today: by_timing.next().unwrap_or_default(),
            upcoming: by_timing.next().unwrap_or_default(),
            favorites: filter_by(&self.events, |e| e.is_favorite),
        }
    }

    pub fn friend_partitions(&self) -> FriendPartitions<'_> {
        let mut by_status = partition_by(&self.friends, |f| f.status, &[FriendStatus::Active, FriendStatus::Pending])
            .into_iter()
            .map(|(_, friends)| friends);

        FriendPartitions {
            active: by_status.next().unwrap_or_default(),
            pending: by_status.next().unwrap_or_default(),
        }
    }

    /// Active friends whose name contains `query`, ignoring case; every active
    /// friend for a blank query. Pending requests are never matched.
    pub fn search_friends(&self, query: &str) -> Vec<&Friend> {
        let needle = query.trim().to_lowercase();
        filter_by(&self.friends, |f| {
            f.status == FriendStatus::Active && (needle.is_empty() || f.name.to_lowercase().contains(&needle))
        })
    }
}
