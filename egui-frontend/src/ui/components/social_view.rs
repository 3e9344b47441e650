//! # Social View
//!
//! Social hub: events (today, upcoming, favorites), groups, friends (search,
//! pending requests, social media) and clubs. Event rows carry the RSVP and
//! favorite toggles; everything else is display only.

use eframe::egui;
use shared::Event;

use crate::ui::app_state::CollegeLifeApp;
use crate::ui::components::theme::{colors, event_category_color};
use crate::ui::components::ui_components::{badge, card, empty_hint, page_header, section_header, title_and_detail};
use crate::ui::state::SectionKey;

/// Event toggles clicked during this frame
enum EventAction {
    ToggleRsvp(u64),
    ToggleFavorite(u64),
}

fn draw_event(ui: &mut egui::Ui, event: &Event, actions: &mut Vec<EventAction>) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&event.title).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let star = if event.is_favorite { "★" } else { "☆" };
                if ui.small_button(star).on_hover_text("Favorite").clicked() {
                    actions.push(EventAction::ToggleFavorite(event.id));
                }
                if event.rsvped {
                    ui.label(egui::RichText::new("✔").color(colors::ACCENT));
                }
            });
        });
        badge(ui, event.category.label(), event_category_color(event.category));
        ui.label(egui::RichText::new(format!("📅 {} • {}", event.date, event.time)).small().color(colors::MUTED));
        ui.label(egui::RichText::new(format!("📍 {}", event.location)).small().color(colors::MUTED));
        ui.label(egui::RichText::new(format!("{} attending", event.attendees)).small().color(colors::MUTED));

        let rsvp_text = if event.rsvped { "Cancel RSVP" } else { "RSVP" };
        if ui.button(rsvp_text).clicked() {
            actions.push(EventAction::ToggleRsvp(event.id));
        }
    });
}

impl CollegeLifeApp {
    pub fn render_social(&mut self, ui: &mut egui::Ui) {
        page_header(ui, "Social Hub", "Discover and join campus events");

        let social = &self.backend.social_service;
        let sections = &mut self.sections;
        let mut actions = Vec::new();

        // Events
        if section_header(ui, sections, SectionKey::SocialEvents, "Events", Some(social.events().len())) {
            let partitions = social.event_partitions();
            ui.indent("social_events", |ui| {
                let groups = [
                    (SectionKey::SocialToday, "Today", &partitions.today),
                    (SectionKey::SocialUpcoming, "Upcoming", &partitions.upcoming),
                    (SectionKey::SocialFavorites, "Favorite", &partitions.favorites),
                ];
                for (key, title, events) in groups {
                    if section_header(ui, sections, key, title, Some(events.len())) {
                        if events.is_empty() {
                            empty_hint(ui, "No events");
                        }
                        for event in events.iter() {
                            draw_event(ui, event, &mut actions);
                        }
                    }
                }
            });
        }
        ui.add_space(6.0);

        // Groups
        if section_header(ui, sections, SectionKey::SocialGroups, "Groups", Some(social.groups().len())) {
            for group in social.groups() {
                card(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&group.name).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            badge(ui, &format!("{} members", group.members), colors::MUTED);
                        });
                    });
                    ui.label(egui::RichText::new(&group.description).color(colors::MUTED));
                    let _ = ui.button("View Group");
                });
            }
        }
        ui.add_space(6.0);

        // Friends
        if section_header(ui, sections, SectionKey::SocialFriends, "Friends", Some(social.friends().len())) {
            let friends = social.friend_partitions();
            ui.indent("social_friends", |ui| {
                if section_header(ui, sections, SectionKey::SocialSearchFriends, "🔍 Search Friends", None) {
                    ui.add(egui::TextEdit::singleline(&mut self.friend_search).hint_text("Search by name..."));
                    let matches = social.search_friends(&self.friend_search);
                    if matches.is_empty() {
                        empty_hint(ui, "No friends match");
                    }
                    for friend in matches {
                        card(ui, |ui| {
                            ui.label(friend.name.as_str());
                        });
                    }
                }

                if section_header(
                    ui,
                    sections,
                    SectionKey::SocialPendingRequests,
                    "➕ Pending Requests",
                    Some(friends.pending.len()),
                ) {
                    for friend in &friends.pending {
                        card(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(friend.name.as_str());
                                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                    let _ = ui.small_button("Decline");
                                    let _ = ui.small_button("Accept");
                                });
                            });
                        });
                    }
                }

                if section_header(ui, sections, SectionKey::SocialMedia, "Social Media", None) {
                    let _ = ui.button("Connect Facebook");
                    let _ = ui.button("Connect Instagram");
                }
            });
        }
        ui.add_space(6.0);

        // Clubs
        if section_header(ui, sections, SectionKey::SocialClubs, "Clubs", Some(social.clubs().len())) {
            for club in social.clubs() {
                card(ui, |ui| {
                    ui.horizontal(|ui| {
                        title_and_detail(ui, &club.name, &club.category);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            badge(ui, &format!("{} members", club.members), colors::MUTED);
                        });
                    });
                    let _ = ui.button("Join Club");
                });
            }
        }

        for action in actions {
            match action {
                EventAction::ToggleRsvp(id) => self.backend.social_service.toggle_rsvp(id),
                EventAction::ToggleFavorite(id) => self.backend.social_service.toggle_favorite(id),
            }
        }
    }
}
