//! Seed data every service starts from.

use shared::{
    Club, DayLabel, Event, EventCategory, EventTiming, Expense, ExpenseCategory, Friend, FriendStatus, Goal,
    GoalCategory, GoalStatus, Group, Profile, Routine, RoutineCategory,
};

fn expense(id: u64, item: &str, amount: f64, category: ExpenseCategory, date: &str) -> Expense {
    Expense {
        id,
        item: item.to_string(),
        amount,
        category,
        date: date.to_string(),
    }
}

/// Six expenses totalling $180.00
pub fn expenses() -> Vec<Expense> {
    vec![
        expense(1, "Lunch at Cafeteria", 12.5, ExpenseCategory::Food, "Nov 8"),
        expense(2, "Bus Pass", 45.0, ExpenseCategory::Transport, "Nov 5"),
        expense(3, "Textbook - Physics", 85.0, ExpenseCategory::Books, "Nov 3"),
        expense(4, "Coffee", 4.5, ExpenseCategory::Food, "Nov 8"),
        expense(5, "Dinner", 18.0, ExpenseCategory::Food, "Nov 7"),
        expense(6, "Uber", 15.0, ExpenseCategory::Transport, "Nov 6"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn goal(
    id: u64,
    title: &str,
    description: &str,
    deadline: &str,
    progress: u8,
    category: GoalCategory,
    status: GoalStatus,
    completed: bool,
) -> Goal {
    Goal {
        id,
        title: title.to_string(),
        description: description.to_string(),
        deadline: deadline.to_string(),
        progress,
        category,
        status,
        completed,
    }
}

/// Eight career goals, two of them completed
pub fn goals() -> Vec<Goal> {
    use GoalCategory::*;
    use GoalStatus::*;

    vec![
        goal(1, "Apply to Google Internship", "Summer 2025 Software Engineering Internship", "2025-12-01", 60, Internships, Current, false),
        goal(2, "Microsoft Internship Application", "Software Development Internship", "2025-12-15", 30, Internships, Pending, false),
        goal(3, "Junior Developer Position at StartupXYZ", "Full-time position for recent graduates", "2025-11-30", 80, JobApplications, Current, false),
        goal(4, "Tech Corp - Entry Level", "Submitted application, waiting for response", "2025-12-20", 20, JobApplications, Pending, false),
        goal(5, "Google Interview - Round 1", "Technical phone screen scheduled", "2025-11-20", 100, Interviews, Current, true),
        goal(6, "Amazon Interview Prep", "Preparing for upcoming interview", "2025-11-25", 50, Interviews, Pending, false),
        goal(7, "Complete LinkedIn Profile", "Add projects, skills, and recommendations", "2025-11-15", 80, Networking, Current, false),
        goal(8, "Attend Career Fair", "Network with potential employers", "2025-11-15", 100, Networking, Current, true),
    ]
}

fn routine(id: u64, title: &str, time: &str, days: &[DayLabel], category: RoutineCategory) -> Routine {
    Routine {
        id,
        title: title.to_string(),
        time: time.to_string(),
        days: days.to_vec(),
        category,
    }
}

pub fn routines() -> Vec<Routine> {
    use DayLabel::*;

    vec![
        routine(1, "Computer Science 101", "9:00 AM", &[Mon, Wed, Fri], RoutineCategory::Class),
        routine(2, "Gym Workout", "7:00 AM", &[Mon, Wed, Fri], RoutineCategory::Gym),
        routine(3, "Study Group - Math", "4:00 PM", &[Tue, Thu], RoutineCategory::Study),
        routine(4, "Physics Lab", "2:00 PM", &[Tue], RoutineCategory::Class),
        routine(5, "Coffee with Friends", "5:00 PM", &[Wed], RoutineCategory::Social),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u64,
    title: &str,
    date: &str,
    time: &str,
    location: &str,
    attendees: u32,
    category: EventCategory,
    rsvped: bool,
    is_favorite: bool,
    timing: EventTiming,
) -> Event {
    Event {
        id,
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        attendees,
        category,
        rsvped,
        is_favorite,
        timing,
    }
}

pub fn events() -> Vec<Event> {
    use EventTiming::*;

    vec![
        event(1, "Study Group - Physics", "Nov 9", "6:00 PM - 7:30 PM", "Library Room 3", 45, EventCategory::Academic, true, true, Today),
        event(2, "Intramural Basketball", "Nov 9", "8:00 PM - 9:00 PM", "Sports Complex", 156, EventCategory::Sports, true, false, Today),
        event(3, "Fall Semester Career Fair", "Nov 15", "10:00 AM - 4:00 PM", "Student Center, Main Hall", 234, EventCategory::Career, false, true, Upcoming),
        event(4, "Tech Talk: AI in Healthcare", "Nov 14", "5:00 PM - 6:30 PM", "Engineering Building", 89, EventCategory::Academic, false, false, Upcoming),
    ]
}

pub fn groups() -> Vec<Group> {
    [
        (1, "Computer Science Club", 45, "Weekly coding sessions"),
        (2, "Photography Enthusiasts", 32, "Campus photo walks"),
        (3, "Study Buddies", 28, "Group study sessions"),
    ]
    .into_iter()
    .map(|(id, name, members, description)| Group {
        id,
        name: name.to_string(),
        members,
        description: description.to_string(),
    })
    .collect()
}

pub fn friends() -> Vec<Friend> {
    [
        (1, "Sarah Johnson", FriendStatus::Active),
        (2, "Mike Chen", FriendStatus::Active),
        (3, "Emma Davis", FriendStatus::Pending),
        (4, "Alex Rodriguez", FriendStatus::Pending),
    ]
    .into_iter()
    .map(|(id, name, status)| Friend { id, name: name.to_string(), status })
    .collect()
}

pub fn clubs() -> Vec<Club> {
    [
        (1, "Debate Club", 56, "Academic"),
        (2, "Drama Society", 42, "Arts"),
        (3, "Chess Club", 28, "Games"),
    ]
    .into_iter()
    .map(|(id, name, members, category)| Club {
        id,
        name: name.to_string(),
        members,
        category: category.to_string(),
    })
    .collect()
}

pub fn profile() -> Profile {
    Profile {
        full_name: "Alex Johnson".to_string(),
        email: "alex.johnson@college.edu".to_string(),
    }
}
