pub mod course;

pub use course::Course;

use crate::engine::attendance;

/// The in-memory list of courses for this session. Nothing here is ever
/// written to disk; the roster lives exactly as long as the app run.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    courses: Vec<Course>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, conducted: i64, attended: i64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.courses.push(Course {
            id,
            name: name.to_string(),
            conducted,
            attended,
        });
        id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);
        self.courses.len() != before
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Weighted average across all courses, skipping those with no conducted
    /// classes. `None` when no course contributes a defined ratio.
    pub fn average(&self) -> Option<i64> {
        attendance::aggregate_percentage(self.courses.iter().map(|c| (c.conducted, c.attended)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_has_no_average() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.average(), None);
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut roster = Roster::new();
        let a = roster.add("Physics", 40, 35);
        let b = roster.add("Maths", 30, 30);
        assert_ne!(a, b);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut roster = Roster::new();
        let a = roster.add("Physics", 40, 35);
        let b = roster.add("Maths", 30, 30);
        assert!(roster.remove(a));
        assert!(!roster.remove(a));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.courses()[0].id, b);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut roster = Roster::new();
        let a = roster.add("Physics", 40, 35);
        roster.remove(a);
        let b = roster.add("Chemistry", 20, 18);
        assert_ne!(a, b);
    }

    #[test]
    fn test_average_is_weighted() {
        let mut roster = Roster::new();
        roster.add("Big course", 100, 50);
        roster.add("Small course", 10, 10);
        // 60/110 ≈ 55, not the 75 a naive average would give.
        assert_eq!(roster.average(), Some(55));
    }

    #[test]
    fn test_average_ignores_courses_without_classes() {
        let mut roster = Roster::new();
        roster.add("Not started", 0, 0);
        assert_eq!(roster.average(), None);
        roster.add("Physics", 10, 8);
        assert_eq!(roster.average(), Some(80));
    }
}
