use std::time::{Duration, Instant};

use crate::config::Config;
use crate::engine::projection::{self, Projection, ValidationError};
use crate::feedback::{self, Feedback};
use crate::roster::Roster;
use crate::ui::line_input::{InputKind, LineInput};
use crate::ui::theme::Theme;

/// The sent banner in the feedback modal lingers this long before the modal
/// closes itself (matches the original web modal's auto-close).
const FEEDBACK_SENT_LINGER: Duration = Duration::from_millis(2500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Calculator,
    Courses,
}

/// Calculator screen focus order: the two entry fields, then (once a base
/// pair exists) the two planner fields.
pub const CALC_ENTRY_FIELDS: usize = 2;
pub const CALC_ALL_FIELDS: usize = 4;

pub enum FeedbackState {
    Editing { error: Option<String> },
    Sent { since: Instant },
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub theme: &'static Theme,
    pub should_quit: bool,

    // Entry form + planner
    pub entry_conducted: LineInput,
    pub entry_attended: LineInput,
    pub entry_error: Option<ValidationError>,
    pub base: Option<(i64, i64)>,
    pub future_conducted: LineInput,
    pub future_attended: LineInput,
    pub calc_focus: usize,

    // Courses screen
    pub roster: Roster,
    pub course_name: LineInput,
    pub course_conducted: LineInput,
    pub course_attended: LineInput,
    pub course_error: Option<String>,
    pub course_focus: usize,
    pub course_selected: usize,

    // Feedback modal
    pub feedback_open: bool,
    pub feedback_name: LineInput,
    pub feedback_email: LineInput,
    pub feedback_message: LineInput,
    pub feedback_focus: usize,
    pub feedback_state: FeedbackState,
}

impl App {
    pub fn new() -> Self {
        let mut config = Config::load().unwrap_or_default();
        config.normalize();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        Self {
            screen: AppScreen::Calculator,
            config,
            theme,
            should_quit: false,
            entry_conducted: LineInput::new(InputKind::Numeric),
            entry_attended: LineInput::new(InputKind::Numeric),
            entry_error: None,
            base: None,
            future_conducted: LineInput::new(InputKind::Numeric),
            future_attended: LineInput::new(InputKind::Numeric),
            calc_focus: 0,
            roster: Roster::new(),
            course_name: LineInput::new(InputKind::Text),
            course_conducted: LineInput::new(InputKind::Numeric),
            course_attended: LineInput::new(InputKind::Numeric),
            course_error: None,
            course_focus: 0,
            course_selected: 0,
            feedback_open: false,
            feedback_name: LineInput::new(InputKind::Text),
            feedback_email: LineInput::new(InputKind::Text),
            feedback_message: LineInput::new(InputKind::Text),
            feedback_focus: 0,
            feedback_state: FeedbackState::Editing { error: None },
        }
    }

    /// Validate the entry fields and, if valid, latch the base pair the
    /// planner and scenarios work from.
    pub fn calculate(&mut self) {
        match projection::parse_base(self.entry_conducted.value(), self.entry_attended.value()) {
            Ok(pair) => {
                self.base = Some(pair);
                self.entry_error = None;
            }
            Err(err) => {
                self.base = None;
                self.entry_error = Some(err);
            }
        }
    }

    /// Re-derived on every render; the computation is O(1), so there is
    /// nothing to cache.
    pub fn projection(&self) -> Projection {
        match self.base {
            Some((conducted, attended)) => projection::project_future(
                conducted,
                attended,
                self.future_conducted.value(),
                self.future_attended.value(),
            ),
            None => Projection::default(),
        }
    }

    pub fn calc_field_count(&self) -> usize {
        if self.base.is_some() {
            CALC_ALL_FIELDS
        } else {
            CALC_ENTRY_FIELDS
        }
    }

    pub fn calc_focus_next(&mut self) {
        self.calc_focus = (self.calc_focus + 1) % self.calc_field_count();
    }

    pub fn calc_focus_prev(&mut self) {
        let n = self.calc_field_count();
        self.calc_focus = (self.calc_focus + n - 1) % n;
    }

    pub fn calc_focused_input(&mut self) -> &mut LineInput {
        match self.calc_focus {
            0 => &mut self.entry_conducted,
            1 => &mut self.entry_attended,
            2 => &mut self.future_conducted,
            _ => &mut self.future_attended,
        }
    }

    pub fn add_course(&mut self) {
        let name = self.course_name.value().trim().to_string();
        if name.is_empty() {
            self.course_error = Some("Please enter a course name".to_string());
            return;
        }
        match projection::parse_base(self.course_conducted.value(), self.course_attended.value()) {
            Ok((conducted, attended)) => {
                self.roster.add(&name, conducted, attended);
                self.course_name.clear();
                self.course_conducted.clear();
                self.course_attended.clear();
                self.course_error = None;
                self.course_focus = 0;
            }
            Err(err) => self.course_error = Some(err.to_string()),
        }
    }

    pub fn delete_selected_course(&mut self) {
        let Some(course) = self.roster.courses().get(self.course_selected) else {
            return;
        };
        let id = course.id;
        self.roster.remove(id);
        if self.course_selected >= self.roster.len() && self.course_selected > 0 {
            self.course_selected -= 1;
        }
    }

    pub fn course_select_next(&mut self) {
        if !self.roster.is_empty() {
            self.course_selected = (self.course_selected + 1).min(self.roster.len() - 1);
        }
    }

    pub fn course_select_prev(&mut self) {
        self.course_selected = self.course_selected.saturating_sub(1);
    }

    pub fn course_focused_input(&mut self) -> &mut LineInput {
        match self.course_focus {
            0 => &mut self.course_name,
            1 => &mut self.course_conducted,
            _ => &mut self.course_attended,
        }
    }

    pub fn open_feedback(&mut self) {
        self.feedback_open = true;
        self.feedback_focus = 0;
        self.feedback_state = FeedbackState::Editing { error: None };
    }

    pub fn close_feedback(&mut self) {
        self.feedback_open = false;
        self.feedback_state = FeedbackState::Editing { error: None };
    }

    pub fn feedback_focused_input(&mut self) -> &mut LineInput {
        match self.feedback_focus {
            0 => &mut self.feedback_name,
            1 => &mut self.feedback_email,
            _ => &mut self.feedback_message,
        }
    }

    /// Blocking submit; the relay call has a 10s timeout. On success the
    /// modal shows the thank-you banner until the next ticks close it.
    pub fn submit_feedback(&mut self) {
        let fb = Feedback {
            name: self.feedback_name.value().to_string(),
            email: self.feedback_email.value().to_string(),
            message: self.feedback_message.value().to_string(),
        };
        match feedback::submit(&self.config.feedback_access_key, &fb) {
            Ok(()) => {
                self.feedback_name.clear();
                self.feedback_email.clear();
                self.feedback_message.clear();
                self.feedback_state = FeedbackState::Sent {
                    since: Instant::now(),
                };
            }
            Err(err) => {
                self.feedback_state = FeedbackState::Editing {
                    error: Some(err.to_string()),
                };
            }
        }
    }

    /// Called on every Tick event.
    pub fn tick(&mut self) {
        if let FeedbackState::Sent { since } = self.feedback_state {
            if since.elapsed() >= FEEDBACK_SENT_LINGER {
                self.close_feedback();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ValidationError;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_into(input: &mut LineInput, s: &str) {
        for ch in s.chars() {
            input.handle(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_calculate_latches_base_pair() {
        let mut app = App::new();
        type_into(&mut app.entry_conducted, "40");
        type_into(&mut app.entry_attended, "35");
        app.calculate();
        assert_eq!(app.base, Some((40, 35)));
        assert_eq!(app.entry_error, None);
        assert_eq!(app.calc_field_count(), CALC_ALL_FIELDS);
    }

    #[test]
    fn test_calculate_rejects_bad_entry_and_clears_base() {
        let mut app = App::new();
        type_into(&mut app.entry_conducted, "40");
        type_into(&mut app.entry_attended, "35");
        app.calculate();
        assert!(app.base.is_some());

        app.entry_attended.clear();
        type_into(&mut app.entry_attended, "50");
        app.calculate();
        assert_eq!(app.base, None);
        assert_eq!(
            app.entry_error,
            Some(ValidationError::AttendedExceedsConducted)
        );
        assert_eq!(app.calc_field_count(), CALC_ENTRY_FIELDS);
    }

    #[test]
    fn test_projection_without_base_is_blank() {
        let app = App::new();
        assert_eq!(app.projection(), Projection::default());
    }

    #[test]
    fn test_projection_follows_planner_fields() {
        let mut app = App::new();
        type_into(&mut app.entry_conducted, "40");
        type_into(&mut app.entry_attended, "35");
        app.calculate();

        type_into(&mut app.future_conducted, "10");
        type_into(&mut app.future_attended, "10");
        assert_eq!(app.projection().percentage, Some(90));

        // Editing a field re-derives; no stale cached value.
        app.future_attended.clear();
        type_into(&mut app.future_attended, "12");
        assert_eq!(
            app.projection().error,
            Some(ValidationError::AttendedExceedsPlanned)
        );
    }

    #[test]
    fn test_calc_focus_wraps_over_available_fields() {
        let mut app = App::new();
        assert_eq!(app.calc_field_count(), CALC_ENTRY_FIELDS);
        app.calc_focus_next();
        assert_eq!(app.calc_focus, 1);
        app.calc_focus_next();
        assert_eq!(app.calc_focus, 0);
        app.calc_focus_prev();
        assert_eq!(app.calc_focus, 1);
    }

    #[test]
    fn test_add_course_requires_name() {
        let mut app = App::new();
        type_into(&mut app.course_conducted, "40");
        type_into(&mut app.course_attended, "35");
        app.add_course();
        assert!(app.roster.is_empty());
        assert_eq!(
            app.course_error.as_deref(),
            Some("Please enter a course name")
        );
    }

    #[test]
    fn test_add_course_validates_and_clears_form() {
        let mut app = App::new();
        type_into(&mut app.course_name, "Physics");
        type_into(&mut app.course_conducted, "40");
        type_into(&mut app.course_attended, "35");
        app.add_course();
        assert_eq!(app.roster.len(), 1);
        assert!(app.course_name.is_empty());
        assert!(app.course_error.is_none());

        type_into(&mut app.course_name, "Maths");
        type_into(&mut app.course_conducted, "0");
        type_into(&mut app.course_attended, "0");
        app.add_course();
        assert_eq!(app.roster.len(), 1);
        assert_eq!(
            app.course_error.as_deref(),
            Some("Total classes must be greater than 0")
        );
    }

    #[test]
    fn test_delete_selected_course_moves_selection_up() {
        let mut app = App::new();
        app.roster.add("A", 10, 8);
        app.roster.add("B", 10, 9);
        app.course_selected = 1;
        app.delete_selected_course();
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.course_selected, 0);
        app.delete_selected_course();
        assert!(app.roster.is_empty());
        // Deleting from an empty roster is a no-op.
        app.delete_selected_course();
    }

    #[test]
    fn test_submit_feedback_with_empty_form_reports_error() {
        let mut app = App::new();
        app.open_feedback();
        app.submit_feedback();
        match &app.feedback_state {
            FeedbackState::Editing { error: Some(msg) } => {
                assert_eq!(msg, "Please fill in all fields");
            }
            _ => panic!("expected an editing-state error"),
        }
        assert!(app.feedback_open);
    }

    #[test]
    fn test_submit_feedback_without_access_key_reports_error() {
        let mut app = App::new();
        app.config.feedback_access_key.clear();
        app.open_feedback();
        type_into(&mut app.feedback_name, "Shree");
        type_into(&mut app.feedback_email, "shree@example.com");
        type_into(&mut app.feedback_message, "hello");
        app.submit_feedback();
        assert!(matches!(
            app.feedback_state,
            FeedbackState::Editing { error: Some(_) }
        ));
    }
}
