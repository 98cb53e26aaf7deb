use thiserror::Error;

use crate::engine::attendance;

/// Validation failures for the entry and planner forms. The `Display` strings
/// are rendered verbatim in the UI, so they are phrased for a student, not a
/// log file. None of these are fatal; the caller re-renders and lets the user
/// correct the field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in both fields")]
    EmptyField,
    #[error("Please enter valid numbers")]
    NotANumber,
    #[error("Total classes must be greater than 0")]
    NonPositiveConducted,
    #[error("Future classes cannot be negative")]
    NegativeFutureConducted,
    #[error("Classes attended cannot be negative")]
    NegativeAttended,
    #[error("You can't attend more classes than were conducted!")]
    AttendedExceedsConducted,
    #[error("You can't attend more classes than will be conducted!")]
    AttendedExceedsPlanned,
}

/// Validate the initial conducted/attended entry. Checks run in a fixed
/// order so the reported error is deterministic: empty fields, unparseable
/// numbers, non-positive conducted, negative attended, attended > conducted.
pub fn parse_base(conducted: &str, attended: &str) -> Result<(i64, i64), ValidationError> {
    let conducted = conducted.trim();
    let attended = attended.trim();

    if conducted.is_empty() || attended.is_empty() {
        return Err(ValidationError::EmptyField);
    }

    let conducted: i64 = conducted.parse().map_err(|_| ValidationError::NotANumber)?;
    let attended: i64 = attended.parse().map_err(|_| ValidationError::NotANumber)?;

    if conducted <= 0 {
        return Err(ValidationError::NonPositiveConducted);
    }
    if attended < 0 {
        return Err(ValidationError::NegativeAttended);
    }
    if attended > conducted {
        return Err(ValidationError::AttendedExceedsConducted);
    }

    Ok((conducted, attended))
}

/// Outcome of a what-if projection. At most one of the fields is set: both
/// `None` means the planner fields are still empty and there is nothing to
/// show yet, which is not an error state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Projection {
    pub percentage: Option<i64>,
    pub error: Option<ValidationError>,
}

impl Projection {
    fn of(percentage: Option<i64>) -> Self {
        Self {
            percentage,
            error: None,
        }
    }

    fn err(error: ValidationError) -> Self {
        Self {
            percentage: None,
            error: Some(error),
        }
    }
}

/// Project the attendance percentage after `future_conducted` more classes of
/// which `future_attended` will be attended. The raw planner fields arrive
/// as strings; checks run in a fixed order (first failure wins): empty (no
/// result, no error), unparseable, negative future classes, negative
/// attended, attended > planned. The base pair is assumed to be already
/// validated by [`parse_base`].
pub fn project_future(
    base_conducted: i64,
    base_attended: i64,
    future_conducted: &str,
    future_attended: &str,
) -> Projection {
    let future_conducted = future_conducted.trim();
    let future_attended = future_attended.trim();

    if future_conducted.is_empty() || future_attended.is_empty() {
        return Projection::default();
    }

    let (future, attend) = match (future_conducted.parse::<i64>(), future_attended.parse::<i64>()) {
        (Ok(f), Ok(a)) => (f, a),
        _ => return Projection::err(ValidationError::NotANumber),
    };

    if future < 0 {
        return Projection::err(ValidationError::NegativeFutureConducted);
    }
    if attend < 0 {
        return Projection::err(ValidationError::NegativeAttended);
    }
    if attend > future {
        return Projection::err(ValidationError::AttendedExceedsPlanned);
    }

    // Counts near i64::MAX saturate rather than overflow.
    Projection::of(attendance::attendance_percentage(
        base_conducted.saturating_add(future),
        base_attended.saturating_add(attend),
    ))
}

/// A canned what-if the student can eyeball without typing anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub classes: i64,
    pub attend: i64,
}

/// The four stock scenarios, with class counts expressed in conducted-count
/// units. Attendance at KL-style universities is tracked per hour and one
/// class slot spans `hours_per_class` hours, so "skip 1 class" adds
/// `hours_per_class` to conducted.
pub fn scenarios(hours_per_class: i64) -> Vec<Scenario> {
    let h = hours_per_class.max(1);
    vec![
        Scenario {
            label: format!("Skip 1 class ({} hours)", h),
            classes: h,
            attend: 0,
        },
        Scenario {
            label: format!("Skip 2 classes ({} hours)", 2 * h),
            classes: 2 * h,
            attend: 0,
        },
        Scenario {
            label: format!("Attend next 3 classes ({} hours)", 3 * h),
            classes: 3 * h,
            attend: 3 * h,
        },
        Scenario {
            label: format!("Attend next 5 classes ({} hours)", 5 * h),
            classes: 5 * h,
            attend: 5 * h,
        },
    ]
}

pub fn scenario_percentage(
    base_conducted: i64,
    base_attended: i64,
    scenario: &Scenario,
) -> Option<i64> {
    attendance::attendance_percentage(
        base_conducted.saturating_add(scenario.classes),
        base_attended.saturating_add(scenario.attend),
    )
}
