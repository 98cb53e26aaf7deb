/// Attendance below this is "at risk" (most universities bar you from exams).
pub const MIN_SAFE_PERCENTAGE: i64 = 75;
/// At or above this the student has a comfortable margin.
pub const GOOD_PERCENTAGE: i64 = 85;

/// Percentage of classes attended, rounded to the nearest integer.
///
/// Returns `None` when `conducted <= 0`: the ratio is undefined, not zero.
/// Rounding is half-away-from-zero (f64 `round`), so 89.5 becomes 90. The
/// top of the range is the one exception: 100 means full attendance, so a
/// missed class caps the result at 99 even when the ratio rounds up
/// (199/200 reports 99, not 100).
pub fn attendance_percentage(conducted: i64, attended: i64) -> Option<i64> {
    if conducted <= 0 {
        return None;
    }
    let rounded = (attended as f64 / conducted as f64 * 100.0).round() as i64;
    if rounded == 100 && attended < conducted {
        return Some(99);
    }
    Some(rounded)
}

/// Weighted attendance across several courses: sum attended and conducted
/// separately, then divide once. Never an average of per-course percentages —
/// a course with 100 classes must weigh ten times a course with 10.
///
/// Courses with `conducted <= 0` contribute no defined ratio and are skipped;
/// if every course is skipped the aggregate is `None`.
pub fn aggregate_percentage<I>(counts: I) -> Option<i64>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let (conducted, attended) = counts
        .into_iter()
        .filter(|&(c, _)| c > 0)
        .fold((0i64, 0i64), |(tc, ta), (c, a)| {
            (tc.saturating_add(c), ta.saturating_add(a))
        });
    attendance_percentage(conducted, attended)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standing {
    AtRisk,
    Okay,
    Good,
}

impl Standing {
    pub fn from_percentage(percentage: i64) -> Self {
        if percentage < MIN_SAFE_PERCENTAGE {
            Standing::AtRisk
        } else if percentage < GOOD_PERCENTAGE {
            Standing::Okay
        } else {
            Standing::Good
        }
    }

    /// An undefined percentage has no standing.
    pub fn classify(percentage: Option<i64>) -> Option<Self> {
        percentage.map(Self::from_percentage)
    }

    pub fn label(self) -> &'static str {
        match self {
            Standing::AtRisk => "at risk",
            Standing::Okay => "okay",
            Standing::Good => "good",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Standing::AtRisk => "✗ At Risk",
            Standing::Okay => "⚠ Okay",
            Standing::Good => "✓ Good",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            Standing::AtRisk => {
                "You need to attend most upcoming classes to improve your percentage."
            }
            Standing::Okay => "Try to attend more classes to reach 85% for a safer margin.",
            Standing::Good => "You're doing great! Keep maintaining this attendance.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_basic() {
        assert_eq!(attendance_percentage(40, 35), Some(88));
        assert_eq!(attendance_percentage(50, 45), Some(90));
        assert_eq!(attendance_percentage(3, 2), Some(67));
    }

    #[test]
    fn test_percentage_undefined_for_nonpositive_conducted() {
        assert_eq!(attendance_percentage(0, 0), None);
        assert_eq!(attendance_percentage(0, 10), None);
        assert_eq!(attendance_percentage(-5, 3), None);
    }

    #[test]
    fn test_percentage_full_attendance_is_exactly_100() {
        for c in 1..=400 {
            assert_eq!(attendance_percentage(c, c), Some(100));
            if c > 1 {
                assert!(attendance_percentage(c, c - 1).unwrap() < 100);
            }
        }
    }

    #[test]
    fn test_near_perfect_attendance_caps_at_99() {
        // 199/200 = 99.5 would round up to a perfect score
        assert_eq!(attendance_percentage(200, 199), Some(99));
        assert_eq!(attendance_percentage(1000, 999), Some(99));
        assert_eq!(attendance_percentage(100000, 99999), Some(99));
    }

    #[test]
    fn test_percentage_stays_in_range_for_valid_inputs() {
        for c in 1..=60 {
            for a in 0..=c {
                let p = attendance_percentage(c, a).unwrap();
                assert!((0..=100).contains(&p), "{a}/{c} gave {p}");
            }
        }
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        // 35/40 = 87.5 exactly
        assert_eq!(attendance_percentage(40, 35), Some(88));
        // 5/8 = 62.5 exactly
        assert_eq!(attendance_percentage(8, 5), Some(63));
    }

    #[test]
    fn test_standing_thresholds() {
        assert_eq!(Standing::from_percentage(74), Standing::AtRisk);
        assert_eq!(Standing::from_percentage(75), Standing::Okay);
        assert_eq!(Standing::from_percentage(84), Standing::Okay);
        assert_eq!(Standing::from_percentage(85), Standing::Good);
        assert_eq!(Standing::from_percentage(0), Standing::AtRisk);
        assert_eq!(Standing::from_percentage(100), Standing::Good);
    }

    #[test]
    fn test_classify_passes_absent_through() {
        assert_eq!(Standing::classify(None), None);
        assert_eq!(Standing::classify(Some(90)), Some(Standing::Good));
    }

    #[test]
    fn test_aggregate_empty_is_absent() {
        assert_eq!(aggregate_percentage([]), None);
    }

    #[test]
    fn test_aggregate_skips_empty_courses() {
        assert_eq!(aggregate_percentage([(0, 0)]), None);
        assert_eq!(aggregate_percentage([(0, 0), (10, 5)]), Some(50));
    }

    #[test]
    fn test_aggregate_is_weighted_not_averaged() {
        // 15/20 = 75
        assert_eq!(aggregate_percentage([(10, 5), (10, 10)]), Some(75));
        // Asymmetric case: 60/110 ≈ 55. Averaging the per-course
        // percentages (50 and 100) would wrongly give 75.
        assert_eq!(aggregate_percentage([(100, 50), (10, 10)]), Some(55));
    }

    #[test]
    fn test_aggregate_saturates_on_extreme_counts() {
        let p = aggregate_percentage([(i64::MAX, i64::MAX), (10, 10)]);
        assert_eq!(p, Some(100));
        let p = aggregate_percentage([(i64::MAX, 0), (i64::MAX, 0)]);
        assert_eq!(p, Some(0));
    }
}
