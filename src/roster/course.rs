use crate::engine::attendance::{self, Standing};

/// One tracked course. Percentage and standing are derived on read from the
/// raw counts so an edit can never leave a stale cached value behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: u64,
    pub name: String,
    pub conducted: i64,
    pub attended: i64,
}

impl Course {
    pub fn percentage(&self) -> Option<i64> {
        attendance::attendance_percentage(self.conducted, self.attended)
    }

    pub fn standing(&self) -> Option<Standing> {
        Standing::classify(self.percentage())
    }
}
