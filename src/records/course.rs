//! The fixed course catalogue students can enrol in.

use std::fmt;

/// Predefined courses, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    Math,
    Programming,
    Physics,
    English,
}

impl Course {
    /// All courses in the order they are offered on the menu.
    pub fn all() -> &'static [Course] {
        &[
            Course::Math,
            Course::Programming,
            Course::Physics,
            Course::English,
        ]
    }

    /// Human-readable course name.
    pub fn name(&self) -> &'static str {
        match self {
            Course::Math => "Math",
            Course::Programming => "Programming",
            Course::Physics => "Physics",
            Course::English => "English",
        }
    }

    /// Resolve a 1-based menu selection. Anything outside `1..=all().len()` is `None`.
    pub fn from_selection(selection: i64) -> Option<Course> {
        let index = usize::try_from(selection).ok()?.checked_sub(1)?;
        Self::all().get(index).copied()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
