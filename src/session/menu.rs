//! Main menu options.

use std::fmt;
use std::str::FromStr;

/// One of the five main menu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    AddFullTimeEmployee,
    AddPartTimeEmployee,
    DisplayAll,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub fn all() -> &'static [MenuChoice] {
        &[
            MenuChoice::AddStudent,
            MenuChoice::AddFullTimeEmployee,
            MenuChoice::AddPartTimeEmployee,
            MenuChoice::DisplayAll,
            MenuChoice::Exit,
        ]
    }

    /// Number the user types to pick this option.
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::AddStudent => 1,
            MenuChoice::AddFullTimeEmployee => 2,
            MenuChoice::AddPartTimeEmployee => 3,
            MenuChoice::DisplayAll => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddStudent => "Add Student",
            MenuChoice::AddFullTimeEmployee => "Add Full-time Employee",
            MenuChoice::AddPartTimeEmployee => "Add Part-time Employee",
            MenuChoice::DisplayAll => "Display All Records",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a menu number", s.trim()))?;

        Self::all()
            .iter()
            .copied()
            .find(|choice| i64::from(choice.number()) == number)
            .ok_or_else(|| format!("{} is not a menu option", number))
    }
}

/// Banner plus the numbered options, one per line.
pub fn menu_text(title: &str) -> String {
    let mut text = format!("\n===== {} =====\n", title);
    for choice in MenuChoice::all() {
        text.push_str(&format!("{}\n", choice));
    }
    text
}
