//! Interactive session: the menu loop that builds and lists records.
//!
//! Each menu action runs to completion before the menu is shown again. Bad
//! answers are asked again where they occur, except an unknown course, which
//! abandons the student being added.

pub mod menu;
pub mod prompt;

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::config::SessionSettings;
use crate::error::{Error, Result};
use crate::records::{
    compute_salary, is_valid_amount, is_valid_grade, Course, FullTimeEmployee, PartTimeEmployee, Person,
    RecordStore, Student,
};

pub use menu::MenuChoice;
pub use prompt::Prompter;

const DUPLICATE_ID: &str = "This ID already exists! Please enter a different ID.";

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user picked Exit.
    Exited,
    /// Input ran out before Exit was picked.
    InputClosed,
}

/// One interactive session and the records it has collected.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    store: RecordStore,
    settings: SessionSettings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: SessionSettings) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            store: RecordStore::new(),
            settings,
        }
    }

    /// Split into the collected records and the output sink.
    #[cfg(test)]
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.prompter.into_output())
    }

    /// Show the menu and handle choices until Exit or end of input.
    pub fn run(&mut self) -> Result<SessionEnd> {
        info!("Session started");
        loop {
            match self.step() {
                Ok(Some(end)) => {
                    info!(records = self.store.len(), "Session finished");
                    return Ok(end);
                }
                Ok(None) => {}
                Err(Error::InputClosed) => {
                    warn!(records = self.store.len(), "Input closed before exit was selected");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Handle one menu choice. `Some` means the session is over.
    fn step(&mut self) -> Result<Option<SessionEnd>> {
        self.prompter.write(menu::menu_text(&self.settings.title))?;
        let answer = self.prompter.ask("Choose an option: ")?;

        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(reason) => {
                debug!(%reason, "Rejected menu choice");
                self.prompter.say("Invalid option.")?;
                return Ok(None);
            }
        };

        debug!(?choice, "Menu choice");
        match choice {
            MenuChoice::AddStudent => self.add_student()?,
            MenuChoice::AddFullTimeEmployee => self.add_full_time_employee()?,
            MenuChoice::AddPartTimeEmployee => self.add_part_time_employee()?,
            MenuChoice::DisplayAll => self.display_all()?,
            MenuChoice::Exit => {
                self.prompter.say("Exiting...")?;
                return Ok(Some(SessionEnd::Exited));
            }
        }
        Ok(None)
    }

    // ─────────────────────────────────────────────────────────────
    // Add Flows
    // ─────────────────────────────────────────────────────────────

    fn add_student(&mut self) -> Result<()> {
        let name = self.prompter.ask("Enter student name: ")?;
        let id = self.ask_unique_id("Enter student ID: ")?;

        self.prompter.say("Choose a course:")?;
        for (index, course) in Course::all().iter().enumerate() {
            self.prompter.say(format!("{}. {}", index + 1, course))?;
        }
        let selection: i64 = self.prompter.ask_number("Course number: ")?;
        let Some(course) = Course::from_selection(selection) else {
            debug!(selection, "Course selection out of range");
            self.prompter.say("Invalid course! Student not added.")?;
            return Ok(());
        };

        let grade: f64 = self.prompter.ask_until(
            "Enter grade (0-100): ",
            "Invalid! Enter grade (0-100): ",
            |g| is_valid_grade(*g),
        )?;

        self.insert(Student::new(name, id, course, grade)?.into())?;
        self.prompter.say("Student added successfully!")
    }

    fn add_full_time_employee(&mut self) -> Result<()> {
        let name = self.prompter.ask("Enter employee name: ")?;
        let id = self.ask_unique_id("Enter employee ID: ")?;

        let salary: f64 = self.prompter.ask_until(
            "Enter monthly salary: ",
            "Invalid! Enter salary (>=0): ",
            |s| is_valid_amount(*s),
        )?;

        self.insert(FullTimeEmployee::new(name, id, salary)?.into())?;
        self.prompter.say("Full-time employee added!")
    }

    fn add_part_time_employee(&mut self) -> Result<()> {
        let name = self.prompter.ask("Enter employee name: ")?;
        let id = self.ask_unique_id("Enter employee ID: ")?;

        let rate: f64 = self.prompter.ask_until(
            "Enter hourly rate: ",
            "Invalid! Enter hourly rate (>=0): ",
            |r| is_valid_amount(*r),
        )?;
        let hours: i64 = self.prompter.ask_until(
            "Enter hours worked: ",
            "Invalid! Enter hours (>=0): ",
            |h| u32::try_from(*h).is_ok(),
        )?;
        let hours = u32::try_from(hours)
            .map_err(|_| Error::invalid_field("hours worked", format!("{} is out of range", hours)))?;

        self.insert(PartTimeEmployee::new(name, id, rate, hours)?.into())?;
        self.prompter.say("Part-time employee added!")
    }

    /// Ask for an id until one is given that no stored record uses.
    fn ask_unique_id(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let id: i64 = self.prompter.ask_number(prompt)?;
            if !self.store.contains(id) {
                return Ok(id);
            }
            debug!(id, "Duplicate id rejected");
            self.prompter.say(DUPLICATE_ID)?;
        }
    }

    fn insert(&mut self, person: Person) -> Result<()> {
        let (id, kind) = (person.id(), person.kind());
        let salary = person.as_employee().map(compute_salary);
        self.store.add(person)?;
        info!(id, %kind, ?salary, total = self.store.len(), "Record added");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────

    fn display_all(&mut self) -> Result<()> {
        debug!(records = self.store.len(), "Displaying all records");
        if self.store.is_empty() {
            return self.prompter.say("No records found.");
        }

        self.prompter.say("\n===== All Records =====")?;
        for person in self.store.all() {
            self.prompter.write(person)?;
            self.prompter.say(&self.settings.separator)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a whole session over `script` and return the store and everything printed.
    fn run_script(script: &str) -> (SessionEnd, RecordStore, String) {
        let mut session = Session::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            SessionSettings::default(),
        );
        let end = session.run().unwrap();
        let (store, output) = session.into_parts();
        (end, store, String::from_utf8(output).unwrap())
    }

    fn ids(store: &RecordStore) -> Vec<i64> {
        store.all().map(Person::id).collect()
    }

    #[test]
    fn test_exit_immediately() {
        let (end, store, out) = run_script("5\n");
        assert_eq!(end, SessionEnd::Exited);
        assert!(store.is_empty());
        assert!(out.contains("===== University Management System ====="));
        assert!(out.contains("Choose an option: "));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn test_end_of_input_without_exit() {
        let (end, _, out) = run_script("");
        assert_eq!(end, SessionEnd::InputClosed);
        assert!(!out.contains("Exiting..."));
    }

    #[test]
    fn test_add_and_display_student() {
        let (_, store, out) = run_script("1\nAlice\n1\n2\n75\n4\n5\n");

        assert_eq!(store.len(), 1);
        assert!(out.contains("Student added successfully!"));
        assert!(out.contains("1. Math\n2. Programming\n3. Physics\n4. English\n"));

        let listing = &out[out.find("===== All Records =====").unwrap()..];
        for expected in ["Student", "Alice", "1", "Programming", "75", "Passed"] {
            assert!(listing.contains(expected), "missing {expected} in {listing}");
        }
        assert!(listing.contains("----------------------\n"));
    }

    #[test]
    fn test_records_listed_in_insertion_order() {
        let script = "\
3\nCarol\n30\n20\n10\n\
1\nAlice\n10\n1\n90\n\
2\nBob\n20\n5000\n\
4\n5\n";
        let (_, store, out) = run_script(script);

        assert_eq!(ids(&store), vec![30, 10, 20]);
        let carol = out.find("Name           : Carol").unwrap();
        let alice = out.find("Name           : Alice").unwrap();
        let bob = out.find("Name           : Bob").unwrap();
        assert!(carol < alice && alice < bob);
        assert_eq!(out.matches("----------------------\n").count(), 3);
        assert!(out.contains("Total Salary   : 200"));
        assert!(out.contains("Monthly Salary : 5000"));
    }

    #[test]
    fn test_duplicate_id_reprompts_until_unique() {
        let script = "2\nBob\n7\n100\n3\nCarol\n7\n7\n8\n15\n10\n4\n5\n";
        let (_, store, out) = run_script(script);

        assert_eq!(ids(&store), vec![7, 8]);
        assert_eq!(out.matches(DUPLICATE_ID).count(), 2);
    }

    #[test]
    fn test_duplicate_id_never_stored_twice() {
        // Input ends while the second add is still asking for an id
        let (end, store, _) = run_script("2\nBob\n7\n100\n2\nDup\n7\n");
        assert_eq!(end, SessionEnd::InputClosed);
        assert_eq!(ids(&store), vec![7]);
    }

    #[test]
    fn test_invalid_course_abandons_student() {
        for selection in ["0", "5"] {
            let script = format!("1\nAlice\n1\n{}\n4\n5\n", selection);
            let (_, store, out) = run_script(&script);

            assert!(store.is_empty());
            assert!(out.contains("Invalid course! Student not added."));
            assert!(out.contains("No records found."));
            assert!(!out.contains("Enter grade"));
        }
    }

    #[test]
    fn test_abandoned_student_leaves_id_free() {
        // The id from the abandoned attempt was never stored, so it can be reused
        let (_, store, out) = run_script("1\nAlice\n1\n9\n1\nAlice\n1\n3\n40\n5\n");
        assert_eq!(ids(&store), vec![1]);
        assert!(!out.contains(DUPLICATE_ID));
    }

    #[test]
    fn test_out_of_range_values_reprompt() {
        let script = "\
1\nAlice\n1\n1\n-1\n101\n50\n\
2\nBob\n2\n-1\n3000\n\
3\nCarol\n3\n-1\n12.5\n-1\n4\n\
5\n";
        let (_, store, out) = run_script(script);

        assert_eq!(store.len(), 3);
        assert_eq!(out.matches("Invalid! Enter grade (0-100): ").count(), 2);
        assert_eq!(out.matches("Invalid! Enter salary (>=0): ").count(), 1);
        assert_eq!(out.matches("Invalid! Enter hourly rate (>=0): ").count(), 1);
        assert_eq!(out.matches("Invalid! Enter hours (>=0): ").count(), 1);
        assert!(!out.contains("Please enter a valid number."));

        let carol = store.all().nth(2).unwrap();
        let salary = compute_salary(carol.as_employee().unwrap());
        assert_eq!(salary, 50.0);
    }

    #[test]
    fn test_hours_reprompt() {
        let (_, store, out) = run_script("3\nCarol\n3\n10\nlots\n-1\n4\n5\n");
        assert_eq!(store.len(), 1);
        assert_eq!(out.matches("Please enter a valid number.").count(), 1);
        assert_eq!(out.matches("Invalid! Enter hours (>=0): ").count(), 1);
        assert!(out.contains("Part-time employee added!"));
    }

    #[test]
    fn test_non_numeric_answers_reprompt() {
        let (_, store, out) = run_script("2\nBob\nseven\n7\nlots\n-3\n4000\n5\n");
        assert_eq!(ids(&store), vec![7]);
        assert_eq!(out.matches("Please enter a valid number.").count(), 2);
        assert_eq!(out.matches("Invalid! Enter salary (>=0): ").count(), 1);
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (_, store, out) = run_script("9\nhello\n0\n5\n");
        assert!(store.is_empty());
        assert_eq!(out.matches("Invalid option.").count(), 3);
        assert_eq!(out.matches("===== University Management System =====").count(), 4);
    }

    #[test]
    fn test_display_empty_store() {
        let (_, _, out) = run_script("4\n5\n");
        assert!(out.contains("No records found."));
        assert!(!out.contains("===== All Records ====="));
    }

    #[test]
    fn test_name_kept_as_typed() {
        let (_, store, _) = run_script("2\n  Bob  Smith \n1\n10\n5\n");
        assert_eq!(store.all().next().unwrap().name(), "  Bob  Smith ");
    }

    #[test]
    fn test_non_utf8_name_is_kept() {
        let mut session = Session::new(
            Cursor::new(b"2\nBo\xffb\n1\n10\n4\n5\n".to_vec()),
            Vec::new(),
            SessionSettings::default(),
        );
        assert_eq!(session.run().unwrap(), SessionEnd::Exited);

        let (store, output) = session.into_parts();
        assert_eq!(store.all().next().unwrap().name(), "Bo\u{FFFD}b");
        assert!(String::from_utf8(output).unwrap().contains("Full-time employee added!"));
    }

    #[test]
    fn test_custom_title_and_separator() {
        let settings = SessionSettings {
            title: "Night School".to_string(),
            separator: "~~~~".to_string(),
        };
        let mut session = Session::new(
            Cursor::new(b"2\nBob\n1\n10\n4\n5\n".to_vec()),
            Vec::new(),
            settings,
        );
        session.run().unwrap();

        let (store, output) = session.into_parts();
        assert_eq!(store.len(), 1);
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("===== Night School ====="));
        assert!(out.contains("~~~~\n"));
    }
}
