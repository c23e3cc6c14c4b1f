//! Person records: students and the two kinds of employee.
//!
//! `Person` is a closed set of record kinds. Behaviour that differs per kind
//! lives in two free functions, [`render`] and [`compute_salary`], each a
//! single match over the variants. Salary is only reachable through the
//! [`Employee`] view, so asking a student for a salary does not type-check.

use std::fmt;

use crate::error::{Error, Result};

use super::course::Course;

/// Lowest grade that counts as a pass.
pub const PASS_MARK: f64 = 50.0;

/// Highest grade a student can receive.
pub const MAX_GRADE: f64 = 100.0;

/// Width of the label column in rendered records.
const LABEL_WIDTH: usize = 14;

/// True when `grade` lies within `[0, 100]`.
pub fn is_valid_grade(grade: f64) -> bool {
    (0.0..=MAX_GRADE).contains(&grade)
}

/// True for finite, non-negative amounts (salaries and hourly rates).
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

// ─────────────────────────────────────────────────────────────────
// Record Kinds
// ─────────────────────────────────────────────────────────────────

/// Which kind of record a `Person` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonKind {
    Student,
    FullTimeEmployee,
    PartTimeEmployee,
}

impl PersonKind {
    /// Label shown on the `Type` line.
    pub fn label(&self) -> &'static str {
        match self {
            PersonKind::Student => "Student",
            PersonKind::FullTimeEmployee => "Full-time Employee",
            PersonKind::PartTimeEmployee => "Part-time Employee",
        }
    }
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A student enrolled in one course.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    id: i64,
    course: Course,
    grade: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, id: i64, course: Course, grade: f64) -> Result<Self> {
        if !is_valid_grade(grade) {
            return Err(Error::invalid_field(
                "grade",
                format!("{} is outside 0-{}", grade, MAX_GRADE),
            ));
        }
        Ok(Self {
            name: name.into(),
            id,
            course,
            grade,
        })
    }

    pub fn course(&self) -> Course {
        self.course
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    /// Whether the grade reaches the pass mark (inclusive).
    pub fn passed(&self) -> bool {
        self.grade >= PASS_MARK
    }
}

/// An employee paid a fixed monthly salary.
#[derive(Debug, Clone, PartialEq)]
pub struct FullTimeEmployee {
    name: String,
    id: i64,
    monthly_salary: f64,
}

impl FullTimeEmployee {
    pub fn new(name: impl Into<String>, id: i64, monthly_salary: f64) -> Result<Self> {
        if !is_valid_amount(monthly_salary) {
            return Err(Error::invalid_field(
                "monthly salary",
                format!("{} is negative or not finite", monthly_salary),
            ));
        }
        Ok(Self {
            name: name.into(),
            id,
            monthly_salary,
        })
    }

    pub fn monthly_salary(&self) -> f64 {
        self.monthly_salary
    }
}

/// An employee paid by the hour.
#[derive(Debug, Clone, PartialEq)]
pub struct PartTimeEmployee {
    name: String,
    id: i64,
    hourly_rate: f64,
    hours_worked: u32,
}

impl PartTimeEmployee {
    pub fn new(
        name: impl Into<String>,
        id: i64,
        hourly_rate: f64,
        hours_worked: u32,
    ) -> Result<Self> {
        if !is_valid_amount(hourly_rate) {
            return Err(Error::invalid_field(
                "hourly rate",
                format!("{} is negative or not finite", hourly_rate),
            ));
        }
        Ok(Self {
            name: name.into(),
            id,
            hourly_rate,
            hours_worked,
        })
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    pub fn hours_worked(&self) -> u32 {
        self.hours_worked
    }
}

// ─────────────────────────────────────────────────────────────────
// Person
// ─────────────────────────────────────────────────────────────────

/// Any record held by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Person {
    Student(Student),
    FullTime(FullTimeEmployee),
    PartTime(PartTimeEmployee),
}

impl Person {
    pub fn id(&self) -> i64 {
        match self {
            Person::Student(s) => s.id,
            Person::FullTime(e) => e.id,
            Person::PartTime(e) => e.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::Student(s) => &s.name,
            Person::FullTime(e) => &e.name,
            Person::PartTime(e) => &e.name,
        }
    }

    pub fn kind(&self) -> PersonKind {
        match self {
            Person::Student(_) => PersonKind::Student,
            Person::FullTime(_) => PersonKind::FullTimeEmployee,
            Person::PartTime(_) => PersonKind::PartTimeEmployee,
        }
    }

    /// The salary-bearing view of this record, if it is an employee.
    pub fn as_employee(&self) -> Option<Employee<'_>> {
        match self {
            Person::Student(_) => None,
            Person::FullTime(e) => Some(Employee::FullTime(e)),
            Person::PartTime(e) => Some(Employee::PartTime(e)),
        }
    }
}

impl From<Student> for Person {
    fn from(student: Student) -> Self {
        Person::Student(student)
    }
}

impl From<FullTimeEmployee> for Person {
    fn from(employee: FullTimeEmployee) -> Self {
        Person::FullTime(employee)
    }
}

impl From<PartTimeEmployee> for Person {
    fn from(employee: PartTimeEmployee) -> Self {
        Person::PartTime(employee)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// A borrowed employee record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Employee<'a> {
    FullTime(&'a FullTimeEmployee),
    PartTime(&'a PartTimeEmployee),
}

// ─────────────────────────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────────────────────────

/// Pay owed to an employee.
pub fn compute_salary(employee: Employee<'_>) -> f64 {
    match employee {
        Employee::FullTime(e) => e.monthly_salary,
        Employee::PartTime(e) => e.hourly_rate * f64::from(e.hours_worked),
    }
}

/// Multi-line description of a record, one `Label : value` pair per line.
pub fn render(person: &Person) -> String {
    let mut fields: Vec<(&str, String)> = vec![
        ("Type", person.kind().to_string()),
        ("Name", person.name().to_string()),
        ("ID", person.id().to_string()),
    ];

    match person {
        Person::Student(s) => {
            fields.push(("Course", s.course().to_string()));
            fields.push(("Grade", s.grade().to_string()));
            let status = if s.passed() { "Passed" } else { "Failed" };
            fields.push(("Status", status.to_string()));
        }
        Person::FullTime(e) => {
            fields.push(("Monthly Salary", e.monthly_salary().to_string()));
        }
        Person::PartTime(e) => {
            fields.push(("Hourly Rate", e.hourly_rate().to_string()));
            fields.push(("Hours Worked", e.hours_worked().to_string()));
            let total = compute_salary(Employee::PartTime(e));
            fields.push(("Total Salary", total.to_string()));
        }
    }

    fields
        .iter()
        .map(|(label, value)| format!("{:<width$} : {}\n", label, value, width = LABEL_WIDTH))
        .collect()
}
