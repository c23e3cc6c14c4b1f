//! Record model for the people a session keeps track of.
//!
//! Students and employees share a name and a unique id. The store owns every
//! record for the lifetime of the session and never removes one.

pub mod course;
pub mod person;
pub mod store;

pub use course::Course;
pub use person::{
    compute_salary, is_valid_amount, is_valid_grade, FullTimeEmployee, PartTimeEmployee, Person,
    Student,
};
pub use store::RecordStore;
