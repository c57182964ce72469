//! The onboarding record and everything that checks or reshapes it

pub mod address;
pub mod list;
pub mod options;
pub mod path;
pub mod schema;
pub mod submit;
pub mod types;
pub mod value;

pub use list::{Keyed, KeyedList};
pub use path::{FieldPath, Segment};
pub use schema::{FieldError, Scope, ValidationErrors, validate};
pub use submit::{LogSubmitter, Submitter};
pub use types::{Child, DependentsInfo, EducationEntry, FinancialInfo, PersonalInfo, Record};
pub use value::FieldValue;
