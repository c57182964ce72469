pub mod steps;
pub mod validate;
