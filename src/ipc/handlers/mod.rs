pub mod classes;
pub mod core;
pub mod dashboard;
pub mod grading;
pub mod modal;
pub mod navigation;
pub mod reports;
pub mod setup;
pub mod students;
pub mod teachers;
