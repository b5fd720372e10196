pub mod card;
pub mod new_project;
pub mod schedule;
