pub mod center;
pub mod empty_state;
pub mod project_view;

pub use center::Center;
