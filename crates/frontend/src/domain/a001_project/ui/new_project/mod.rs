//! New project dialog (MVVM)
//!
//! - view_model.rs: form state and the create command
//! - view.rs: NewProjectDialog

mod view;
mod view_model;

pub use view::NewProjectDialog;
pub use view_model::{parse_volume, NewProjectVm};
