//! Management dialog of one finalized material (MVVM)
//!
//! - view_model.rs: ManageVm, form parsing and the book commands
//! - view.rs: ManageDialog

mod view;
mod view_model;

pub use view::ManageDialog;
pub use view_model::ManageVm;
