//! Assistant chat panel (MVVM)
//!
//! - view_model.rs: ChatPanelVm, conversation state and the send command
//! - view.rs: ChatPanel

mod view;
mod view_model;

pub use view::ChatPanel;
pub use view_model::ChatPanelVm;
