pub mod api_error;
pub mod assistant;
pub mod config;
pub mod data;
pub mod format;
pub mod state;
pub mod vendor_search;
