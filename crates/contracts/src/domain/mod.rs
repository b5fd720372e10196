pub mod common;

pub mod a001_project;
pub mod a002_material;
pub mod a003_vendor;
pub mod a004_procurement;
pub mod a005_procurement_timeline;
pub mod a006_chat;
