// Service module exports

pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod settings;
pub mod store;
