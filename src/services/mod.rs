// Service module exports

pub mod grid;
pub mod picker;
pub mod registry;
pub mod render;
pub mod settings;
pub mod strategy;
pub mod title;
