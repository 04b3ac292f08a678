// Module exports for models

pub mod day_cell;
pub mod labels;
pub mod settings;
pub mod view;
