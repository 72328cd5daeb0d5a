pub mod commands;
pub mod step;
