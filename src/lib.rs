// Calendar grid layout library
// Headless month, week and day layout for calendar views

pub mod models;
pub mod services;
pub mod utils;
