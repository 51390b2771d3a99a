pub mod runner;
pub mod services;
