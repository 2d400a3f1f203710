pub mod cli;
pub mod models;
