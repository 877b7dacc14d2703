pub mod config;
pub mod date;
pub mod error;
pub mod grader;
pub mod header;
pub mod identifier;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod table;
