pub mod advisor;
pub mod advisory;
pub mod catalog;
pub mod config;
pub mod error;
pub mod image;
pub mod pest;
pub mod presenter;
pub mod report;
pub mod weather;
