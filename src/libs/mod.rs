pub mod action;
pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod engine;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod notes;
pub mod report;
pub mod view;
