//! Core translation engine module

pub mod client;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod errors;
pub mod models;
