//! Core translation module

pub mod client;
pub mod config;
pub mod errors;
pub mod languages;
pub mod models;
