// src/core/mod.rs

pub mod booking_system;
pub mod errors;
pub mod file_system;
pub mod models;
pub mod state;
