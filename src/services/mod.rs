// src/services/mod.rs

pub mod flight_store;
