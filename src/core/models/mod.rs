// src/core/models/mod.rs

pub mod flight;
pub mod seat;
pub mod route;

pub use flight::*;
pub use seat::*;
pub use route::*;
