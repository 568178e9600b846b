// src/core/mod.rs
pub mod checker;
pub mod config;
pub mod session;
pub mod strength;
