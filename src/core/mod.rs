// src/core/mod.rs

pub mod context;
pub mod engine;
pub mod frequency;
pub mod types;
