// src/core/mod.rs

pub mod config_manager;
pub mod paths;
pub mod registry;
pub mod service;
