//! Library entry point for the fileinfo CLI.

pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod inspect;
pub mod model;
pub mod path;
pub mod size;
