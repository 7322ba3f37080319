//! cinesort - batch movie organizer backed by TMDB
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod parse;
pub mod relocate;
pub mod runner;
pub mod tmdb;
