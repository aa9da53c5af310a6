//! RootCalc-rs library — application logic for the integer root calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod trace;
pub mod version;
