// src/debug/mod.rs

//! The `debug` module is error printing macros and helpers for test
//! builds.

#[cfg(test)]
pub mod helpers;

pub mod printers;
