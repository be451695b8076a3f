// src/tests/mod.rs

//! Tests for _mloglib_.
//!
//! Tests are placed at `src/tests/`, inside the `mloglib`. This is a
//! reasonable trade-off of separation and access.
//!
//! Tests placed at top-level path `tests/` do not have crate-internal
//! visibility; those exercise only the public API.

pub mod common;
pub mod logrecord_tests;
