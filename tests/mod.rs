//! Test suite for nativeform-client
//!
//! This module organizes all tests

pub mod common;
#[cfg(not(target_arch = "wasm32"))]
pub mod integration;
pub mod property;
