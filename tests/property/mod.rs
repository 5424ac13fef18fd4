//! Property-based tests

pub mod sort_proptest;
