//! Integration tests

pub mod table_test;
