//! Property-based tests

mod preservation;
