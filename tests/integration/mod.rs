//! Integration tests for stringcase

mod acronym_tests;
mod property_tests;
