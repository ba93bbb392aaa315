//! Unit tests - Tests for individual components without external dependencies

mod config_tests;
