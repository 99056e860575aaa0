//! REST API endpoint tests

mod user_tests;
