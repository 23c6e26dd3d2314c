//! Single-component unit tests.

mod router_tests;
