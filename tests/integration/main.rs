//! Integration test harness.
//!
//! These tests exercise the full HTTP stack against a real PostgreSQL
//! instance; set `ALTEVO_TEST_DATABASE_URL` to point at it.

mod helpers;

mod auth_test;
mod security_test;
mod tenant_test;
