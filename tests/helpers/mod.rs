//! Test helpers module
//!
//! This module provides utilities and helpers for testing the Campus Connector client.
//! It includes a mock backend server and test data builders.

#![allow(dead_code)]

pub mod backend_mock;
pub mod test_data;

pub use backend_mock::*;
pub use test_data::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("CampusConnector=debug")
            .try_init();
    });
}
