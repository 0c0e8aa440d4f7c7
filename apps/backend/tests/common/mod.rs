//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for building the router with a chosen recognizer and config
//! - Recognizer stubs that fail or crash
//! - Helper functions for creating request data

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use notebook_vision_backend::config::Config;
use notebook_vision_backend::error::{ApiError, Result};
use notebook_vision_backend::services::recognizer::{essence, PlainTextRecognizer, TextRecognizer};
use notebook_vision_backend::{app, AppState};
use notes_core::CueConfig;

/// Test context holding the application state and router.
pub struct TestContext {
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a context with default config and the plain-text recognizer.
    pub fn new() -> Self {
        Self::build(Config::default(), Arc::new(PlainTextRecognizer))
    }

    /// Create a context with a custom upload limit.
    pub fn with_upload_limit(max_upload_bytes: usize) -> Self {
        let config = Config {
            max_upload_bytes,
            ..Config::default()
        };
        Self::build(config, Arc::new(PlainTextRecognizer))
    }

    /// Create a context with a custom recognizer.
    pub fn with_recognizer(recognizer: Arc<dyn TextRecognizer>) -> Self {
        Self::build(Config::default(), recognizer)
    }

    fn build(config: Config, recognizer: Arc<dyn TextRecognizer>) -> Self {
        let state = AppState::new(config, CueConfig::default(), recognizer);
        let app = app(state.clone());
        Self { state, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server over the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }
}

/// Recognizer for PNG uploads whose engine is always down.
pub struct FailingRecognizer;

impl TextRecognizer for FailingRecognizer {
    fn name(&self) -> &str {
        "failing"
    }

    fn content_types(&self) -> Vec<String> {
        vec!["image/png".to_string()]
    }

    fn accepts(&self, content_type: &str) -> bool {
        essence(content_type) == "image/png"
    }

    fn recognize(&self, _bytes: &[u8]) -> Result<String> {
        Err(ApiError::Recognition("engine offline".to_string()))
    }
}

/// Recognizer whose engine crashes mid-read.
pub struct PanickingRecognizer;

impl TextRecognizer for PanickingRecognizer {
    fn name(&self) -> &str {
        "panicking"
    }

    fn content_types(&self) -> Vec<String> {
        vec!["image/png".to_string()]
    }

    fn accepts(&self, content_type: &str) -> bool {
        essence(content_type) == "image/png"
    }

    fn recognize(&self, _bytes: &[u8]) -> Result<String> {
        panic!("engine crashed")
    }
}
