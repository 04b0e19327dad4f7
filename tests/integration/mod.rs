//! Integration tests for the Storyloom relay
//!
//! Each test drives the real router through axum-test with wiremock
//! standing in for Gemini, Imagen and DeepAI.

mod health;
