// ABOUTME: Configuration management module for the VitalFlow client
// ABOUTME: Loads backend address, credentials, storage paths and timeouts from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! Configuration module
//!
//! Configuration comes from environment variables only; there is no config file.

/// Environment-based client configuration
pub mod environment;

pub use environment::{ClientConfig, Environment, HttpClientConfig, LogLevel};
