// ABOUTME: Core types and constants for the VitalFlow nutrition client
// ABOUTME: Foundation crate with error handling, lenient JSON helpers, constants and models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

#![deny(unsafe_code)]

//! # VitalFlow Core
//!
//! Foundation crate providing shared types and constants for the VitalFlow client.
//! This crate is designed to change infrequently, enabling incremental compilation
//! benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Endpoint paths, storage keys and legacy field alias tables
//! - **json**: Lenient readers for heterogeneous backend JSON
//! - **models**: Recipe, plan, challenge and user profile documents

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Lenient JSON helpers (truthiness, display strings, lenient numbers)
pub mod json;

/// Core data models (Recipe, Plan, Challenge, UserProfile)
pub mod models;
