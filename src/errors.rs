// ABOUTME: Error handling re-exports for the VitalFlow client crate
// ABOUTME: The error model lives in vitalflow-core so every workspace crate shares it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! # Unified Error Handling System
//!
//! See [`vitalflow_core::errors`] for the full description of error codes.

pub use vitalflow_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};

/// Text to show the user for a failed backend call
///
/// Messages the backend wrote (carried by errors with an HTTP status) are shown as-is;
/// transport and decoding failures fall back to `fallback`.
#[must_use]
pub fn user_message(error: &AppError, fallback: &str) -> String {
    if error.context.http_status.is_some() && !error.message.trim().is_empty() {
        error.message.clone()
    } else {
        fallback.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_backend_text() {
        let backend = AppError::backend(429, "Ya generaste un plan esta semana");
        assert_eq!(user_message(&backend, "fallo"), "Ya generaste un plan esta semana");
        assert_eq!(user_message(&AppError::unavailable("connection refused"), "fallo"), "fallo");
    }
}
