// ABOUTME: Client-wide constants and environment variable names for the VitalFlow client
// ABOUTME: Re-exports the core constant groups and adds the configuration variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! # Constants Module
//!
//! Constant groups shared with the core crate, plus the names of the environment
//! variables read by [`crate::config::ClientConfig::from_env`].

pub use vitalflow_core::constants::{defaults, display, endpoints, fields, service_names, storage};

/// Environment variable names
pub mod env_config {
    /// Backend base URL
    pub const API_URL: &str = "VITALFLOW_API_URL";
    /// Bearer token
    pub const TOKEN: &str = "VITALFLOW_TOKEN";
    /// Favorites file path override
    pub const FAVORITES_PATH: &str = "VITALFLOW_FAVORITES_PATH";
    /// Request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "VITALFLOW_HTTP_TIMEOUT_SECS";
    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "VITALFLOW_CONNECT_TIMEOUT_SECS";
}

/// User-facing messages
pub mod messages {
    /// Shown when plan generation fails without a backend message
    pub const GENERATE_PLAN_FAILED: &str =
        "Ocurrió un error al generar tu plan. Inténtalo más tarde.";
    /// Shown when marking a challenge day fails without a backend message
    pub const MARK_DAY_FAILED: &str = "Ocurrió un error al marcar el reto.";
    /// Shown when joining a challenge fails without a backend message
    pub const JOIN_FAILED: &str = "Ocurrió un error al unirte al reto.";
    /// Nutritionist application missing contact data
    pub const REQUEST_CONTACT_REQUIRED: &str = "Completa nombre, teléfono y ciudad.";
    /// Nutritionist application missing professional credentials
    pub const REQUEST_CREDENTIALS_REQUIRED: &str =
        "Completa cédula profesional, título y universidad.";
    /// Nutritionist application without a certificate
    pub const REQUEST_CERTIFICATE_REQUIRED: &str =
        "Debes adjuntar al menos un certificado (PDF o imagen).";
    /// A previous nutritionist application is still under review
    pub const REQUEST_ALREADY_PENDING: &str =
        "Ya tienes una solicitud pendiente. Espera a que el administrador la revise.";
}
