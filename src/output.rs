//! JSON Output Envelope Types
//!
//! This module defines the structured JSON output format of the `hanactl` binary.
//! Every invocation prints either a SuccessEnvelope or an ErrorEnvelope.
//!
//! # Output Contract
//! - Success: `{"ok": true, "sid": "...", "command": "...", "data": {...}, "meta": {...}}`
//! - Error: `{"ok": false, "sid": "...", "command": "...", "error": {"code": "...", "message": "..."}}`

use serde::{Deserialize, Serialize};

use crate::error::HanaError;

/// Success envelope for operation results
///
/// Generic over the data type to support different operation return values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    /// Always true for success envelopes
    pub ok: bool,

    /// System id of the target instance (empty for instance-less commands)
    pub sid: String,

    /// Command that was executed (start, sr-state, install, ...)
    pub command: String,

    /// Operation-specific data
    pub data: T,

    /// Execution metadata
    pub meta: Metadata,
}

impl<T> SuccessEnvelope<T> {
    /// Create a new success envelope
    pub fn new(sid: impl Into<String>, command: impl Into<String>, data: T, meta: Metadata) -> Self {
        Self { ok: true, sid: sid.into(), command: command.into(), data, meta }
    }
}

/// Error envelope for operation failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always false for error envelopes
    pub ok: bool,

    /// System id of the target instance (empty if not resolved)
    pub sid: String,

    /// Command that was attempted
    pub command: String,

    /// Error information
    pub error: ErrorInfo,
}

impl ErrorEnvelope {
    /// Create a new error envelope
    pub fn new(sid: impl Into<String>, command: impl Into<String>, error: ErrorInfo) -> Self {
        Self { ok: false, sid: sid.into(), command: command.into(), error }
    }

    /// Create error envelope from HanaError
    pub fn from_error(sid: impl Into<String>, command: impl Into<String>, err: &HanaError) -> Self {
        Self::new(
            sid,
            command,
            ErrorInfo { code: err.error_code().to_string(), message: err.message() },
        )
    }
}

/// Error information structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable error code (e.g., "COMMAND_FAILED", "VERSION_NOT_FOUND")
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

impl ErrorInfo {
    /// Create a new error info
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into() }
    }
}

/// Execution metadata included in all success responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Execution time in milliseconds
    pub execution_ms: u64,
}

impl Metadata {
    /// Create new metadata with execution time
    pub const fn new(execution_ms: u64) -> Self {
        Self { execution_ms }
    }
}
