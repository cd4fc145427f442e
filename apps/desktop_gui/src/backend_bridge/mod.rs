//! Backend worker: owns the tokio runtime and the submission gateway.

pub mod commands;
pub mod runtime;
