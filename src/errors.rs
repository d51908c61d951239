//! Unified application error type.
//! All modules (db, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage. Validation rejections are a
//! separate typed value (`core::validate::Rejection`) and only cross into
//! AppError at the CLI boundary via the `Rejected` variant.

use crate::core::validate::Rejection;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),

    // ---------------------------
    // Shift configuration
    // ---------------------------
    #[error("Invalid shift configuration: {0}")]
    InvalidShift(String),

    // ---------------------------
    // Validation outcome (expected, local)
    // ---------------------------
    #[error("Punch rejected ({}): {}", .rejection.code(), .rejection)]
    Rejected {
        #[from]
        rejection: Rejection,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
