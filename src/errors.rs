//! Unified application error type.
//! All modules (data, core, cli, ui) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Data-source related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found: {0}")]
    DataFileNotFound(String),

    // ---------------------------
    // Filter input errors
    // ---------------------------
    #[error("Invalid city: {0}")]
    InvalidCity(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Console input
    // ---------------------------
    #[error("Input stream closed")]
    InputClosed,
}

pub type AppResult<T> = Result<T, AppError>;
