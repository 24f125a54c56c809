//! Error types for the Product actor.

use std::fmt;
use thiserror::Error;

/// Which half of load-modify-save failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Read,
    Write,
}

impl fmt::Display for StorageOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageOp::Read => f.write_str("Mahsulotlarni o‘qishda xato"),
            StorageOp::Write => f.write_str("Mahsulotlarni yozishda xato"),
        }
    }
}

/// Errors that can occur during product operations.
///
/// The `Display` text of each variant is the message returned to HTTP clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// No product has the requested id.
    #[error("Mahsulot topilmadi (ID: {0})")]
    NotFound(String),

    /// A create payload lacks a usable `name` or `price`.
    #[error("name va price majburiy!")]
    MissingRequiredFields,

    /// The request body is not JSON, or not the JSON shape the operation needs.
    #[error("JSON formati noto‘g‘ri")]
    InvalidJson,

    /// The largest stored id is `i64::MAX`, so no new id can be allocated.
    #[error("Yangi ID ajratib bo‘lmadi")]
    IdsExhausted,

    /// The collection file could not be read or written.
    #[error("{op}")]
    Storage { op: StorageOp, detail: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
