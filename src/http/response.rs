//! # Response Envelopes
//!
//! Every endpoint answers with the same envelope:
//! `{success, data?, count?, criteria?, message?, error?}`. The concrete
//! types here pin the exact key set each endpoint emits.

use serde::Serialize;

use crate::registry::model::{AppEntry, SearchCriteria};

/// List response: all entries plus their count.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<AppEntry>,
    pub count: usize,
}

impl ListResponse {
    pub fn new(data: Vec<AppEntry>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count,
        }
    }
}

/// Search response: matches, their count, and the criteria actually applied
/// so the caller can verify the normalization.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<AppEntry>,
    pub count: usize,
    pub criteria: SearchCriteria,
}

impl SearchResponse {
    pub fn new(data: Vec<AppEntry>, criteria: SearchCriteria) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count,
            criteria,
        }
    }
}

/// Single entry response.
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse {
    pub success: bool,
    pub data: AppEntry,
}

impl SingleResponse {
    pub fn new(data: AppEntry) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Mutation response: the affected snapshot plus a confirmation message.
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub data: AppEntry,
    pub message: &'static str,
}

impl MutationResponse {
    /// The snapshot after an update was applied.
    pub fn updated(data: AppEntry) -> Self {
        Self {
            success: true,
            data,
            message: "App updated successfully",
        }
    }

    /// The snapshot as it existed immediately before deletion.
    pub fn deleted(data: AppEntry) -> Self {
        Self {
            success: true,
            data,
            message: "App deleted successfully",
        }
    }
}

/// Error response body, shared by every non-2xx answer.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
