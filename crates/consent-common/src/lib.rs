//! Dual-license consent common types and errors.
//!
//! This crate provides the types shared by the reporting pipeline:
//! - Schema types for the `dual-license-responses.json` document
//! - Consent status classification for a single contributor
//! - Tally types produced by classification
//! - Common error types

pub mod error;
pub mod model;
pub mod summary;

pub use error::{Error, Result, ValidationError};
pub use model::{
    ClaimedEmailResponse, ConsentStatus, ContributorResponse, PresentText, ResponseDocument,
    ResponseSet,
};
pub use summary::{ConsentTally, EmailClaims};
