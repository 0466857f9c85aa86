//! # promptdesk-core - Core Domain Types
//!
//! Foundation crate for PromptDesk. Provides the record types, required-field
//! validation, the in-memory record store, seed data, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Records (`records`)
//! - [`ToolRecord`], [`ToolDraft`], [`Parameter`] - Tool definitions
//! - [`PromptRecord`], [`PromptDraft`] - Industry scenario prompts
//! - [`Entity`] - Record/draft glue used by the generic store
//!
//! ### Validation (`validation`)
//! - [`FieldErrors`] - Per-field required messages
//! - [`ToolField`], [`PromptField`], [`ParamField`] - Form field identifiers
//!
//! ### Store (`store`)
//! - [`RecordStore`] - Ordered in-memory collection with id assignment
//! - [`RecordStorage`] - Backend trait implemented by the store
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use promptdesk_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod records;
pub mod seed;
pub mod store;
pub mod validation;

pub use error::{Error, Result, ResultExt};
pub use records::{
    Entity, EntityKind, Parameter, PromptDraft, PromptRecord, RecordId, ToolDraft, ToolRecord,
};
pub use seed::{seed_prompts, seed_tools};
pub use store::{RecordStorage, RecordStore};
pub use validation::{is_blank, FieldErrors, FieldName, ParamField, PromptField, ToolField};
