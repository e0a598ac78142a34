//! Rapida metadata reconciliation and validation.
//!
//! Provider and tool settings are stored as flat, ordered key/value records.
//! This crate knows, for every supported provider and tool, which keys a
//! record may carry, what their defaults are and which values are valid.
//!
//! ```no_run
//! use rapida_metadata::{MetadataRecord, ProviderKind, Registry};
//!
//! let registry = Registry::builtin();
//! let deepgram = registry.dispatch(ProviderKind::SpeechToText, "deepgram");
//! let record = deepgram.assemble(&MetadataRecord::new());
//! assert!(deepgram.validate(&record).is_err());
//! ```

pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod metadata;
pub mod providers;
pub mod reconcile;
pub mod settings;
pub mod tools;
pub mod validate;

pub use config::Config;
pub use descriptor::{FieldSpec, ProviderDescriptor};
pub use error::{ConfigError, Error, MetadataError, Result, ValidationError};
pub use metadata::{MetadataKey, MetadataPair, MetadataRecord};
pub use providers::{Dispatch, ProviderKind, Registry};
pub use tools::{ToolDefinition, default_tool_definition};
pub use validate::Rule;
