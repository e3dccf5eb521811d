#![no_std]
//! # Shared Voting Contracts Library
//!
//! Reusable types, errors, constants, validation helpers and the generic
//! proposal registry used by every voting contract in the workspace.
//!
//! ## Modules
//!
//! - `errors` - `VotingError`, the error type every entry point returns
//! - `types` - `ProposalRecord`, `VoteReceipt` and the registry storage keys
//! - `constants` - TTL settings and the packed record layout
//! - `packing` - Fixed-width encoding of a proposal into one 64-byte word
//! - `validation` - Window, weight and overflow checks
//! - `registry` - Proposal/vote logic over a contract-supplied `ProposalStore`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::registry::{self, ProposalStore};
//! use shared::{ProposalRecord, VotingError};
//!
//! struct MyStore;
//!
//! impl ProposalStore for MyStore {
//!     fn load(env: &Env, id: u64) -> Option<ProposalRecord> { /* ... */ }
//!     fn save(env: &Env, id: u64, record: &ProposalRecord) { /* ... */ }
//! }
//!
//! let id = registry::propose::<MyStore>(&env, &proposer, hash, start, end)?;
//! ```

pub mod constants;
pub mod errors;
pub mod packing;
pub mod registry;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use errors::VotingError;
pub use packing::PackedRecord;
pub use registry::ProposalStore;
pub use types::{ProposalRecord, RegistryKey, VoteReceipt};
pub use validation::{safe_add, validate_voting_open, validate_voting_power, validate_voting_window};
