//! Error types for the AST crate.
//!
//! Contract violations by the caller (a wrong discriminant handed to a
//! partitioned constructor, for example) are panics and never show up here.
//! This module only describes resource failures of the arena ledger, which
//! are reported to the driver once construction is finished.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while allocating and finishing an AST.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// The arena was configured with a node limit that an allocation would exceed.
    #[error("arena node limit of {limit} reached")]
    NodeLimitExceeded { limit: usize },

    /// The arena ledger could not grow.
    #[error("failed to reserve ledger space for {requested} node(s): {source}")]
    AllocationFailed {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// One or more allocations failed while the tree was being built.
    #[error("AST building failed due to {} error(s)", errors.len())]
    BuildFailed { errors: Vec<AstError> },
}
