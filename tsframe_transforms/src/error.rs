// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sort errors.

/// Errors returned by the sort stages.
///
/// Both are caller contract violations; there is no fallback ordering to retry with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// The frame has neither a `tsNs` key column nor a time-typed column.
    #[error("missing timestamp field: frame has no `tsNs` column and no time column")]
    MissingTimeColumn,
    /// A permutation was applied to a frame with a different row count.
    #[error("permutation has {actual} entries but the frame has {expected} rows")]
    PermutationLengthMismatch {
        /// Row count of the frame.
        expected: usize,
        /// Length of the permutation.
        actual: usize,
    },
}
