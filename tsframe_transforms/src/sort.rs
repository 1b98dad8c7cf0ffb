// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-frame time sorting.

use tsframe_core::Frame;

use crate::error::SortError;
use crate::key::extract_sort_keys;
use crate::permutation::{Permutation, SortDirection, build_permutation};
use crate::reorder::reorder_frame;

/// Returns the permutation that sorts `frame` by time in `direction`.
///
/// This is the first two stages of [`sort_frame_by_time`]; apply the result with
/// [`reorder_frame`] to this frame or to any other frame with the same row alignment.
pub fn time_permutation(frame: &Frame, direction: SortDirection) -> Result<Permutation, SortError> {
    let keys = extract_sort_keys(frame)?;
    Ok(build_permutation(&keys, direction))
}

/// Sorts `frame` by its nanosecond timestamp, returning a new frame.
///
/// Rows with identical timestamps keep their source order.
///
/// # Errors
///
/// Returns [`SortError::MissingTimeColumn`] if the frame has neither a `tsNs` column nor a time
/// column.
pub fn sort_frame_by_time(frame: &Frame, direction: SortDirection) -> Result<Frame, SortError> {
    let permutation = time_permutation(frame, direction)?;
    log::debug!(
        "sorting {} rows {direction:?} (already ordered: {})",
        permutation.len(),
        permutation.is_identity()
    );
    reorder_frame(frame, &permutation)
}

/// Returns `true` if `frame` is already ordered by time in `direction`.
///
/// Hosts can use this to skip [`sort_frame_by_time`].
pub fn is_sorted_by_time(frame: &Frame, direction: SortDirection) -> Result<bool, SortError> {
    let keys = extract_sort_keys(frame)?;
    Ok(keys.windows(2).all(|w| match direction {
        SortDirection::Ascending => w[0] <= w[1],
        SortDirection::Descending => w[0] >= w[1],
    }))
}
