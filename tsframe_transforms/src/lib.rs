// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nanosecond-timestamp sorting for `tsframe_core` frames.
//!
//! Sorting runs in three pure stages:
//! - [`extract_sort_keys`] finds (or synthesizes) a string key per row,
//! - [`build_permutation`] stably orders row indices by that key, and
//! - [`reorder_frame`] gathers every column (and its nanos) through the permutation.
//!
//! [`sort_frame_by_time`] chains all three. The stages are exposed separately so a
//! [`Permutation`] can be computed once and applied to several row-aligned frames.
//!
//! Keys are strings (`"<millis><nanos:06>"`) rather than floats: a millisecond epoch already uses
//! most of an `f64` mantissa, so adding the nanosecond remainder numerically loses precision.

#![no_std]

extern crate alloc;

mod error;
mod key;
mod permutation;
mod reorder;
mod sort;

pub use error::SortError;
pub use key::{NANOS_WIDTH, SortKeys, TIMESTAMP_FIELD, TS_NS_FIELD, extract_sort_keys, time_key};
pub use permutation::{Permutation, SortDirection, build_permutation};
pub use reorder::reorder_frame;
pub use sort::{is_sorted_by_time, sort_frame_by_time, time_permutation};
