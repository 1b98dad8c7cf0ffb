// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sort key extraction.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use tsframe_core::{Column, Frame, Value};

use crate::error::SortError;

/// Name of the column holding precomputed nanosecond timestamp strings.
pub const TS_NS_FIELD: &str = "tsNs";

/// Name of the preferred time column when no [`TS_NS_FIELD`] column exists.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Digits used for the zero-padded nanosecond suffix of a synthesized key.
pub const NANOS_WIDTH: usize = 6;

/// One lexicographically comparable key per row.
pub type SortKeys = Vec<String>;

/// Builds the key for one timestamp: the main value followed by the nanos, zero-padded to
/// [`NANOS_WIDTH`] digits (`"000000"` when there are no nanos).
pub fn time_key(value: &Value, nanos: Option<u32>) -> String {
    format!(
        "{value}{:0>width$}",
        nanos.unwrap_or(0),
        width = NANOS_WIDTH
    )
}

/// Returns one sort key per row of `frame`.
///
/// A [`TS_NS_FIELD`] column is used verbatim. Otherwise keys are synthesized from the primary
/// time column with [`time_key`]. The primary time column is the time-typed column named
/// [`TIMESTAMP_FIELD`], or failing that the first time-typed column.
pub fn extract_sort_keys(frame: &Frame) -> Result<SortKeys, SortError> {
    if let Some(col) = frame.column(TS_NS_FIELD) {
        log::debug!("sort keys: using `{TS_NS_FIELD}` column ({} rows)", col.len());
        return Ok(col.values.iter().map(ToString::to_string).collect());
    }

    let Some(col) = primary_time_column(frame) else {
        return Err(SortError::MissingTimeColumn);
    };
    log::debug!(
        "sort keys: synthesizing from time column `{}` ({} rows, nanos: {})",
        col.name,
        col.len(),
        col.nanos.is_some()
    );

    let keys = match &col.nanos {
        Some(nanos) => col
            .values
            .iter()
            .zip(nanos)
            .map(|(v, &ns)| time_key(v, Some(ns)))
            .collect(),
        None => col.values.iter().map(|v| time_key(v, None)).collect(),
    };
    Ok(keys)
}

fn primary_time_column(frame: &Frame) -> Option<&Column> {
    let cols = frame.columns();
    cols.iter()
        .find(|c| c.is_time() && c.name == TIMESTAMP_FIELD)
        .or_else(|| cols.iter().find(|c| c.is_time()))
}
