// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Columns and column metadata.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::frame::FrameError;
use crate::value::Value;

/// Nanoseconds in one millisecond: every `nanos` entry must be below this.
pub const NANOS_PER_MILLI: u32 = 1_000_000;

/// The type tag of a [`Column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Timestamps (epoch milliseconds in the main values).
    Time,
    /// Numeric values.
    Number,
    /// Text values.
    String,
    /// Boolean values.
    Boolean,
    /// Anything else the host passes through.
    Other,
}

/// Display and labelling metadata attached to a column.
///
/// Opaque to sorting: it is carried over unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Unit hint (e.g. `"ms"`).
    pub unit: Option<String>,
    /// Display name override.
    pub display_name: Option<String>,
    /// Free-form labels (e.g. log stream labels).
    pub labels: HashMap<String, String>,
}

/// One named, typed column of a [`crate::Frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name (unique names are not enforced).
    pub name: String,
    /// Type tag.
    pub field_type: FieldType,
    /// Row values.
    pub values: Vec<Value>,
    /// Optional sub-millisecond remainder per row, in nanoseconds.
    ///
    /// When present it has exactly as many entries as `values`, each below
    /// [`NANOS_PER_MILLI`].
    pub nanos: Option<Vec<u32>>,
    /// Pass-through metadata.
    pub config: ColumnConfig,
}

impl Column {
    /// Create a column without nanos and with default config.
    pub fn new(name: impl Into<String>, field_type: FieldType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            field_type,
            values,
            nanos: None,
            config: ColumnConfig::default(),
        }
    }

    /// Attach a nanos array. It must be as long as the values, with every entry below
    /// [`NANOS_PER_MILLI`].
    pub fn with_nanos(mut self, nanos: Vec<u32>) -> Result<Self, FrameError> {
        if nanos.len() != self.values.len() {
            return Err(FrameError::NanosLengthMismatch {
                column: self.name,
                expected: self.values.len(),
                actual: nanos.len(),
            });
        }
        check_nanos_range(&self.name, &nanos)?;
        self.nanos = Some(nanos);
        Ok(self)
    }

    /// Replace the column config.
    pub fn with_config(mut self, config: ColumnConfig) -> Self {
        self.config = config;
        self
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` for [`FieldType::Time`] columns.
    pub fn is_time(&self) -> bool {
        self.field_type == FieldType::Time
    }

    /// Gathers rows by index: row `i` of the result is row `indices[i]` of `self`.
    ///
    /// The nanos array, if any, is gathered the same way; a column without nanos stays without.
    /// Name, type and config are cloned.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range, like slice indexing.
    pub fn take(&self, indices: &[usize]) -> Self {
        Self {
            name: self.name.clone(),
            field_type: self.field_type,
            values: indices.iter().map(|&i| self.values[i].clone()).collect(),
            nanos: self
                .nanos
                .as_ref()
                .map(|nanos| indices.iter().map(|&i| nanos[i]).collect()),
            config: self.config.clone(),
        }
    }
}

/// Rejects the first nanos entry that would not fit a six-digit remainder.
pub(crate) fn check_nanos_range(column: &str, nanos: &[u32]) -> Result<(), FrameError> {
    match nanos.iter().position(|&ns| ns >= NANOS_PER_MILLI) {
        Some(row) => Err(FrameError::NanosOutOfRange {
            column: column.into(),
            row,
            value: nanos[row],
        }),
        None => Ok(()),
    }
}
