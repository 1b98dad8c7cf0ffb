// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned frame representation.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::column::{Column, check_nanos_range};

/// Errors returned when building a [`Frame`] or [`Column`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// A column's length differs from the first column's length.
    #[error("column `{column}` has {actual} rows, expected {expected}")]
    RaggedColumns {
        /// The offending column.
        column: String,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        actual: usize,
    },
    /// A nanos array does not match its column's length.
    #[error("nanos of column `{column}` has {actual} entries, expected {expected}")]
    NanosLengthMismatch {
        /// The offending column.
        column: String,
        /// Row count of the column.
        expected: usize,
        /// Length of the nanos array.
        actual: usize,
    },
    /// A nanos entry is a millisecond or more.
    #[error("nanos of column `{column}` at row {row} is {value}, expected less than 1000000")]
    NanosOutOfRange {
        /// The offending column.
        column: String,
        /// Row of the offending entry.
        row: usize,
        /// The offending value.
        value: u32,
    },
}

/// Frame-level metadata, carried over unchanged by transforms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameMeta {
    /// Frame name.
    pub name: Option<String>,
    /// Query reference id that produced this frame.
    pub ref_id: Option<String>,
    /// Any other host metadata.
    pub custom: HashMap<String, String>,
}

/// A table of equal-length columns.
///
/// The row count invariant is checked by [`Frame::new`]; transforms that build frames from an
/// existing one preserve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<Column>,
    meta: FrameMeta,
}

impl Frame {
    /// Create a frame, checking that all columns (and their nanos) have the same length and that
    /// nanos entries stay below [`crate::NANOS_PER_MILLI`].
    pub fn new(columns: Vec<Column>, meta: FrameMeta) -> Result<Self, FrameError> {
        let expected = columns.first().map_or(0, Column::len);
        for col in &columns {
            if col.len() != expected {
                return Err(FrameError::RaggedColumns {
                    column: col.name.clone(),
                    expected,
                    actual: col.len(),
                });
            }
            if let Some(nanos) = &col.nanos
                && nanos.len() != expected
            {
                return Err(FrameError::NanosLengthMismatch {
                    column: col.name.clone(),
                    expected,
                    actual: nanos.len(),
                });
            }
            if let Some(nanos) = &col.nanos {
                check_nanos_range(&col.name, nanos)?;
            }
        }
        Ok(Self { columns, meta })
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Returns the columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the frame metadata.
    pub fn meta(&self) -> &FrameMeta {
        &self.meta
    }

    /// Returns the position of the first column with the given name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Returns the first column with the given name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Gathers every column through the same `indices`, keeping the metadata.
    ///
    /// Row `i` of every output column is row `indices[i]` of the matching input column, so rows
    /// stay aligned across columns.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range.
    pub fn take_rows(&self, indices: &[usize]) -> Self {
        Self {
            columns: self.columns.iter().map(|c| c.take(indices)).collect(),
            meta: self.meta.clone(),
        }
    }

    /// Splits the frame into its columns and metadata.
    pub fn into_parts(self) -> (Vec<Column>, FrameMeta) {
        (self.columns, self.meta)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::{FieldType, Value};

    fn time_col(values: &[i64]) -> Column {
        Column::new(
            "timestamp",
            FieldType::Time,
            values.iter().map(|&v| Value::Int(v)).collect(),
        )
    }

    #[test]
    fn new_rejects_ragged_columns() {
        let line = Column::new("line", FieldType::String, vec![Value::from("a")]);
        let err = Frame::new(vec![time_col(&[1, 2]), line], FrameMeta::default()).unwrap_err();
        assert_eq!(
            err,
            FrameError::RaggedColumns {
                column: "line".into(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn new_rejects_nanos_built_around_with_nanos() {
        let mut col = time_col(&[1, 2]);
        col.nanos = Some(vec![1, 2, 3]);
        let err = Frame::new(vec![col], FrameMeta::default()).unwrap_err();
        assert!(matches!(
            err,
            FrameError::NanosLengthMismatch {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn new_rejects_nanos_set_directly_out_of_range() {
        let mut col = time_col(&[5, 5]);
        col.nanos = Some(vec![1_000_000, 999_999]);
        let err = Frame::new(vec![col], FrameMeta::default()).unwrap_err();
        assert_eq!(
            err,
            FrameError::NanosOutOfRange {
                column: "timestamp".into(),
                row: 0,
                value: 1_000_000,
            }
        );
    }

    #[test]
    fn into_parts_returns_columns_and_meta() {
        let meta = FrameMeta {
            name: Some("logs".into()),
            ..FrameMeta::default()
        };
        let frame = Frame::new(vec![time_col(&[1])], meta.clone()).unwrap();
        let (columns, out_meta) = frame.into_parts();
        assert_eq!(columns, vec![time_col(&[1])]);
        assert_eq!(out_meta, meta);
    }

    #[test]
    fn lookup_by_name() {
        let frame = Frame::new(vec![time_col(&[5, 6, 7])], FrameMeta::default()).unwrap();
        assert_eq!(frame.row_count(), 3);
        assert_eq!(frame.column_index("timestamp"), Some(0));
        assert!(frame.column("tsNs").is_none());
    }

    #[test]
    fn take_rows_keeps_rows_aligned_and_meta() {
        let line = Column::new(
            "line",
            FieldType::String,
            vec![Value::from("a"), Value::from("b"), Value::from("c")],
        );
        let mut meta = FrameMeta {
            ref_id: Some("A".into()),
            ..FrameMeta::default()
        };
        meta.custom.insert("direction".into(), "backward".into());
        let frame = Frame::new(vec![time_col(&[3, 1, 2]), line], meta.clone()).unwrap();

        let out = frame.take_rows(&[1, 2, 0]);
        assert_eq!(out.meta(), &meta);
        assert_eq!(out.row_count(), 3);
        assert_eq!(
            out.columns()[0].values,
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
        assert_eq!(
            out.columns()[1].values,
            vec![Value::from("b"), Value::from("c"), Value::from("a")]
        );
    }

    #[test]
    fn empty_frame_has_zero_rows() {
        let frame = Frame::new(vec![], FrameMeta::default()).unwrap();
        assert_eq!(frame.row_count(), 0);
        assert!(frame.columns().is_empty());
    }
}
