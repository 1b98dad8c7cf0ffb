// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying a permutation to a frame.

use tsframe_core::Frame;

use crate::error::SortError;
use crate::permutation::Permutation;

/// Returns a new frame whose row `i` is row `permutation[i]` of `frame`.
///
/// Every column and every nanos array is gathered through the same permutation, so rows stay
/// aligned across columns. Names, types, column config and frame metadata are carried over.
/// `frame` itself is left untouched.
pub fn reorder_frame(frame: &Frame, permutation: &Permutation) -> Result<Frame, SortError> {
    let expected = frame.row_count();
    if permutation.len() != expected {
        return Err(SortError::PermutationLengthMismatch {
            expected,
            actual: permutation.len(),
        });
    }
    log::trace!(
        "reordering {} columns x {expected} rows",
        frame.columns().len()
    );
    Ok(frame.take_rows(permutation.as_slice()))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use tsframe_core::{Column, FieldType, FrameMeta, Value};

    use super::*;
    use crate::permutation::{SortDirection, build_permutation};

    fn frame(times: &[i64], nanos: Option<Vec<u32>>) -> Frame {
        let mut ts = Column::new(
            "timestamp",
            FieldType::Time,
            times.iter().map(|&v| Value::Int(v)).collect(),
        );
        ts.nanos = nanos;
        let line = Column::new(
            "line",
            FieldType::String,
            times.iter().map(|v| Value::Str(alloc::format!("line {v}"))).collect(),
        );
        let id = Column::new(
            "id",
            FieldType::Number,
            (0..times.len())
                .map(|i| Value::Int(i64::try_from(i).unwrap()))
                .collect(),
        );
        Frame::new(vec![ts, line, id], FrameMeta::default()).unwrap()
    }

    #[test]
    fn rejects_permutation_of_wrong_length() {
        let f = frame(&[1, 2, 3], None);
        assert_eq!(
            reorder_frame(&f, &Permutation::identity(2)),
            Err(SortError::PermutationLengthMismatch {
                expected: 3,
                actual: 2,
            })
        );
        assert_eq!(
            reorder_frame(&f, &Permutation::identity(4)),
            Err(SortError::PermutationLengthMismatch {
                expected: 3,
                actual: 4,
            })
        );
    }

    #[test]
    fn every_column_follows_the_permutation() {
        let f = frame(&[30, 10, 20, 40], Some(vec![3, 1, 2, 4]));
        let perm = build_permutation(&["c", "a", "b", "d"], SortDirection::Descending);
        let out = reorder_frame(&f, &perm).unwrap();

        assert_eq!(out.row_count(), f.row_count());
        for (c_out, c_in) in out.columns().iter().zip(f.columns()) {
            assert_eq!(c_out.name, c_in.name);
            assert_eq!(c_out.field_type, c_in.field_type);
            for (i, &src) in perm.as_slice().iter().enumerate() {
                assert_eq!(c_out.values[i], c_in.values[src]);
            }
        }
        assert_eq!(out.columns()[0].nanos, Some(vec![4, 3, 2, 1]));
        assert!(out.columns()[1].nanos.is_none());
    }

    #[test]
    fn identity_returns_equal_frame() {
        let f = frame(&[5, 6], Some(vec![0, 0]));
        assert_eq!(reorder_frame(&f, &Permutation::identity(2)).unwrap(), f);
    }

    #[test]
    fn one_permutation_reorders_several_aligned_frames() {
        let a = frame(&[2, 1], None);
        let b = frame(&[20, 10], None);
        let perm = build_permutation(&["2", "1"], SortDirection::Ascending);
        let a = reorder_frame(&a, &perm).unwrap();
        let b = reorder_frame(&b, &perm).unwrap();
        assert_eq!(a.columns()[0].values, vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(b.columns()[0].values, vec![Value::Int(10), Value::Int(20)]);
    }
}
