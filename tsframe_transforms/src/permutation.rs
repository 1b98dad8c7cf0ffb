// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Permutation construction.

extern crate alloc;

use alloc::vec::Vec;

/// Sorting direction for time sorts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Oldest first.
    #[default]
    Ascending,
    /// Newest first.
    Descending,
}

/// A row order: position `i` of the output takes source row `self.as_slice()[i]`.
///
/// Always a bijection on `0..len`. Instances only come from [`build_permutation`],
/// [`Permutation::identity`] and [`Permutation::reversed`], all of which preserve that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// The permutation that keeps all `len` rows in place.
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Number of rows this permutation applies to.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the permutation of zero rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Source row indices in output order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the permutation, returning the source row indices.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Returns `true` if applying this permutation leaves rows where they are.
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &src)| i == src)
    }

    /// The same order read back to front.
    ///
    /// Note that ties end up in reverse source order, unlike a descending
    /// [`build_permutation`].
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }
}

impl AsRef<[usize]> for Permutation {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Returns the stable permutation that orders `keys` in `direction`.
///
/// Rows with equal keys keep their source order in both directions.
pub fn build_permutation<K: Ord>(keys: &[K], direction: SortDirection) -> Permutation {
    let mut index: Vec<usize> = (0..keys.len()).collect();
    // `sort_by` is stable; descending flips the comparison, not the result, to keep ties in order.
    match direction {
        SortDirection::Ascending => index.sort_by(|&a, &b| keys[a].cmp(&keys[b])),
        SortDirection::Descending => index.sort_by(|&a, &b| keys[b].cmp(&keys[a])),
    }
    Permutation(index)
}
