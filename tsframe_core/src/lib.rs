// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Columnar frame model for tsframe.
//!
//! A [`Frame`] is an ordered list of equal-length [`Column`]s plus opaque [`FrameMeta`]. This is
//! the shape a log/query backend hands to the dashboard: one column per field, one entry per row.
//!
//! Time columns may carry a parallel `nanos` array holding the sub-millisecond remainder of each
//! timestamp, since the main value (milliseconds) cannot hold nanosecond precision on its own.
//!
//! This crate only models and validates the data. Sorting lives in `tsframe_transforms`.

#![no_std]

extern crate alloc;

mod column;
mod frame;
mod value;

pub use column::{Column, ColumnConfig, FieldType, NANOS_PER_MILLI};
pub use frame::{Frame, FrameError, FrameMeta};
pub use value::Value;
