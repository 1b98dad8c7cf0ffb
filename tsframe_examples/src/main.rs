// Copyright 2025 the tsframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `tsframe_transforms`.
//!
//! Run with `RUST_LOG=debug` to see which key source the sort picked.

use std::error::Error;

use tsframe_core::{Column, ColumnConfig, FieldType, Frame, FrameMeta, Value};
use tsframe_transforms::{SortDirection, reorder_frame, sort_frame_by_time, time_permutation};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let frame = log_frame()?;
    println!("input:");
    print_frame(&frame);

    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let sorted = sort_frame_by_time(&frame, direction)?;
        println!("sorted {direction:?}:");
        print_frame(&sorted);
    }

    // Hand the newest-first columns back to the host, e.g. to list server errors.
    let (columns, meta) = sort_frame_by_time(&frame, SortDirection::Descending)?.into_parts();
    let errors: Vec<&str> = columns
        .iter()
        .filter(|c| c.name == "line")
        .flat_map(|c| c.values.iter().filter_map(Value::as_str))
        .filter(|line| line.ends_with(" 500"))
        .collect();
    println!(
        "errors in {}: {errors:?}",
        meta.ref_id.as_deref().unwrap_or("?")
    );

    // Reuse one permutation for a second, row-aligned frame.
    let perm = time_permutation(&frame, SortDirection::Descending)?;
    println!("permutation: {:?}", perm.as_slice());
    let scores = Frame::new(
        vec![Column::new(
            "score",
            FieldType::Number,
            vec![
                Value::Float(0.5),
                Value::Float(0.25),
                Value::Float(1.0),
                Value::Float(0.75),
            ],
        )],
        FrameMeta::default(),
    )?;
    println!("aligned frame:");
    print_frame(&reorder_frame(&scores, &perm)?);

    // No time column at all.
    let untimed = Frame::new(
        vec![Column::new("line", FieldType::String, vec!["x".into()])],
        FrameMeta::default(),
    )?;
    if let Err(err) = sort_frame_by_time(&untimed, SortDirection::Ascending) {
        println!("untimed frame: {err}");
    }
    Ok(())
}

/// Four log lines, two of which share a millisecond and differ only in nanos.
fn log_frame() -> Result<Frame, tsframe_core::FrameError> {
    let mut config = ColumnConfig::default();
    config.labels.insert("job".into(), "api".into());
    let timestamp = Column::new(
        "timestamp",
        FieldType::Time,
        vec![
            Value::Int(1_700_000_000_300),
            Value::Int(1_700_000_000_100),
            Value::Int(1_700_000_000_200),
            Value::Int(1_700_000_000_200),
        ],
    )
    .with_nanos(vec![0, 15, 900_001, 42])?;
    let line = Column::new(
        "line",
        FieldType::String,
        vec![
            "GET /health 200".into(),
            "starting".into(),
            "GET /api 500".into(),
            "GET /api 200".into(),
        ],
    )
    .with_config(config);
    let status = Column::new(
        "status",
        FieldType::Number,
        vec![Value::Int(200), Value::Null, Value::Int(500), Value::Int(200)],
    );
    Frame::new(
        vec![timestamp, line, status],
        FrameMeta {
            ref_id: Some("A".into()),
            ..FrameMeta::default()
        },
    )
}

fn print_frame(frame: &Frame) {
    for row in 0..frame.row_count() {
        let cells: Vec<String> = frame
            .columns()
            .iter()
            .map(|c| match &c.nanos {
                _ if c.values[row].is_null() => format!("{}=-", c.name),
                Some(nanos) => format!("{}={}.{:06}", c.name, c.values[row], nanos[row]),
                None => format!("{}={}", c.name, c.values[row]),
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
}
