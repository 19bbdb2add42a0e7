//! Text and JSON rendering of records and aggregates.
//!
//! The interactive console and the non-interactive subcommands share these
//! writers so both print the same lines.

use std::io::{self, Write};

use anyhow::Result;
use serde::Serialize;

use crate::record::{GRADE_COUNT, StudentRecord, render};
use crate::report::{ClassSummary, top_by_average};

pub const NO_RECORDS: &str = "No students registered.";

/// JSON shape of a record: its stored fields plus the computed average.
#[derive(Debug, Serialize)]
pub struct RecordView<'a> {
    pub name: &'a str,
    pub age: i64,
    pub grades: [f64; GRADE_COUNT],
    pub average: f64,
}

impl<'a> From<&'a StudentRecord> for RecordView<'a> {
    fn from(record: &'a StudentRecord) -> Self {
        Self {
            name: record.name(),
            age: record.age(),
            grades: *record.grades(),
            average: record.average(),
        }
    }
}

/// Writes every record, one rendered line each.
pub fn print_records(out: &mut impl Write, records: &[StudentRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "{NO_RECORDS}");
    }

    writeln!(out, "\n--- Student List ---")?;
    for record in records {
        writeln!(out, "{}", render(record))?;
    }
    Ok(())
}

/// Writes the record with the highest average.
pub fn print_top(out: &mut impl Write, records: &[StudentRecord]) -> io::Result<()> {
    let Some(top) = top_by_average(records) else {
        return writeln!(out, "{NO_RECORDS}");
    };

    writeln!(out, "\n--- Top Student ---")?;
    writeln!(
        out,
        "The top student is {} with average {:.2}",
        top.name(),
        top.average()
    )
}

pub fn print_summary(out: &mut impl Write, summary: &ClassSummary) -> io::Result<()> {
    if summary.students == 0 {
        return writeln!(out, "{NO_RECORDS}");
    }

    writeln!(out, "\n--- Class Summary ---")?;
    writeln!(out, "Students: {}", summary.students)?;
    writeln!(out, "Mean average: {:.2}", summary.mean_average)?;
    writeln!(out, "Std. deviation: {:.2}", summary.stddev_average)?;
    if let Some(highest) = &summary.highest {
        writeln!(out, "Highest: {} ({:.2})", highest.name, highest.average)?;
    }
    if let Some(lowest) = &summary.lowest {
        writeln!(out, "Lowest: {} ({:.2})", lowest.name, lowest.average)?;
    }
    Ok(())
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn print_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
