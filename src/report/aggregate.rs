use crate::record::{StudentRecord, average};
use crate::report::types::{ClassSummary, StudentAverage};
use crate::report::utility::{mean, stddev};

/// Returns the record with the highest average grade.
///
/// Ties go to the record that comes first. Returns `None` for an empty slice.
pub fn top_by_average(records: &[StudentRecord]) -> Option<&StudentRecord> {
    pick_by_average(records, |candidate, best| candidate > best)
}

fn bottom_by_average(records: &[StudentRecord]) -> Option<&StudentRecord> {
    pick_by_average(records, |candidate, best| candidate < best)
}

// Replaces the current pick only on a strict win, so the first record wins ties.
fn pick_by_average(
    records: &[StudentRecord],
    beats: impl Fn(f64, f64) -> bool,
) -> Option<&StudentRecord> {
    let mut iter = records.iter();
    let mut best = iter.next()?;
    let mut best_avg = average(best);

    for record in iter {
        let avg = average(record);
        if beats(avg, best_avg) {
            best = record;
            best_avg = avg;
        }
    }

    Some(best)
}

/// Summarizes the averages of `records`: count, mean, spread, and extremes.
pub fn summarize(records: &[StudentRecord]) -> ClassSummary {
    let averages: Vec<f64> = records.iter().map(average).collect();
    let mean_average = mean(&averages);

    let entry = |record: &StudentRecord| StudentAverage {
        name: record.name().to_string(),
        average: average(record),
    };

    ClassSummary {
        students: records.len(),
        mean_average,
        stddev_average: stddev(&averages, mean_average),
        highest: top_by_average(records).map(entry),
        lowest: bottom_by_average(records).map(entry),
    }
}
