//! Data types produced by the aggregate queries.

use serde::Serialize;

/// Name and average of one record, as reported in a summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAverage {
    pub name: String,
    pub average: f64,
}

/// Statistics over the averages of every stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassSummary {
    pub students: usize,
    pub mean_average: f64,
    pub stddev_average: f64,
    pub highest: Option<StudentAverage>,
    pub lowest: Option<StudentAverage>,
}
