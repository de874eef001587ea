use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::model::SalaryRecord;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Job count and mean salary for one `work_year`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub year: String,
    pub total_jobs: usize,
    /// Serialised as a fixed two-decimal string, e.g. `"150000.00"`.
    #[serde(serialize_with = "two_decimals")]
    pub avg_salary: f64,
}

impl YearSummary {
    /// The average salary as shown to users: exactly two decimals.
    pub fn avg_salary_text(&self) -> String {
        fixed_two_decimals(self.avg_salary)
    }

    /// The average salary at the precision shown, for sorting.
    pub fn displayed_avg_salary(&self) -> f64 {
        self.avg_salary_text().parse().unwrap_or(self.avg_salary)
    }

    /// The year as an integer, when it is one.
    pub fn year_number(&self) -> Option<i64> {
        self.year.trim().parse().ok()
    }
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&fixed_two_decimals(*value))
}

/// Format with two decimals, rounding an exact half cent away from zero.
///
/// `{:.2}` rounds the exact binary value, sending ties to even.  A tie at
/// the third decimal is only representable as a multiple of 1/8 with an odd
/// numerator; there `value * 100` is exact and `round` picks the far side.
pub fn fixed_two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        let cents = (value * 100.0).round();
        return format!("{:.2}", cents / 100.0);
    }
    format!("{value:.2}")
}

/// How many records of a year carry one job title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobTitleCount {
    pub jobname: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Year summary
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct YearAccumulator {
    count: usize,
    salary_sum: f64,
}

/// Group `records` by `work_year` and compute the job count and mean salary
/// of each group.  Records with an empty `work_year` are not summarised.
///
/// Callers must not rely on the output order; sort at the point of display.
pub fn summarize(records: &[SalaryRecord]) -> Vec<YearSummary> {
    let mut groups: BTreeMap<&str, YearAccumulator> = BTreeMap::new();

    for record in records {
        let acc = groups.entry(record.work_year.as_str()).or_default();
        acc.count += 1;
        acc.salary_sum += record.salary_in_usd;
    }

    groups
        .into_iter()
        .filter(|(year, _)| !year.is_empty())
        .map(|(year, acc)| YearSummary {
            year: year.to_string(),
            total_jobs: acc.count,
            avg_salary: acc.salary_sum / acc.count.max(1) as f64,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Job-title breakdown
// ---------------------------------------------------------------------------

/// Count job titles among the records whose `work_year` is exactly `year`.
/// An empty title is a group like any other.
pub fn breakdown_by_year(records: &[SalaryRecord], year: &str) -> Vec<JobTitleCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for record in records_for_year(records, year) {
        *counts.entry(record.job_title.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(title, count)| JobTitleCount {
            jobname: title.to_string(),
            count,
        })
        .collect()
}

/// The records whose `work_year` is exactly `year`, in file order.
pub fn records_for_year<'a>(records: &'a [SalaryRecord], year: &str) -> Vec<&'a SalaryRecord> {
    records.iter().filter(|r| r.work_year == year).collect()
}
