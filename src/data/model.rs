use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// RawRecord – one CSV row, untyped
// ---------------------------------------------------------------------------

/// A single row of the salary CSV, exactly as read.  No coercion happens
/// here; every value is the cell text.  Descriptive columns that the
/// aggregation never reads are `""` when the header lacks them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub work_year: String,
    pub job_title: String,
    pub salary_in_usd: String,
    pub details: RecordDetails,
}

/// Descriptive columns carried with each row.  Nothing aggregates them; they
/// are passed through to record exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordDetails {
    pub company_location: String,
    pub company_size: String,
    pub employee_residence: String,
    pub employment_type: String,
    pub experience_level: String,
    pub remote_ratio: String,
    pub salary: String,
    pub salary_currency: String,
}

// ---------------------------------------------------------------------------
// SalaryRecord – a validated row
// ---------------------------------------------------------------------------

/// Why a [`RawRecord`] was refused at ingestion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("salary_in_usd '{value}' is not a number")]
    InvalidSalary { value: String },
    #[error("salary_in_usd '{value}' is not a finite number")]
    NonFiniteSalary { value: String },
}

/// A row whose salary has been parsed.  `work_year` stays a string: it is
/// only ever used as a grouping key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRecord {
    pub work_year: String,
    pub job_title: String,
    pub salary_in_usd: f64,
    #[serde(flatten)]
    pub details: RecordDetails,
}

impl TryFrom<RawRecord> for SalaryRecord {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let text = raw.salary_in_usd.trim();
        let salary_in_usd: f64 = text.parse().map_err(|_| RecordError::InvalidSalary {
            value: raw.salary_in_usd.clone(),
        })?;
        // "NaN" and "inf" parse fine as f64 and would poison a year's sum.
        if !salary_in_usd.is_finite() {
            return Err(RecordError::NonFiniteSalary {
                value: raw.salary_in_usd,
            });
        }

        Ok(SalaryRecord {
            work_year: raw.work_year,
            job_title: raw.job_title,
            salary_in_usd,
            details: raw.details,
        })
    }
}

// ---------------------------------------------------------------------------
// SalaryDataset – the loaded working set
// ---------------------------------------------------------------------------

/// A CSV row that failed validation.  `row` is 1-based and counts data rows
/// only (the header is not a row).
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    pub row: usize,
    pub error: RecordError,
}

impl fmt::Display for RejectedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row, self.error)
    }
}

/// The full validated dataset.  Immutable once built; a new load replaces
/// it entirely.
#[derive(Debug, Clone, Default)]
pub struct SalaryDataset {
    /// Where the rows came from.
    pub source: PathBuf,
    /// Accepted rows, in file order.
    pub records: Vec<SalaryRecord>,
    /// Rows excluded from aggregation.
    pub rejected: Vec<RejectedRow>,
}

impl SalaryDataset {
    /// Validate every raw row.  Rows with a malformed salary are dropped
    /// from the working set and remembered in `rejected`.
    pub fn from_raw(source: impl Into<PathBuf>, raw: Vec<RawRecord>) -> Self {
        let mut records = Vec::with_capacity(raw.len());
        let mut rejected = Vec::new();

        for (i, row) in raw.into_iter().enumerate() {
            match SalaryRecord::try_from(row) {
                Ok(record) => records.push(record),
                Err(error) => {
                    let rejected_row = RejectedRow { row: i + 1, error };
                    log::warn!("Skipping {rejected_row}");
                    rejected.push(rejected_row);
                }
            }
        }

        SalaryDataset {
            source: source.into(),
            records,
            rejected,
        }
    }

    /// Number of accepted records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(year: &str, salary: &str, title: &str) -> RawRecord {
        RawRecord {
            work_year: year.to_string(),
            job_title: title.to_string(),
            salary_in_usd: salary.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_valid_salary() {
        let record = SalaryRecord::try_from(raw("2022", " 123456.5 ", "Analyst")).unwrap();
        assert_eq!(record.work_year, "2022");
        assert_eq!(record.job_title, "Analyst");
        assert_eq!(record.salary_in_usd, 123456.5);
    }

    #[test]
    fn rejects_non_numeric_salary() {
        let err = SalaryRecord::try_from(raw("2022", "N/A", "Analyst")).unwrap_err();
        assert_eq!(
            err,
            RecordError::InvalidSalary {
                value: "N/A".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_salary() {
        let err = SalaryRecord::try_from(raw("2022", "", "Analyst")).unwrap_err();
        assert!(matches!(err, RecordError::InvalidSalary { .. }));
    }

    #[test]
    fn rejects_nan_and_infinity() {
        for text in ["NaN", "inf", "-infinity"] {
            let err = SalaryRecord::try_from(raw("2022", text, "Analyst")).unwrap_err();
            assert!(
                matches!(err, RecordError::NonFiniteSalary { .. }),
                "{text} should be non-finite"
            );
        }
    }

    #[test]
    fn dataset_keeps_order_and_reports_rejections() {
        let ds = SalaryDataset::from_raw(
            "salaries.csv",
            vec![
                raw("2020", "100", "A"),
                raw("2020", "oops", "B"),
                raw("2021", "300", "C"),
            ],
        );

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].job_title, "A");
        assert_eq!(ds.records[1].job_title, "C");
        assert_eq!(ds.rejected.len(), 1);
        assert_eq!(ds.rejected[0].row, 2);
        assert_eq!(
            ds.rejected[0].to_string(),
            "row 2: salary_in_usd 'oops' is not a number"
        );
    }

    #[test]
    fn empty_year_is_kept_at_ingestion() {
        let ds = SalaryDataset::from_raw("s.csv", vec![raw("", "10", "A")]);
        assert_eq!(ds.len(), 1);
        assert!(ds.rejected.is_empty());
    }
}
