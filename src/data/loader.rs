use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{RawRecord, RecordDetails, SalaryDataset};

/// The file is readable CSV but cannot be summarised.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("CSV missing '{0}' column")]
    MissingColumn(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and validate the salary dataset at `path`.
pub fn load_dataset(path: &Path) -> Result<SalaryDataset> {
    let raw = load_file(path)?;
    Ok(SalaryDataset::from_raw(path, raw))
}

/// Read every row of a salary CSV file, in file order.
pub fn load_file(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_records(file).with_context(|| format!("reading {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Header positions of the known columns.  Optional columns are `None` when
/// the header does not name them.
struct ColumnIndex {
    work_year: usize,
    job_title: usize,
    salary_in_usd: usize,
    company_location: Option<usize>,
    company_size: Option<usize>,
    employee_residence: Option<usize>,
    employment_type: Option<usize>,
    experience_level: Option<usize>,
    remote_ratio: Option<usize>,
    salary: Option<usize>,
    salary_currency: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require =
            |name: &str| find(name).ok_or_else(|| LoadError::MissingColumn(name.to_string()));

        Ok(ColumnIndex {
            work_year: require("work_year")?,
            job_title: require("job_title")?,
            salary_in_usd: require("salary_in_usd")?,
            company_location: find("company_location"),
            company_size: find("company_size"),
            employee_residence: find("employee_residence"),
            employment_type: find("employment_type"),
            experience_level: find("experience_level"),
            remote_ratio: find("remote_ratio"),
            salary: find("salary"),
            salary_currency: find("salary_currency"),
        })
    }

    fn build(&self, record: &csv::StringRecord) -> RawRecord {
        let cell = |idx: usize| record.get(idx).unwrap_or("").to_string();
        let optional = |idx: Option<usize>| idx.map(cell).unwrap_or_default();

        RawRecord {
            work_year: cell(self.work_year),
            job_title: cell(self.job_title),
            salary_in_usd: cell(self.salary_in_usd),
            details: RecordDetails {
                company_location: optional(self.company_location),
                company_size: optional(self.company_size),
                employee_residence: optional(self.employee_residence),
                employment_type: optional(self.employment_type),
                experience_level: optional(self.experience_level),
                remote_ratio: optional(self.remote_ratio),
                salary: optional(self.salary),
                salary_currency: optional(self.salary_currency),
            },
        }
    }
}

/// CSV layout: header row with column names, one salary record per row.
/// Fields are looked up by header name, so column order does not matter.
/// Values are kept as text; short rows yield `""` for missing cells.
pub fn read_records<R: Read>(source: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        records.push(columns.build(&record));
    }

    log::debug!("Parsed {} rows with columns {:?}", records.len(), headers);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "work_year,experience_level,employment_type,job_title,salary,\
salary_currency,salary_in_usd,employee_residence,remote_ratio,company_location,company_size";

    #[test]
    fn reads_rows_by_header_name() {
        let csv = format!(
            "{HEADER}\n\
             2020,SE,FT,Engineer,90000,EUR,100000,DE,100,DE,M\n\
             2021,MI,PT,Manager,200000,USD,200000,US,0,US,L\n"
        );
        let rows = read_records(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            RawRecord {
                work_year: "2020".into(),
                job_title: "Engineer".into(),
                salary_in_usd: "100000".into(),
                details: RecordDetails {
                    company_location: "DE".into(),
                    company_size: "M".into(),
                    employee_residence: "DE".into(),
                    employment_type: "FT".into(),
                    experience_level: "SE".into(),
                    remote_ratio: "100".into(),
                    salary: "90000".into(),
                    salary_currency: "EUR".into(),
                },
            }
        );
        assert_eq!(rows[1].job_title, "Manager");
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "salary_in_usd,job_title,work_year\n150000,Engineer,2021\n";
        let rows = read_records(csv.as_bytes()).unwrap();

        assert_eq!(rows[0].work_year, "2021");
        assert_eq!(rows[0].job_title, "Engineer");
        assert_eq!(rows[0].salary_in_usd, "150000");
        assert_eq!(rows[0].details, RecordDetails::default());
    }

    #[test]
    fn keeps_file_order_and_duplicates() {
        let csv = "work_year,job_title,salary_in_usd\n\
                   2022,B,1\n\
                   2020,A,2\n\
                   2022,B,1\n";
        let rows = read_records(csv.as_bytes()).unwrap();
        let years: Vec<&str> = rows.iter().map(|r| r.work_year.as_str()).collect();
        assert_eq!(years, ["2022", "2020", "2022"]);
        assert_eq!(rows[0], rows[2]);
    }

    #[test]
    fn values_are_not_coerced() {
        let csv = "work_year,job_title,salary_in_usd\n2020,Engineer,N/A\n,,\n";
        let rows = read_records(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].salary_in_usd, "N/A");
        assert_eq!(rows[1].work_year, "");
    }

    #[test]
    fn short_rows_fill_with_empty_strings() {
        let csv = "work_year,job_title,salary_in_usd\n2020,Engineer\n";
        let rows = read_records(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].job_title, "Engineer");
        assert_eq!(rows[0].salary_in_usd, "");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "work_year,job_title\n2020,Engineer\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        match err.downcast_ref::<LoadError>() {
            Some(LoadError::MissingColumn(col)) => assert_eq!(col, "salary_in_usd"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_file(Path::new("definitely/not/here/salaries.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("opening CSV"));
    }

    #[test]
    fn load_dataset_validates_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("salaries.csv");
        std::fs::write(
            &path,
            "work_year,job_title,salary_in_usd\n2020,A,100\n2020,B,N/A\n",
        )
        .unwrap();

        let ds = load_dataset(&path).unwrap();

        assert_eq!(ds.source, path);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rejected.len(), 1);
    }
}
