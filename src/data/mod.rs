//! Data layer: core types, loading, and aggregation.
//!
//! Architecture:
//! ```text
//!  salaries.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Vec<RawRecord>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ SalaryDataset │  validated SalaryRecords + rejected rows
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ aggregate  │  per-year summaries, per-year job-title counts
//!   └───────────┘
//! ```

pub mod aggregate;
pub mod loader;
pub mod model;
pub mod sort;
