use std::cmp::Ordering;

use super::aggregate::{JobTitleCount, YearSummary};

// ---------------------------------------------------------------------------
// Summary table sorting
// ---------------------------------------------------------------------------

/// A sortable column of the year summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Year,
    TotalJobs,
    AvgSalary,
}

impl SortColumn {
    pub const ALL: [SortColumn; 3] = [
        SortColumn::Year,
        SortColumn::TotalJobs,
        SortColumn::AvgSalary,
    ];

    /// Column header text.
    pub fn title(self) -> &'static str {
        match self {
            SortColumn::Year => "Year",
            SortColumn::TotalJobs => "Total Jobs",
            SortColumn::AvgSalary => "Average Salary ($)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current ordering of the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarySort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SummarySort {
    fn default() -> Self {
        Self {
            column: SortColumn::Year,
            direction: SortDirection::Ascending,
        }
    }
}

impl SummarySort {
    /// Header click: a new column sorts ascending, the same column flips.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Arrow shown next to the header of `column`, if it is the sort column.
    pub fn indicator(&self, column: SortColumn) -> Option<&'static str> {
        (self.column == column).then_some(match self.direction {
            SortDirection::Ascending => "⏶",
            SortDirection::Descending => "⏷",
        })
    }

    /// Sort `summaries` in place.
    pub fn apply(&self, summaries: &mut [YearSummary]) {
        summaries.sort_by(|a, b| {
            let ord = match self.column {
                SortColumn::Year => compare_years(a, b),
                SortColumn::TotalJobs => a.total_jobs.cmp(&b.total_jobs),
                SortColumn::AvgSalary => a
                    .displayed_avg_salary()
                    .total_cmp(&b.displayed_avg_salary()),
            };
            // Ties fall back to chronological order.
            let ord = ord.then_with(|| compare_years(a, b));
            match self.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
}

/// Numeric year order.  Labels that are not integers sort after all
/// numeric ones, by text.
pub fn compare_years(a: &YearSummary, b: &YearSummary) -> Ordering {
    match (a.year_number(), b.year_number()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.year.cmp(&b.year),
    }
}

/// Summaries with an integer year, oldest first.  Used for the charts.
pub fn chronological(summaries: &[YearSummary]) -> Vec<(i64, &YearSummary)> {
    let mut points: Vec<(i64, &YearSummary)> = summaries
        .iter()
        .filter_map(|s| s.year_number().map(|y| (y, s)))
        .collect();
    points.sort_by_key(|(y, _)| *y);
    points
}

// ---------------------------------------------------------------------------
// Breakdown sorting
// ---------------------------------------------------------------------------

/// Most frequent titles first; equal counts by title.
pub fn sort_breakdown(entries: &mut [JobTitleCount]) {
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.jobname.cmp(&b.jobname)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(year: &str, total_jobs: usize, avg_salary: f64) -> YearSummary {
        YearSummary {
            year: year.to_string(),
            total_jobs,
            avg_salary,
        }
    }

    fn years(summaries: &[YearSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.year.as_str()).collect()
    }

    fn sample() -> Vec<YearSummary> {
        vec![
            summary("2021", 30, 120000.0),
            summary("999", 5, 90000.0),
            summary("2020", 10, 150000.0),
            summary("2022", 20, 100000.0),
        ]
    }

    #[test]
    fn year_sort_is_numeric_not_lexical() {
        let mut rows = sample();
        SummarySort::default().apply(&mut rows);
        assert_eq!(years(&rows), ["999", "2020", "2021", "2022"]);
    }

    #[test]
    fn non_numeric_years_sort_last() {
        let mut rows = vec![summary("unknown", 1, 1.0), summary("2020", 1, 1.0)];
        SummarySort::default().apply(&mut rows);
        assert_eq!(years(&rows), ["2020", "unknown"]);
    }

    #[test]
    fn toggling_same_column_flips_direction() {
        let mut sort = SummarySort::default();
        sort.toggle(SortColumn::TotalJobs);
        assert_eq!(sort.direction, SortDirection::Ascending);

        let mut rows = sample();
        sort.apply(&mut rows);
        assert_eq!(years(&rows), ["999", "2020", "2022", "2021"]);

        sort.toggle(SortColumn::TotalJobs);
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.apply(&mut rows);
        assert_eq!(years(&rows), ["2021", "2022", "2020", "999"]);
    }

    #[test]
    fn sorts_by_average_salary() {
        let mut sort = SummarySort::default();
        sort.toggle(SortColumn::AvgSalary);
        let mut rows = sample();
        sort.apply(&mut rows);
        assert_eq!(years(&rows), ["999", "2022", "2021", "2020"]);
        assert_eq!(sort.indicator(SortColumn::AvgSalary), Some("⏶"));
        assert_eq!(sort.indicator(SortColumn::Year), None);
    }

    #[test]
    fn equal_displayed_salaries_fall_back_to_year() {
        let mut sort = SummarySort::default();
        sort.toggle(SortColumn::AvgSalary);
        let mut rows = vec![
            summary("2021", 1, 100.001),
            summary("2020", 1, 100.004),
            summary("2019", 1, 99.999),
        ];
        sort.apply(&mut rows);
        assert_eq!(years(&rows), ["2019", "2020", "2021"]);
    }

    #[test]
    fn chronological_skips_non_numeric_years() {
        let mut rows = sample();
        rows.push(summary("n/a", 1, 1.0));
        let points = chronological(&rows);
        let xs: Vec<i64> = points.iter().map(|(y, _)| *y).collect();
        assert_eq!(xs, [999, 2020, 2021, 2022]);
    }

    #[test]
    fn breakdown_sorted_by_count_then_title() {
        let entry = |name: &str, count| JobTitleCount {
            jobname: name.to_string(),
            count,
        };
        let mut entries = vec![entry("B", 1), entry("C", 3), entry("A", 1)];
        sort_breakdown(&mut entries);
        let names: Vec<&str> = entries.iter().map(|e| e.jobname.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
