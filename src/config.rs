use std::path::PathBuf;

/// Dataset read at startup when no path is given on the command line.
pub const DEFAULT_DATASET: &str = "salaries.csv";

/// Startup settings.  The only knob is where the CSV lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
        }
    }
}

impl DashboardConfig {
    /// Build from process arguments (program name first, as in
    /// `std::env::args`).  The first argument, if any, is the dataset path.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        args.into_iter()
            .nth(1)
            .filter(|arg| !arg.trim().is_empty())
            .map(|path| Self {
                dataset_path: PathBuf::from(path),
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_salaries_csv() {
        let config = DashboardConfig::from_args(args(&["salary-dashboard"]));
        assert_eq!(config.dataset_path, PathBuf::from("salaries.csv"));
    }

    #[test]
    fn first_argument_is_the_dataset() {
        let config =
            DashboardConfig::from_args(args(&["salary-dashboard", "data/ds.csv", "extra"]));
        assert_eq!(config.dataset_path, PathBuf::from("data/ds.csv"));
    }

    #[test]
    fn blank_argument_falls_back_to_default() {
        let config = DashboardConfig::from_args(args(&["salary-dashboard", "  "]));
        assert_eq!(config, DashboardConfig::default());
    }
}
