//! Options of one tree build.
//!
//! All ages and ranking keys of a run are computed against the same
//! reference date, captured once when the [BuildOptions] are created.

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

/// Average length of a year, used to turn elapsed days into ages.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Default number of fraction digits of an age label.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

/// Where the visualization front end loads its data from.
pub const DEFAULT_OUTPUT_PATH: &str = "web/archdale.js";

// =#========================================================================#=
// BUILD OPTIONS
// =#========================================================================#=
/// Configuration of a tree build.
///
/// # Defaults
/// * `today` - the local date at construction
/// * `max_fraction_digits` - [DEFAULT_MAX_FRACTION_DIGITS]
/// * `output_path` - [DEFAULT_OUTPUT_PATH]
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use gedwick::config::BuildOptions;
///
/// let options = BuildOptions::new()
///     .with_today(NaiveDate::from_ymd_opt(2012, 10, 22).unwrap())
///     .with_max_fraction_digits(1)
///     .with_output_path("out/tree.js");
///
/// assert_eq!(options.today().to_string(), "2012-10-22");
/// assert_eq!(options.max_fraction_digits(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    today: NaiveDate,
    max_fraction_digits: usize,
    output_path: PathBuf,
}

impl BuildOptions {
    /// Creates options with defaults, capturing today's local date.
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Fixes the reference date ages are computed against.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Sets the maximum number of fraction digits of age labels.
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Sets the path the userdata script is written to.
    pub fn with_output_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new()
    }
}
