//! Filter configuration.

use texgrid_input::DEFAULT_MAX_LINE_BYTES;
use texgrid_render::DEFAULT_ENVIRONMENT;

/// Default maximum number of collected entries.
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Limits and output settings for one filter run.
///
/// ```
/// use texgrid::Config;
///
/// let config = Config::default().environment("bmatrix").max_entries(16);
/// assert_eq!(config.max_line_bytes, 2048);
/// assert_eq!(config.max_entries, 16);
/// assert_eq!(config.environment, "bmatrix");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum content bytes of a single input line.
    pub max_line_bytes: usize,
    /// Maximum number of entries before the run fails.
    pub max_entries: usize,
    /// Name of the LaTeX environment wrapped around the grid.
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
            max_entries: DEFAULT_MAX_ENTRIES,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl Config {
    /// Set the per-line byte cap.
    pub fn max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }

    /// Set the maximum entry count.
    pub fn max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Set the environment name.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }
}
