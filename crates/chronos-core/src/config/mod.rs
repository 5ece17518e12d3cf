//! # Configuration System
//!
//! Hierarchical TOML configuration for Chronos.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.chronos/config.toml` (or `$CHRONOS_HOME/config.toml`)
//! 3. **Project config** - `./.chronos/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.chronos/config.toml
//! [display]
//! skin = "nixie"
//! theme = "light"
//! color = true
//!
//! [refresh]
//! interval_ms = 1000
//! reload_secs = 2
//!
//! [dashboard]
//! date_format = "%A, %B %-d %Y"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use chronos_core::config::ChronosConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ChronosConfig::load_hierarchy()?;
//!     let interval = config.refresh.interval();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ChronosConfig, DashboardConfig, DisplayConfig, RefreshConfig};
pub use validation::validate_config;

impl ChronosConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
