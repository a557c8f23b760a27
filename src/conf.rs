//! Application settings
//!
//! Small, environment-driven configuration. Every setting has a default so a
//! bare environment runs unchanged.

use std::env;

/// Runtime settings for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Brand name shown in the page header
	pub app_name: String,
	/// Override for the calendar year used in age derivation; `None` means
	/// the current UTC year
	pub age_reference_year: Option<i32>,
}

impl Settings {
	pub const DEFAULT_APP_NAME: &'static str = "VforVivah";

	/// Read settings from the environment
	///
	/// - `VIVAH_APP_NAME`: header brand (default `"VforVivah"`)
	/// - `VIVAH_AGE_REFERENCE_YEAR`: fixed age-derivation year; unset or
	///   non-numeric values fall back to the current year
	///
	/// # Examples
	///
	/// ```
	/// use vivah::conf::Settings;
	///
	/// let settings = Settings::from_env();
	/// assert!(!settings.app_name.is_empty());
	/// ```
	pub fn from_env() -> Self {
		let app_name = env::var("VIVAH_APP_NAME")
			.ok()
			.filter(|name| !name.trim().is_empty())
			.unwrap_or_else(|| Self::DEFAULT_APP_NAME.to_string());
		let age_reference_year = env::var("VIVAH_AGE_REFERENCE_YEAR")
			.ok()
			.and_then(|raw| raw.trim().parse().ok());
		Self {
			app_name,
			age_reference_year,
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			app_name: Self::DEFAULT_APP_NAME.to_string(),
			age_reference_year: None,
		}
	}
}
