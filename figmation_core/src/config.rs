use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DEFAULT_MODE;
use crate::FigmationError;
use crate::FigmationResult;
use crate::source::DEFAULT_API_URL;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["figmation.toml", ".figmation.toml", ".config/figmation.toml"];

/// Environment variable holding the Figma access token.
pub const ACCESS_TOKEN_ENV: &str = "FIGMA_ACCESS_TOKEN";
/// Environment variable holding the Figma file id.
pub const FILE_ID_ENV: &str = "FIGMA_FILE_ID";

pub const DEFAULT_OUTPUT_PATH: &str = "./";
pub const DEFAULT_FILENAME: &str = "variables.css";

/// Configuration loaded from a `figmation.toml` file.
///
/// ```toml
/// [figma]
/// access_token = "figd_..."
/// file_id = "AbCdEf123"
///
/// [output]
/// path = "styles"
/// filename = "tokens.css"
/// mode = "Dark"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FigmationConfig {
	/// Credentials and endpoint for the Figma API.
	#[serde(default)]
	pub figma: FigmaConfig,
	/// Where and how the stylesheet is written.
	#[serde(default)]
	pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FigmaConfig {
	/// Personal access token. Prefer `FIGMA_ACCESS_TOKEN` over committing this.
	#[serde(default)]
	pub access_token: Option<String>,
	/// The key of the design file, as found in its URL.
	#[serde(default)]
	pub file_id: Option<String>,
	/// Overrides the API root. Defaults to the public Figma API.
	#[serde(default)]
	pub api_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
	/// Directory the stylesheet is written into. Created when missing.
	#[serde(default = "default_output_path")]
	pub path: PathBuf,
	#[serde(default = "default_filename")]
	pub filename: String,
	/// Mode whose values are emitted, by mode id or mode name.
	#[serde(default = "default_mode")]
	pub mode: String,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			path: default_output_path(),
			filename: default_filename(),
			mode: default_mode(),
		}
	}
}

fn default_output_path() -> PathBuf {
	PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_filename() -> String {
	DEFAULT_FILENAME.to_string()
}

fn default_mode() -> String {
	DEFAULT_MODE.to_string()
}

/// A validated access token and file id pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
	pub access_token: String,
	pub file_id: String,
}

impl FigmationConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no file exists.
	pub fn load(root: &Path) -> FigmationResult<Option<FigmationConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: FigmationConfig =
			toml::from_str(&content).map_err(|e| FigmationError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %config_path.display(), "loaded config");
		Ok(Some(config))
	}

	/// Apply `FIGMA_ACCESS_TOKEN` and `FIGMA_FILE_ID` from the process
	/// environment.
	#[must_use]
	pub fn with_env_overrides(self) -> Self {
		self.with_overrides_from(|key| std::env::var(key).ok())
	}

	/// Apply credential overrides from an arbitrary lookup. Empty values are
	/// ignored.
	#[must_use]
	pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
		if let Some(token) = lookup(ACCESS_TOKEN_ENV).filter(|v| !v.is_empty()) {
			self.figma.access_token = Some(token);
		}
		if let Some(file_id) = lookup(FILE_ID_ENV).filter(|v| !v.is_empty()) {
			self.figma.file_id = Some(file_id);
		}
		self
	}

	/// The access token and file id, or a configuration error naming what is
	/// missing.
	pub fn credentials(&self) -> FigmationResult<Credentials> {
		let non_empty = |value: Option<&str>| {
			value
				.filter(|v| !v.trim().is_empty())
				.map(str::to_string)
		};
		let access_token = non_empty(self.figma.access_token.as_deref());
		let file_id = non_empty(self.figma.file_id.as_deref());

		match (access_token, file_id) {
			(Some(access_token), Some(file_id)) => Ok(Credentials { access_token, file_id }),
			(token, file) => {
				let missing = [
					token.is_none().then_some("access token"),
					file.is_none().then_some("file id"),
				]
				.into_iter()
				.flatten()
				.collect::<Vec<_>>()
				.join(", ");
				Err(FigmationError::MissingCredentials { missing })
			}
		}
	}

	pub fn api_url(&self) -> &str {
		self.figma
			.api_url
			.as_deref()
			.filter(|url| !url.is_empty())
			.unwrap_or(DEFAULT_API_URL)
	}

	/// The full path of the stylesheet, relative to the working directory.
	pub fn output_file(&self) -> PathBuf {
		self.output.path.join(&self.output.filename)
	}
}
