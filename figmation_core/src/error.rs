use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum FigmationError {
	#[error(transparent)]
	#[diagnostic(code(figmation::io_error))]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	#[diagnostic(code(figmation::http_error))]
	Http(#[from] reqwest::Error),

	#[error("Invalid Figma access token or insufficient permissions")]
	#[diagnostic(
		code(figmation::invalid_access_token),
		help("generate a new personal access token with the `file_variables:read` scope")
	)]
	InvalidAccessToken,

	#[error("Figma access token and file ID are required (missing: {missing})")]
	#[diagnostic(
		code(figmation::missing_credentials),
		help(
			"set them in the [figma] section of figmation.toml, or via FIGMA_ACCESS_TOKEN and \
			 FIGMA_FILE_ID"
		)
	)]
	MissingCredentials { missing: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(figmation::config_parse),
		help("check that figmation.toml is valid TOML with [figma] and/or [output] sections")
	)]
	ConfigParse(String),
}

pub type FigmationResult<T> = Result<T, FigmationError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
