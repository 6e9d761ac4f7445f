//! The remote variable source and its Figma REST implementation.

use std::collections::BTreeMap;
use std::future::Future;

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::FigmationConfig;
use crate::FigmationError;
use crate::FigmationResult;
use crate::RawCollection;

/// Base URL of the public Figma REST API.
pub const DEFAULT_API_URL: &str = "https://api.figma.com/v1";

/// Header carrying a Figma personal access token.
pub const TOKEN_HEADER: &str = "X-Figma-Token";

/// Something that can provide the local variables of a design file, keyed by
/// collection id.
pub trait VariableSource {
	fn fetch_local_variables(
		&self,
	) -> impl Future<Output = FigmationResult<BTreeMap<String, RawCollection>>> + Send;
}

/// Name and modification time of a Figma file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
	pub name: String,
	pub last_modified: String,
}

#[derive(Debug, Deserialize)]
struct LocalVariablesResponse {
	meta: LocalVariablesMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocalVariablesMeta {
	#[serde(default)]
	variable_collections: BTreeMap<String, RawCollection>,
}

/// Client for the Figma REST API, bound to a single file.
#[derive(Debug, Clone)]
pub struct FigmaClient {
	http: reqwest::Client,
	base_url: String,
	access_token: String,
	file_id: String,
}

impl FigmaClient {
	pub fn new(access_token: impl Into<String>, file_id: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: DEFAULT_API_URL.to_string(),
			access_token: access_token.into(),
			file_id: file_id.into(),
		}
	}

	/// Build a client from configuration. Fails before any request is made
	/// when the token or file id is missing.
	pub fn from_config(config: &FigmationConfig) -> FigmationResult<Self> {
		let credentials = config.credentials()?;
		Ok(Self::new(credentials.access_token, credentials.file_id).with_base_url(config.api_url()))
	}

	/// Point the client at another API root, such as a proxy.
	#[must_use]
	pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
		self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
		self
	}

	/// Use a preconfigured HTTP client, for example one with custom timeouts
	/// or proxy settings.
	#[must_use]
	pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
		self.http = http;
		self
	}

	pub fn file_id(&self) -> &str {
		&self.file_id
	}

	/// Fetch the file's name and last modification timestamp.
	pub async fn fetch_file_info(&self) -> FigmationResult<FileInfo> {
		self.get_json(&format!("/files/{}", self.file_id)).await
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FigmationResult<T> {
		let url = format!("{}{path}", self.base_url);
		tracing::debug!(%url, "sending figma request");

		let response = self
			.http
			.get(&url)
			.header(TOKEN_HEADER, &self.access_token)
			.send()
			.await?;

		if response.status() == StatusCode::FORBIDDEN {
			return Err(FigmationError::InvalidAccessToken);
		}

		Ok(response.error_for_status()?.json::<T>().await?)
	}
}

impl VariableSource for FigmaClient {
	async fn fetch_local_variables(&self) -> FigmationResult<BTreeMap<String, RawCollection>> {
		tracing::info!(file_id = %self.file_id, "fetching variables from figma");

		let response: LocalVariablesResponse = self
			.get_json(&format!("/files/{}/variables/local", self.file_id))
			.await?;
		let collections = response.meta.variable_collections;

		let count: usize = collections.values().map(|c| c.variables.len()).sum();
		tracing::info!(count, collections = collections.len(), "fetched variables");

		Ok(collections)
	}
}
