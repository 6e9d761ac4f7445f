//! Destinations for generated stylesheets.

use std::future::Future;
use std::path::Path;

use crate::FigmationResult;

/// Accepts a finished stylesheet and stores it at a path.
pub trait StylesheetSink {
	fn write(&self, path: &Path, contents: &str) -> impl Future<Output = FigmationResult<()>> + Send;
}

/// Writes stylesheets to the local filesystem, creating the parent directory
/// first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSink;

impl StylesheetSink for FileSink {
	async fn write(&self, path: &Path, contents: &str) -> FigmationResult<()> {
		if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(parent).await?;
		}

		tokio::fs::write(path, contents).await?;
		Ok(())
	}
}
