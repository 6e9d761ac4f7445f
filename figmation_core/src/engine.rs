use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use crate::FigmationConfig;
use crate::FigmationResult;
use crate::NormalizedVariable;
use crate::RawCollection;
use crate::format::format_variable_name;
use crate::format::format_variable_value;
use crate::format::slugify;
use crate::grouping::group_variables;
use crate::normalize_collections;
use crate::sink::FileSink;
use crate::sink::StylesheetSink;
use crate::source::FigmaClient;
use crate::source::VariableSource;

/// The mode name used when no specific mode is requested. It matches no
/// per-mode value, so each variable's resolved default value is emitted.
pub const DEFAULT_MODE: &str = "default";

/// Options for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
	/// Mode id or mode name whose values should be emitted.
	pub mode: String,
	/// Path of the stylesheet to write.
	pub output: PathBuf,
}

impl GenerateOptions {
	pub fn new(mode: impl Into<String>, output: impl Into<PathBuf>) -> Self {
		Self {
			mode: mode.into(),
			output: output.into(),
		}
	}

	/// Options derived from the `[output]` section of a config.
	pub fn from_config(config: &FigmationConfig) -> Self {
		Self::new(config.output.mode.clone(), config.output_file())
	}
}

/// Summary of a written stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
	pub path: PathBuf,
	pub mode: String,
	/// Number of variables handed to the generator, hidden ones included.
	pub variable_count: usize,
	/// Number of declarations in the stylesheet.
	pub emitted_count: usize,
}

/// A rendered stylesheet and the number of declarations it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
	pub css: String,
	pub declarations: usize,
}

/// Render variables as a `:root` block of CSS custom properties.
///
/// Hidden variables are dropped before grouping. Each category gets a
/// comment header, and declarations with no value for `mode` are skipped.
pub fn generate_css(variables: &[NormalizedVariable], mode: &str) -> String {
	render_stylesheet(variables, mode).css
}

/// Like [`generate_css`], also reporting how many declarations were written.
pub fn render_stylesheet(variables: &[NormalizedVariable], mode: &str) -> Stylesheet {
	let groups = group_variables(variables.iter().filter(|variable| !variable.hidden));
	let mut declarations = 0;

	let blocks: Vec<String> = groups
		.iter()
		.map(|group| {
			let mut block = format!("  /* {} */", group.name);
			for variable in &group.variables {
				let Some(value) = format_variable_value(variable.value_for_mode(mode), variable.scope)
				else {
					continue;
				};
				let name = format_variable_name(&variable.name, variable.scope);
				block.push_str(&format!("\n  {name}: {value};"));
				declarations += 1;
			}
			block
		})
		.collect();

	let css = if blocks.is_empty() {
		":root {\n}".to_string()
	} else {
		format!(":root {{\n{}\n}}", blocks.join("\n\n"))
	};

	tracing::debug!(groups = groups.len(), declarations, %mode, "rendered stylesheet");
	Stylesheet { css, declarations }
}

/// Render the stylesheet for `mode` and hand it to `sink`.
pub async fn write_css<W: StylesheetSink>(
	variables: &[NormalizedVariable],
	mode: &str,
	path: &Path,
	sink: &W,
) -> FigmationResult<GenerateReport> {
	let stylesheet = render_stylesheet(variables, mode);
	sink.write(path, &stylesheet.css).await?;

	tracing::info!(
		path = %path.display(),
		declarations = stylesheet.declarations,
		"stylesheet written"
	);

	Ok(GenerateReport {
		path: path.to_path_buf(),
		mode: mode.to_string(),
		variable_count: variables.len(),
		emitted_count: stylesheet.declarations,
	})
}

/// Fetch, normalize, render, and write in one pass.
pub async fn generate_from_source<S: VariableSource, W: StylesheetSink>(
	source: &S,
	sink: &W,
	options: &GenerateOptions,
) -> FigmationResult<GenerateReport> {
	let collections = source.fetch_local_variables().await?;
	let variables = normalize_collections(&collections);
	write_css(&variables, &options.mode, &options.output, sink).await
}

/// Write one stylesheet per mode name declared by the collections, next to
/// `base_output`. See [`output_path_for_mode`].
pub async fn generate_all_modes<S: VariableSource, W: StylesheetSink>(
	source: &S,
	sink: &W,
	base_output: &Path,
) -> FigmationResult<Vec<GenerateReport>> {
	let collections = source.fetch_local_variables().await?;
	let variables = normalize_collections(&collections);
	let mut reports = Vec::new();

	for mode in mode_names(&collections) {
		let path = output_path_for_mode(base_output, &mode);
		reports.push(write_css(&variables, &mode, &path, sink).await?);
	}

	Ok(reports)
}

/// Run the whole pipeline against the Figma API using `config` for
/// credentials and writing to the local filesystem.
///
/// Missing credentials are reported before any network request.
pub async fn generate_from_config(
	config: &FigmationConfig,
	options: &GenerateOptions,
) -> FigmationResult<GenerateReport> {
	let client = FigmaClient::from_config(config)?;
	generate_from_source(&client, &FileSink, options).await
}

/// Distinct mode names across all collections, sorted.
pub fn mode_names(collections: &BTreeMap<String, RawCollection>) -> Vec<String> {
	collections
		.values()
		.flat_map(|collection| collection.modes.iter().map(|mode| mode.name.clone()))
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect()
}

/// The stylesheet path for a mode. The default mode keeps `base`, any other
/// mode is inserted before the extension: `variables.css` with `Dark Mode`
/// becomes `variables.dark-mode.css`.
pub fn output_path_for_mode(base: &Path, mode: &str) -> PathBuf {
	if mode == DEFAULT_MODE {
		return base.to_path_buf();
	}

	let stem = base
		.file_stem()
		.map_or_else(|| "variables".into(), |stem| stem.to_string_lossy());
	let extension = base
		.extension()
		.map_or_else(|| "css".into(), |ext| ext.to_string_lossy());

	base.with_file_name(format!("{stem}.{}.{extension}", slugify(mode)))
}
