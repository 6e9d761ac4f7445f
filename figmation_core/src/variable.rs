use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::DEFAULT_MODE;
use crate::VariableScope;

/// A variable value as it appears after normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum VariableValue {
	Text(String),
	Number(f64),
	#[default]
	Absent,
}

impl VariableValue {
	/// Returns true when there is nothing to emit for this value.
	pub fn is_absent(&self) -> bool {
		match self {
			Self::Text(text) => text.trim().is_empty(),
			Self::Number(_) => false,
			Self::Absent => true,
		}
	}

	/// Convert a raw JSON value from the Figma API.
	///
	/// Strings and numbers map directly, booleans become their literal text,
	/// and colour objects (`{ r, g, b, a }` with channels in `0..=1`) become a
	/// hex string. Anything else, including variable aliases, is absent.
	pub fn from_json(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::String(text) => Self::Text(text.clone()),
			serde_json::Value::Number(number) => {
				number.as_f64().map_or(Self::Absent, Self::Number)
			}
			serde_json::Value::Bool(flag) => Self::Text(flag.to_string()),
			serde_json::Value::Object(map) => rgba_to_hex(map).map_or(Self::Absent, Self::Text),
			serde_json::Value::Null | serde_json::Value::Array(_) => Self::Absent,
		}
	}
}

impl fmt::Display for VariableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Number(number) => write!(f, "{number}"),
			Self::Absent => Ok(()),
		}
	}
}

impl From<&str> for VariableValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for VariableValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<f64> for VariableValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

fn rgba_to_hex(map: &serde_json::Map<String, serde_json::Value>) -> Option<String> {
	let channel = |key: &str| map.get(key).and_then(serde_json::Value::as_f64);
	let (r, g, b) = (channel("r")?, channel("g")?, channel("b")?);
	let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;

	let mut hex = format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b));
	if let Some(alpha) = channel("a").filter(|a| *a < 1.0) {
		hex.push_str(&format!("{:02x}", to_byte(alpha)));
	}

	Some(hex)
}

/// A variable exactly as returned by the Figma variables endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVariable {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub scopes: Vec<String>,
	#[serde(default)]
	pub hidden_from_publishing: Option<bool>,
	#[serde(default)]
	pub values_by_mode: BTreeMap<String, serde_json::Value>,
	/// A value already resolved by the caller, used when the default mode has
	/// no entry.
	#[serde(default)]
	pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMode {
	pub mode_id: String,
	pub name: String,
}

/// A variable collection: a set of variables sharing modes and a default mode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub default_mode_id: String,
	#[serde(default)]
	pub modes: Vec<RawMode>,
	#[serde(default)]
	pub variables: Vec<RawVariable>,
}

/// The canonical form of a variable used for CSS generation.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedVariable {
	pub id: String,
	pub name: String,
	pub scope: VariableScope,
	pub value: VariableValue,
	/// Per-mode values keyed by mode id and, where the collection declares
	/// it, by mode name.
	pub values_by_mode: BTreeMap<String, VariableValue>,
	pub hidden: bool,
}

impl NormalizedVariable {
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		scope: VariableScope,
		value: impl Into<VariableValue>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			scope,
			value: value.into(),
			values_by_mode: BTreeMap::new(),
			hidden: false,
		}
	}

	#[must_use]
	pub fn with_hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	#[must_use]
	pub fn with_mode_value(mut self, mode: impl Into<String>, value: impl Into<VariableValue>) -> Self {
		self.values_by_mode.insert(mode.into(), value.into());
		self
	}

	/// The value to emit for `mode`. A present per-mode value wins over the
	/// resolved default value. [`DEFAULT_MODE`] always yields the resolved
	/// value, even when a Figma mode carries that name.
	pub fn value_for_mode(&self, mode: &str) -> &VariableValue {
		if mode == DEFAULT_MODE {
			return &self.value;
		}

		self.values_by_mode
			.get(mode)
			.filter(|value| !value.is_absent())
			.unwrap_or(&self.value)
	}
}

/// Pick the first tag that names a known scope, falling back to
/// [`VariableScope::AllFills`].
pub fn resolve_scope<S: AsRef<str>>(tags: &[S]) -> VariableScope {
	tags.iter()
		.find_map(|tag| VariableScope::parse(tag.as_ref()))
		.unwrap_or_default()
}

/// Convert a raw API variable into its canonical form.
///
/// The value is taken from `default_mode_id` when that mode has a value,
/// otherwise from [`RawVariable::value`]. Without a default mode the first
/// mode entry is used as a last resort.
pub fn normalize_variable(raw: &RawVariable, default_mode_id: Option<&str>) -> NormalizedVariable {
	let scope = resolve_scope(&raw.scopes);
	let values_by_mode: BTreeMap<String, VariableValue> = raw
		.values_by_mode
		.iter()
		.map(|(mode, value)| (mode.clone(), VariableValue::from_json(value)))
		.collect();

	let present = |value: VariableValue| (!value.is_absent()).then_some(value);
	let value = default_mode_id
		.and_then(|mode| values_by_mode.get(mode).cloned())
		.and_then(present)
		.or_else(|| raw.value.as_ref().map(VariableValue::from_json).and_then(present))
		.or_else(|| {
			default_mode_id
				.is_none()
				.then(|| values_by_mode.values().next().cloned())
				.flatten()
				.and_then(present)
		})
		.unwrap_or_default();

	if value.is_absent() && !raw.values_by_mode.is_empty() {
		tracing::warn!(id = %raw.id, name = %raw.name, "variable has no representable value");
	}

	NormalizedVariable {
		id: raw.id.clone(),
		name: raw.name.clone(),
		scope,
		value,
		values_by_mode,
		hidden: raw.hidden_from_publishing.unwrap_or(false),
	}
}

/// Normalize every variable of a collection against its default mode.
pub fn normalize_collection(collection: &RawCollection) -> Vec<NormalizedVariable> {
	let default_mode = Some(collection.default_mode_id.as_str()).filter(|id| !id.is_empty());

	collection
		.variables
		.iter()
		.map(|raw| {
			let mut variable = normalize_variable(raw, default_mode);
			for mode in &collection.modes {
				if let Some(value) = variable.values_by_mode.get(&mode.mode_id).cloned() {
					variable.values_by_mode.entry(mode.name.clone()).or_insert(value);
				}
			}
			variable
		})
		.collect()
}

/// Normalize all collections in ascending collection id order.
pub fn normalize_collections(
	collections: &BTreeMap<String, RawCollection>,
) -> Vec<NormalizedVariable> {
	let variables: Vec<_> = collections.values().flat_map(normalize_collection).collect();
	tracing::debug!(
		collections = collections.len(),
		variables = variables.len(),
		"normalized variables"
	);
	variables
}
