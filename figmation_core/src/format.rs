use crate::ValueUnit;
use crate::VariableScope;
use crate::VariableValue;

/// Render a variable name as a CSS custom property identifier.
///
/// The first path segment is the category and is dropped, as is any `Size`
/// segment. `Typography/Heading/Size` with [`VariableScope::FontSize`]
/// becomes `--font-size-heading`.
pub fn format_variable_name(name: &str, scope: VariableScope) -> String {
	let segments: Vec<&str> = name.split('/').collect();
	let relevant: Vec<&str> = segments
		.iter()
		.skip(1)
		.filter(|segment| !segment.eq_ignore_ascii_case("size"))
		.copied()
		.collect();

	let name_without_category = if relevant.is_empty() {
		segments.last().copied().unwrap_or_default().to_string()
	} else {
		relevant.join("-")
	};

	format!("--{}-{}", scope.prefix(), slugify(&name_without_category))
}

/// Lowercase, collapse each whitespace run into a single `-`, and replace any
/// remaining `/`.
pub(crate) fn slugify(name: &str) -> String {
	let mut slug = String::with_capacity(name.len());
	let mut in_whitespace = false;

	for ch in name.chars() {
		if ch.is_whitespace() {
			if !in_whitespace {
				slug.push('-');
			}
			in_whitespace = true;
			continue;
		}

		in_whitespace = false;
		if ch == '/' {
			slug.push('-');
		} else {
			slug.extend(ch.to_lowercase());
		}
	}

	slug
}

/// Render a value as a CSS literal for the given scope. Returns `None` when
/// there is nothing to emit.
pub fn format_variable_value(value: &VariableValue, scope: VariableScope) -> Option<String> {
	if value.is_absent() {
		return None;
	}

	let literal = match (scope.unit(), value) {
		(ValueUnit::Pixels, VariableValue::Number(number)) => format!("{number}px"),
		(ValueUnit::Pixels, VariableValue::Text(text)) if is_numeric(text) => {
			format!("{}px", text.trim())
		}
		_ => value.to_string(),
	};

	Some(literal)
}

fn is_numeric(text: &str) -> bool {
	text.trim()
		.parse::<f64>()
		.is_ok_and(|number| number.is_finite())
}
