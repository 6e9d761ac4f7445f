use std::collections::BTreeMap;

use crate::NormalizedVariable;
use crate::VariableScope;

/// A named category of variables, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableGroup<'a> {
	pub name: String,
	pub variables: Vec<&'a NormalizedVariable>,
}

/// The category a variable is listed under.
///
/// A folder path in the name (`Colors/Primary`) wins and its first segment is
/// used verbatim. Otherwise, or when the folder segment is empty, the scope
/// family decides.
pub fn categorize(name: &str, scope: VariableScope) -> String {
	match name.split_once('/') {
		Some((folder, _)) if !folder.is_empty() => folder.to_string(),
		_ => scope.family().label().to_string(),
	}
}

/// Partition variables by category. Groups are sorted by name and each group
/// keeps the relative order of its variables.
pub fn group_variables<'a>(
	variables: impl IntoIterator<Item = &'a NormalizedVariable>,
) -> Vec<VariableGroup<'a>> {
	let mut groups: BTreeMap<String, Vec<&'a NormalizedVariable>> = BTreeMap::new();

	for variable in variables {
		groups
			.entry(categorize(&variable.name, variable.scope))
			.or_default()
			.push(variable);
	}

	groups
		.into_iter()
		.map(|(name, variables)| VariableGroup { name, variables })
		.collect()
}
