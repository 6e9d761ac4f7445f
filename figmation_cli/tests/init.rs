use figmation_core::AnyEmptyResult;

mod common;

#[test]
fn can_init() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::figmation_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Created"))
		.stdout(predicates::str::contains("figmation.toml"));

	let config_path = tmp.path().join("figmation.toml");
	let content = std::fs::read_to_string(&config_path)?;
	assert!(content.contains("[figma]"));
	assert!(content.contains("[output]"));
	assert!(content.contains("filename = \"variables.css\""));

	Ok(())
}

#[test]
fn init_does_not_overwrite() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config_path = tmp.path().join("figmation.toml");
	std::fs::write(&config_path, "existing config")?;

	common::figmation_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("already exists"));

	assert_eq!(std::fs::read_to_string(&config_path)?, "existing config");

	Ok(())
}

#[test]
fn init_config_is_loadable() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::figmation_cmd()
		.arg("init")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	let config = figmation_core::FigmationConfig::load(tmp.path())?.unwrap_or_default();
	assert_eq!(config.output.filename, "variables.css");
	assert_eq!(config.output.mode, "default");
	assert!(config.figma.access_token.is_none());

	Ok(())
}

#[test]
fn no_subcommand_exits_with_usage_hint() {
	common::figmation_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("figmation --help"));
}
