use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use figmation_cli::Commands;
use figmation_cli::CredentialArgs;
use figmation_cli::FigmationCli;
use figmation_cli::GenerateArgs;
use figmation_core::FigmaClient;
use figmation_core::FigmationConfig;
use figmation_core::FileSink;
use figmation_core::GenerateOptions;
use figmation_core::GenerateReport;
use figmation_core::VariableSource;
use figmation_core::generate_all_modes;
use figmation_core::generate_css;
use figmation_core::generate_from_config;
use figmation_core::normalize_collections;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

const SAMPLE_CONFIG: &str = "# figmation configuration\n\n[figma]\n# Prefer the FIGMA_ACCESS_TOKEN \
                             environment variable over committing a token.\n# access_token = \
                             \"figd_...\"\n# The file key from the Figma URL: \
                             https://www.figma.com/design/<file_id>/...\n# file_id = \"\"\n\n[output]\n# \
                             Directory and file name of the generated stylesheet.\npath = \
                             \"./\"\nfilename = \"variables.css\"\n# Mode id or mode name to emit, \
                             e.g. \"Dark\".\nmode = \"default\"\n";

fn main() {
	let args = FigmationCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose);

	let result = match &args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Generate(generate)) => run_generate(&args, generate),
		Some(Commands::Info(credentials)) => run_info(&args, credentials),
		None => {
			eprintln!("No subcommand specified. Run `figmation --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<figmation_core::FigmationError>() {
			Ok(figmation_err) => {
				let report: miette::Report = (*figmation_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
	let default_directives = if verbose {
		"figmation_core=debug,figmation=debug"
	} else {
		"warn"
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn resolve_root(args: &FigmationCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn print_field(label: &str, value: impl std::fmt::Display) {
	let label = format!("{label:<16}");
	println!("{} {value}", colored!(label, bold));
}

fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}

/// Load the config at the project root and layer environment variables and
/// flags on top. Relative output paths are resolved against the root.
fn load_config(
	root: &Path,
	credentials: &CredentialArgs,
) -> Result<FigmationConfig, Box<dyn std::error::Error>> {
	let config_path = FigmationConfig::resolve_path(root);
	let mut config = FigmationConfig::load(root)?
		.unwrap_or_default()
		.with_env_overrides();

	if let Some(token) = &credentials.token {
		config.figma.access_token = Some(token.clone());
	}
	if let Some(file_id) = &credentials.file_id {
		config.figma.file_id = Some(file_id.clone());
	}
	if let Some(api_url) = &credentials.api_url {
		config.figma.api_url = Some(api_url.clone());
	}
	config.output.path = root.join(&config.output.path);

	tracing::debug!(
		config = ?config_path,
		output = %config.output_file().display(),
		"resolved configuration"
	);

	Ok(config)
}

fn run_init(args: &FigmationCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);

	if let Some(existing) = FigmationConfig::resolve_path(&root) {
		println!("Config file already exists: {}", existing.display());
		return Ok(());
	}

	let config_path = root.join("figmation.toml");
	std::fs::write(&config_path, SAMPLE_CONFIG)?;
	println!("Created {}", config_path.display());
	println!();
	println!("Next steps:");
	println!("  1. Set FIGMA_ACCESS_TOKEN to a personal access token");
	println!("  2. Set file_id in figmation.toml");
	println!("  3. Run `figmation generate`");

	Ok(())
}

fn run_generate(
	args: &FigmationCli,
	generate: &GenerateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let mut config = load_config(&root, &generate.credentials)?;

	if let Some(out_dir) = &generate.out_dir {
		config.output.path = root.join(out_dir);
	}
	if let Some(filename) = &generate.filename {
		config.output.filename.clone_from(filename);
	}
	if let Some(mode) = &generate.mode {
		config.output.mode.clone_from(mode);
	}

	let rt = tokio::runtime::Runtime::new()?;

	if !generate.stdout && !generate.all_modes {
		let options = GenerateOptions::from_config(&config);
		let report = rt.block_on(generate_from_config(&config, &options))?;
		print_report(&report, &root);
		return Ok(());
	}

	// Fails on missing credentials before touching the network.
	let client = FigmaClient::from_config(&config)?;

	if generate.stdout {
		let collections = rt.block_on(client.fetch_local_variables())?;
		let variables = normalize_collections(&collections);
		println!("{}", generate_css(&variables, &config.output.mode));
		return Ok(());
	}

	let reports = rt.block_on(generate_all_modes(
		&client,
		&FileSink,
		&config.output_file(),
	))?;
	if reports.is_empty() {
		println!("No modes found in the file's variable collections.");
	}
	for report in &reports {
		print_report(report, &root);
	}

	Ok(())
}

fn print_report(report: &GenerateReport, root: &Path) {
	println!(
		"{} {} ({} variables, mode `{}`)",
		colored!("Generated", green),
		make_relative(&report.path, root),
		report.emitted_count,
		report.mode
	);
}

fn run_info(
	args: &FigmationCli,
	credentials: &CredentialArgs,
) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = load_config(&root, credentials)?;
	let client = FigmaClient::from_config(&config)?;

	let rt = tokio::runtime::Runtime::new()?;
	let info = rt.block_on(client.fetch_file_info())?;

	print_field("File", &info.name);
	print_field("File id", client.file_id());
	print_field("Last modified", &info.last_modified);
	print_field("Output", make_relative(&config.output_file(), &root));

	Ok(())
}
