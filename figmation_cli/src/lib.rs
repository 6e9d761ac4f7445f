use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Mirror Figma variables into a stylesheet of CSS custom properties.",
	long_about = "figmation fetches the local variables of a Figma file and writes them as CSS \
	              custom properties, grouped by category inside a single `:root` block.\n\nQuick \
	              start:\n  figmation init      Create a figmation.toml\n  figmation generate  \
	              Write the stylesheet\n  figmation info      Show the Figma file being read"
)]
pub struct FigmationCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory. `figmation.toml` is discovered
	/// here and relative output paths are resolved against it.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output, including debug logs on stderr.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `figmation.toml` in the project root.
	///
	/// If a config file already exists this command leaves it untouched and
	/// exits successfully.
	Init,
	/// Fetch variables from Figma and write the stylesheet.
	///
	/// Credentials come from the flags below, then `FIGMA_ACCESS_TOKEN` and
	/// `FIGMA_FILE_ID`, then the `[figma]` section of `figmation.toml`.
	/// Hidden variables are never written.
	Generate(GenerateArgs),
	/// Print the name and last modification time of the configured Figma
	/// file.
	Info(CredentialArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CredentialArgs {
	/// Figma personal access token.
	#[arg(long)]
	pub token: Option<String>,

	/// Key of the Figma file, as found in its URL.
	#[arg(long)]
	pub file_id: Option<String>,

	/// Root of the Figma REST API.
	#[arg(long)]
	pub api_url: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
	#[command(flatten)]
	pub credentials: CredentialArgs,

	/// Directory to write the stylesheet into. Created when missing.
	#[arg(long)]
	pub out_dir: Option<PathBuf>,

	/// File name of the stylesheet.
	#[arg(long)]
	pub filename: Option<String>,

	/// Mode to emit values for, by mode id or mode name. Defaults to each
	/// collection's default mode.
	#[arg(long, conflicts_with = "all_modes")]
	pub mode: Option<String>,

	/// Write one stylesheet per mode, named `<stem>.<mode>.css`.
	#[arg(long, default_value_t = false)]
	pub all_modes: bool,

	/// Print the stylesheet to stdout instead of writing a file.
	#[arg(long, default_value_t = false, conflicts_with = "all_modes")]
	pub stdout: bool,
}
