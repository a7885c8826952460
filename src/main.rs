//! Command-line interface for the manifest-badges binary.
//!
//! The binary resolves one integration by name, renders the badge payload
//! from the project manifest, and prints it as JSON for the badge host. All
//! failures are reported through the GitHub Actions error channel before the
//! process exits with a failing status.

use std::{io, path::PathBuf, process};

use clap::{ArgAction, Parser};
use manifest_badges::{
    BadgePayload, Error, FileSource, issue_error, resolve_integration
};
use tracing_subscriber::EnvFilter;

/// Command line interface for generating badge payloads from a manifest.
#[derive(Debug, Parser)]
#[command(
    name = "manifest-badges",
    version,
    about = "Generate badge payloads from package.json metadata"
)]
struct Cli {
    /// Integration to render: license, node-version, or version.
    #[arg(long = "integration", value_name = "KEY", env = "INPUT_INTEGRATION")]
    integration: String,

    /// Path to the project manifest.
    #[arg(long = "manifest", value_name = "PATH", default_value = "package.json")]
    manifest: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    init_tracing();

    if let Err(error) = run(Cli::parse()) {
        let message = error.to_display_string();
        issue_error(&message);
        eprintln!("{message}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from integration resolution, manifest
/// loading, and payload serialization.
fn run(cli: Cli) -> Result<(), Error> {
    let payload = render_payload(&cli)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_payload(&mut handle, &payload, cli.pretty)
}

fn render_payload(cli: &Cli) -> Result<BadgePayload, Error> {
    let integration = resolve_integration(&cli.integration)?;
    tracing::debug!(label = integration.label(), "rendering badge payload");

    let source = FileSource::new(cli.manifest.as_path());
    integration.render(&source)
}

fn write_payload<W: io::Write>(
    writer: &mut W,
    payload: &BadgePayload,
    pretty: bool
) -> Result<(), Error> {
    let result = if pretty {
        serde_json::to_writer_pretty(writer, payload)
    } else {
        serde_json::to_writer(writer, payload)
    };

    result.map_err(|source| Error::Serialize {
        source
    })
}
