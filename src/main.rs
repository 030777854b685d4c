use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use catalog_probe::config::{
    InspectConfig, ProbeConfig, CATALOG_FILE, PER_PAGE, PRODUCTS_ENDPOINT, PRODUCT_FIELDS,
    SLUG_MARKER, TARGET_SLUG, TIMEOUT_SECS,
};
use catalog_probe::services::{catalog, probe};

/// Debug aids for the storefront product catalog.
#[derive(Parser, Debug)]
#[command(name = "catalog-probe", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect a cached product listing for a slug
    Inspect {
        #[arg(long, default_value = CATALOG_FILE)]
        file: PathBuf,

        /// Substring matched against every slug, case-insensitively
        #[arg(long, default_value = SLUG_MARKER)]
        marker: String,

        #[arg(long, default_value = TARGET_SLUG)]
        target_slug: String,
    },

    /// Send one product lookup to the local products endpoint
    Probe {
        #[arg(long, default_value = PRODUCTS_ENDPOINT)]
        url: String,

        #[arg(long, default_value = TARGET_SLUG)]
        slug: String,

        #[arg(long, default_value_t = PER_PAGE)]
        per_page: u32,

        /// Comma-delimited `_fields` list
        #[arg(long, default_value = PRODUCT_FIELDS)]
        fields: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = TIMEOUT_SECS)]
        timeout: u64,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Command::Inspect {
            file,
            marker,
            target_slug,
        } => {
            let cfg = InspectConfig {
                path: file,
                marker,
                target_slug,
            };
            catalog::run(&cfg, &mut out)
        }
        Command::Probe {
            url,
            slug,
            per_page,
            fields,
            timeout,
        } => {
            let cfg = ProbeConfig {
                endpoint: url,
                slug,
                per_page,
                fields,
                timeout: Duration::from_secs(timeout),
            };
            probe::run(&cfg, &mut out)
        }
    };

    // Diagnostic failures were already printed; only a broken stdout fails here.
    match result.and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_probe_uses_fixed_request() {
        let cli = Cli::try_parse_from(["catalog-probe", "probe"]).unwrap();
        match cli.command {
            Command::Probe {
                url,
                slug,
                per_page,
                fields,
                timeout,
            } => {
                assert_eq!(url, PRODUCTS_ENDPOINT);
                assert_eq!(slug, TARGET_SLUG);
                assert_eq!(per_page, 1);
                assert_eq!(fields, PRODUCT_FIELDS);
                assert_eq!(timeout, 10);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn inspect_accepts_file_override() {
        let cli =
            Cli::try_parse_from(["catalog-probe", "inspect", "--file", "dump.json"]).unwrap();
        match cli.command {
            Command::Inspect { file, marker, .. } => {
                assert_eq!(file, PathBuf::from("dump.json"));
                assert_eq!(marker, SLUG_MARKER);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
