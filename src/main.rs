use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rag_chat::cli::commands::{chat, configure};
use rag_chat::cli::{Args, Command};
use rag_chat::output::{self, OutputConfig};
use rag_chat::widget::{print_languages, validate_language};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    init_tracing(args.verbose);

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let lang = args.lang.as_deref().map(validate_language).transpose()?;

            let options = chat::ChatOptions {
                lang,
                endpoint: args.endpoint,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}

/// Developer diagnostics on stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rag_chat=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
