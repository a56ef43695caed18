use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rag-chat")]
#[command(about = "Hotel concierge chat client for a RAG proxy server")]
#[command(version)]
pub struct Args {
    /// Chat language (ja or en); prompts for it when omitted
    #[arg(short = 'l', long = "lang")]
    pub lang: Option<String>,

    /// RAG proxy chat endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print developer diagnostics to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure the default endpoint and language
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_flags() {
        let args = Args::try_parse_from([
            "rag-chat",
            "--lang",
            "ja",
            "--endpoint",
            "http://localhost:3000/rag-chat",
        ])
        .unwrap();

        assert_eq!(args.lang.as_deref(), Some("ja"));
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:3000/rag-chat"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_configure_show() {
        let args = Args::try_parse_from(["rag-chat", "configure", "--show"]).unwrap();
        assert!(matches!(args.command, Some(Command::Configure { show: true })));
    }
}
