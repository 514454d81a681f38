//! CLI command definitions for the `scribe` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod generate;
pub mod test_api;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use seoscribe_types::content::{Audience, Language, Length, Platform, Tone};

/// Generate SEO-optimized marketing copy with a chat-completion model.
#[derive(Parser)]
#[command(name = "scribe", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read configuration from this file instead of ~/.seoscribe/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate content for a topic (interactive when --topic is omitted).
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Send a short test prompt to check the API key and connectivity.
    Test,

    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Host address to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Topic to write about.
    #[arg(long, short)]
    pub topic: Option<String>,

    /// Target platform (instagram, facebook, linkedin, blog, email).
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Tone (neutral, informative, inspirational, urgent, casual).
    #[arg(long)]
    pub tone: Option<Tone>,

    /// Length (short, medium, long).
    #[arg(long)]
    pub length: Option<Length>,

    /// Target audience (general, young-adults, families, seniors, teens).
    #[arg(long)]
    pub audience: Option<Audience>,

    /// Output language (english, portuguese, spanish, french, german).
    #[arg(long)]
    pub language: Option<Language>,

    /// Ask for a call to action at the end.
    #[arg(long)]
    pub cta: bool,

    /// Ask for relevant hashtags.
    #[arg(long)]
    pub hashtags: bool,

    /// Mandatory SEO keywords, e.g. "wellness, self-care".
    #[arg(long, short)]
    pub keywords: Option<String>,

    /// Save the text to content_<topic>.txt.
    #[arg(long)]
    pub save: bool,

    /// Directory for --save (defaults to output.directory from config).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "scribe",
            "generate",
            "--topic",
            "mental health",
            "--platform",
            "blog",
            "--audience",
            "young adults",
            "--cta",
            "--keywords",
            "wellness",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.topic.as_deref(), Some("mental health"));
        assert_eq!(args.platform, Some(Platform::Blog));
        assert_eq!(args.audience, Some(Audience::YoungAdults));
        assert!(args.cta);
        assert!(!args.hashtags);
        assert_eq!(args.keywords.as_deref(), Some("wellness"));
    }

    #[test]
    fn test_unknown_platform_is_rejected() {
        assert!(Cli::try_parse_from(["scribe", "generate", "--platform", "myspace"]).is_err());
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["scribe", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, 3000);
                assert_eq!(host, "127.0.0.1");
            }
            _ => panic!("expected serve"),
        }
    }
}
