use std::io::Write;

use clap::{Parser, Subcommand};
use jiff::civil::Date;
use offerdesk_app::config::{ApiConfig, LoggingConfig, SourceConfig};

use crate::cli::{backend::Backend, errors::CommandError};

mod actions;
mod backend;
mod errors;
mod export;
mod filters;
mod list;
mod show;

#[derive(Debug, Parser)]
#[command(name = "offerdesk", about = "Offerdesk offer list CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(flatten)]
    source: SourceConfig,

    #[command(flatten)]
    api: ApiConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter, sort and page through offers
    List(list::ListArgs),

    /// Print one offer as YAML
    Show(show::ShowArgs),

    /// Write offers as JSON or YAML
    Export(export::ExportArgs),

    /// Publish the drafts among the given offers
    Publish(actions::SelectionArgs),

    /// Return the published offers among the given offers to draft
    Unpublish(actions::SelectionArgs),

    /// Flip an offer between published and draft
    Toggle(actions::OfferArgs),

    /// Copy an offer as a new draft
    Clone(actions::OfferArgs),

    /// Delete an offer
    Delete(actions::OfferArgs),
}

impl Cli {
    /// Parse arguments, reading `.env` first so it can supply defaults.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self, today: Date, out: impl Write) -> Result<(), CommandError> {
        let mut backend = Backend::from_config(&self.source, &self.api)?;

        self.command.run(&mut backend, today, out).await
    }
}

impl Commands {
    async fn run(
        self,
        backend: &mut Backend,
        today: Date,
        mut out: impl Write,
    ) -> Result<(), CommandError> {
        match self {
            Self::List(args) => list::run(backend, args, today, &mut out).await,
            Self::Show(args) => show::run(backend, args, &mut out).await,
            Self::Export(args) => export::run(backend, args, today, &mut out).await,
            Self::Publish(args) => actions::publish(backend, args, &mut out).await,
            Self::Unpublish(args) => actions::unpublish(backend, args, &mut out).await,
            Self::Toggle(args) => actions::toggle(backend, args, &mut out).await,
            Self::Clone(args) => actions::clone(backend, args, &mut out).await,
            Self::Delete(args) => actions::delete(backend, args, &mut out).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use testresult::TestResult;

    use offerdesk_app::config::LogFormat;

    use super::*;

    #[test]
    fn global_flags_parse_after_the_subcommand() -> TestResult {
        let cli = Cli::try_parse_from([
            "offerdesk",
            "list",
            "--filter",
            "status:published",
            "--book",
            "offers.yml",
            "--log-format",
            "json",
        ])?;

        assert_eq!(cli.source.book.as_deref(), Some(Path::new("offers.yml")));
        assert!(!cli.source.remote);
        assert_eq!(cli.logging.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::List(_)));

        Ok(())
    }

    #[test]
    fn book_and_remote_conflict() {
        let result = Cli::try_parse_from(["offerdesk", "--remote", "--book", "a.yml", "list"]);

        assert!(result.is_err(), "--book and --remote should be exclusive");
    }
}
