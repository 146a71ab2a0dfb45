//! Offerdesk CLI

use std::{error::Error, io, process};

use jiff::Zoned;
use offerdesk_app::observability::init_subscriber;
use tracing::error;

use crate::cli::Cli;

mod cli;

#[tokio::main]
pub async fn main() {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = init_subscriber(&cli.logging) {
        report(&error);
        process::exit(1);
    }

    let today = Zoned::now().date();

    if let Err(error) = cli.run(today, io::stdout().lock()).await {
        error!("{error}");
        report(&error);
        process::exit(1);
    }
}

/// Print an error and its sources as a single line.
fn report(error: &dyn Error) {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    #[expect(
        clippy::print_stderr,
        reason = "errors are reported to the terminal whether or not logging is enabled"
    )]
    {
        eprintln!("offerdesk: {message}");
    }
}
