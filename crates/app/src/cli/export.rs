use std::io::Write;

use clap::Args;
use jiff::civil::Date;
use offerdesk::prelude::{Offer, OfferBook, filter_offers};
use offerdesk_app::domain::offers::records::ExportFormat;
use tracing::info;

use crate::cli::{backend::Backend, errors::CommandError, filters::FilterArgs};

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    #[command(flatten)]
    filters: FilterArgs,
}

pub(crate) async fn run(
    backend: &Backend,
    args: ExportArgs,
    today: Date,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if let Backend::Remote(context) = backend
        && args.filters.is_empty()
    {
        let document = context.offers.export_offers(args.format).await?;

        write!(out, "{document}")?;

        return Ok(());
    }

    let filters = args.filters.filter_set()?;
    let offers = backend.offers().await?;
    let selected = filter_offers(&offers, &filters, today);

    info!(count = selected.len(), format = args.format.as_str(), "exporting offers");

    let document = render(&selected, args.format)?;

    write!(out, "{document}")?;

    Ok(())
}

fn render(offers: &[&Offer], format: ExportFormat) -> Result<String, CommandError> {
    Ok(match format {
        ExportFormat::Json => serde_json::to_string_pretty(offers)? + "\n",
        ExportFormat::Yaml => OfferBook {
            offers: offers.iter().copied().cloned().collect(),
        }
        .to_yaml()?,
    })
}
