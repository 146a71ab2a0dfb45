use std::io::Write;

use clap::Args;
use jiff::civil::Date;
use offerdesk::prelude::ListState;
use tracing::info;

use crate::cli::{backend::Backend, errors::CommandError, filters::FilterArgs};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Offers per page
    #[arg(long, default_value_t = 10)]
    page_size: usize,
}

pub(crate) async fn run(
    backend: &Backend,
    args: ListArgs,
    today: Date,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let mut state = ListState::with_filters(args.filters.tags()?);

    state.set_page_size(args.page_size);
    state.set_page(args.page);

    let offers = backend.offers().await?;
    let page = state.view(&offers, today);

    info!(
        total = page.total,
        page = page.page,
        page_count = page.page_count,
        "listed offers"
    );

    page.write_to(out)?;

    Ok(())
}
