use std::io::Write;

use clap::Args;
use offerdesk::prelude::OfferId;

use crate::cli::{backend::Backend, errors::CommandError};

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    /// Offer id
    id: String,
}

pub(crate) async fn run(
    backend: &Backend,
    args: ShowArgs,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let offer = backend.offer(&OfferId::from(args.id)).await?;

    write!(out, "{}", serde_norway::to_string(&offer)?)?;

    Ok(())
}
