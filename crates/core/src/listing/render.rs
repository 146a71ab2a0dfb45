//! Page Rendering

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{listing::Page, offers::Offer};

/// Errors that can occur when rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write offer table")]
    Io(#[from] io::Error),
}

impl Page<'_> {
    /// Write the page as a table followed by a "Showing a–b of n" summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), RenderError> {
        if self.offers.is_empty() {
            writeln!(out, "No offers match the selected filters.")?;

            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["Status", "Name", "Merchant", "Type", "Redemptions", "End date"]);

        for offer in &self.offers {
            builder.push_record(offer_row(offer));
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(
            1,
            HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
        );

        table.with(theme);
        table.modify(Columns::new(4..5), Alignment::right());
        table.modify(Rows::first(), Alignment::left());

        writeln!(out, "{table}")?;

        if let Some((first, last)) = self.row_range() {
            writeln!(
                out,
                "Showing {first}–{last} of {} (page {} of {})",
                self.total, self.page, self.page_count
            )?;
        }

        Ok(())
    }
}

fn offer_row(offer: &Offer) -> [String; 6] {
    [
        offer.offer_status.label().to_string(),
        offer.offer_name.clone(),
        offer.merchant_name.clone(),
        offer.offer_type.to_string(),
        format!("{} ({})", offer.redemptions, offer.performance().label()),
        offer
            .end_date
            .map_or_else(|| "No expiration".to_string(), |date| date.to_string()),
    ]
}
