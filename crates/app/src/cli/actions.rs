use std::io::Write;

use clap::Args;
use offerdesk::prelude::{Action, Changed, OfferId, OfferStatus};
use offerdesk_app::{
    context::AppContext,
    domain::offers::records::{NewOffer, OfferUpdate},
};
use rustc_hash::FxHashSet;
use tracing::{info, warn};

use crate::cli::{
    backend::{Backend, dispatch},
    errors::CommandError,
};

#[derive(Debug, Args)]
pub(crate) struct SelectionArgs {
    /// Offer ids
    #[arg(required = true, num_args = 1..)]
    ids: Vec<String>,
}

impl SelectionArgs {
    /// Selected ids, first occurrence wins.
    fn ids(&self) -> Vec<OfferId> {
        let mut seen = FxHashSet::default();

        self.ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .map(|id| OfferId::new(id.as_str()))
            .collect()
    }
}

#[derive(Debug, Args)]
pub(crate) struct OfferArgs {
    /// Offer id
    id: String,
}

pub(crate) async fn publish(
    backend: &mut Backend,
    args: SelectionArgs,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let ids = args.ids();

    let changed = match backend {
        Backend::Local { path, store } => dispatch(path.as_deref(), store, Action::Publish(ids))?,
        Backend::Remote(context) => {
            transition(context, ids, OfferStatus::Draft, OfferStatus::Published).await?
        }
    };

    report(out, "published", &changed)
}

pub(crate) async fn unpublish(
    backend: &mut Backend,
    args: SelectionArgs,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let ids = args.ids();

    let changed = match backend {
        Backend::Local { path, store } => {
            dispatch(path.as_deref(), store, Action::Unpublish(ids))?
        }
        Backend::Remote(context) => {
            transition(context, ids, OfferStatus::Published, OfferStatus::Draft).await?
        }
    };

    report(out, "unpublished", &changed)
}

pub(crate) async fn toggle(
    backend: &mut Backend,
    args: OfferArgs,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let id = OfferId::from(args.id);

    let status = match backend {
        Backend::Local { path, store } => {
            dispatch(path.as_deref(), store, Action::TogglePublish(id.clone()))?;

            store
                .get(&id)
                .map(|offer| offer.offer_status)
                .ok_or_else(|| CommandError::NotFound(id.clone()))?
        }
        Backend::Remote(context) => {
            let offer = context.offers.get_offer(id.clone()).await?;
            let status = if offer.is_published() {
                OfferStatus::Draft
            } else {
                OfferStatus::Published
            };

            context
                .offers
                .update_offer(id.clone(), OfferUpdate::status(status))
                .await?
                .offer_status
        }
    };

    info!(offer = %id, %status, "toggled offer");

    writeln!(out, "{id}: {}", status.label())?;

    Ok(())
}

pub(crate) async fn clone(
    backend: &mut Backend,
    args: OfferArgs,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let id = OfferId::from(args.id);

    let copy = match backend {
        Backend::Local { path, store } => {
            dispatch(path.as_deref(), store, Action::Clone(id.clone()))?
                .into_iter()
                .next()
                .ok_or_else(|| CommandError::NotFound(id.clone()))?
        }
        Backend::Remote(context) => {
            let offer = context.offers.get_offer(id.clone()).await?;

            context
                .offers
                .create_offer(NewOffer::copy_of(&offer))
                .await?
                .id
        }
    };

    info!(source = %id, copy = %copy, "cloned offer");

    writeln!(out, "cloned {id} as {copy}")?;

    Ok(())
}

pub(crate) async fn delete(
    backend: &mut Backend,
    args: OfferArgs,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let id = OfferId::from(args.id);

    match backend {
        Backend::Local { path, store } => {
            dispatch(path.as_deref(), store, Action::Delete(id.clone()))?;
        }
        Backend::Remote(context) => context.offers.delete_offer(id.clone()).await?,
    }

    info!(offer = %id, "deleted offer");

    writeln!(out, "deleted {id}")?;

    Ok(())
}

/// Move the selected remote offers in `from` to `to`, after checking that every id exists.
async fn transition(
    context: &AppContext,
    ids: Vec<OfferId>,
    from: OfferStatus,
    to: OfferStatus,
) -> Result<Changed, CommandError> {
    let mut selected = Vec::with_capacity(ids.len());

    for id in ids {
        selected.push(context.offers.get_offer(id).await?);
    }

    let mut changed = Changed::new();

    for offer in selected.into_iter().filter(|offer| offer.offer_status == from) {
        let update = context
            .offers
            .update_offer(offer.id.clone(), OfferUpdate::status(to))
            .await;

        match update {
            Ok(_) => changed.push(offer.id),
            Err(source) if changed.is_empty() => return Err(source.into()),
            Err(source) => {
                warn!(changed = ?changed, failed = %offer.id, "bulk update stopped part way");

                return Err(CommandError::PartiallyApplied { changed, source });
            }
        }
    }

    Ok(changed)
}

fn report(out: &mut impl Write, verb: &str, changed: &Changed) -> Result<(), CommandError> {
    info!(count = changed.len(), "{verb} offers");

    if changed.is_empty() {
        writeln!(out, "no offers {verb}")?;
    }

    for id in changed {
        writeln!(out, "{verb} {id}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;
    use offerdesk::prelude::{Offer, OfferBook};
    use offerdesk_app::domain::offers::{MockOffersService, OffersServiceError};
    use tempfile::tempdir;
    use testresult::TestResult;

    use super::*;

    fn offer(id: &str, status: OfferStatus) -> Offer {
        Offer::draft(id, format!("Offer {id}"), "m-1", "CVS Pharmacy", "percent_off")
            .with_status(status)
    }

    fn remote(mock: MockOffersService) -> Backend {
        Backend::Remote(AppContext::new(Arc::new(mock)))
    }

    fn selection(ids: &[&str]) -> SelectionArgs {
        SelectionArgs {
            ids: ids.iter().map(ToString::to_string).collect(),
        }
    }

    #[tokio::test]
    async fn remote_publish_only_updates_drafts() -> TestResult {
        let mut mock = MockOffersService::new();

        mock.expect_get_offer()
            .with(eq(OfferId::from("a")))
            .times(1)
            .returning(|_| Ok(offer("a", OfferStatus::Draft)));

        mock.expect_get_offer()
            .with(eq(OfferId::from("b")))
            .times(1)
            .returning(|_| Ok(offer("b", OfferStatus::Published)));

        mock.expect_update_offer()
            .with(
                eq(OfferId::from("a")),
                eq(OfferUpdate::status(OfferStatus::Published)),
            )
            .times(1)
            .returning(|_, _| Ok(offer("a", OfferStatus::Published)));

        let mut backend = remote(mock);
        let mut out = Vec::new();

        publish(&mut backend, selection(&["a", "b", "a"]), &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "published a\n");

        Ok(())
    }

    #[tokio::test]
    async fn remote_bulk_action_checks_every_id_before_updating() -> TestResult {
        let mut mock = MockOffersService::new();

        mock.expect_get_offer()
            .with(eq(OfferId::from("a")))
            .returning(|_| Ok(offer("a", OfferStatus::Published)));

        mock.expect_get_offer()
            .with(eq(OfferId::from("missing")))
            .returning(|_| Err(OffersServiceError::NotFound));

        mock.expect_update_offer().never();

        let mut backend = remote(mock);
        let result =
            unpublish(&mut backend, selection(&["a", "missing"]), &mut Vec::new()).await;

        assert!(matches!(
            result,
            Err(CommandError::Service(OffersServiceError::NotFound))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn remote_bulk_failure_reports_offers_already_updated() -> TestResult {
        let mut mock = MockOffersService::new();

        mock.expect_get_offer()
            .returning(|id| Ok(offer(id.as_str(), OfferStatus::Draft)));

        mock.expect_update_offer()
            .with(eq(OfferId::from("a")), eq(OfferUpdate::status(OfferStatus::Published)))
            .times(1)
            .returning(|_, _| Ok(offer("a", OfferStatus::Published)));

        mock.expect_update_offer()
            .with(eq(OfferId::from("b")), eq(OfferUpdate::status(OfferStatus::Published)))
            .times(1)
            .returning(|_, _| Err(OffersServiceError::Rejected("locked".to_string())));

        mock.expect_update_offer()
            .with(eq(OfferId::from("c")), eq(OfferUpdate::status(OfferStatus::Published)))
            .never();

        let mut backend = remote(mock);
        let result = publish(&mut backend, selection(&["a", "b", "c"]), &mut Vec::new()).await;

        let Err(error) = result else {
            return Err("expected the bulk publish to fail".into());
        };

        assert!(matches!(
            &error,
            CommandError::PartiallyApplied { changed, source: OffersServiceError::Rejected(_) }
                if changed.as_slice() == [OfferId::from("a")]
        ));
        assert_eq!(error.to_string(), "offers API failed after updating a");

        Ok(())
    }

    #[tokio::test]
    async fn remote_clone_creates_a_renamed_draft() -> TestResult {
        let mut mock = MockOffersService::new();

        mock.expect_get_offer()
            .times(1)
            .returning(|_| Ok(offer("a", OfferStatus::Published).with_redemptions(40)));

        mock.expect_create_offer()
            .withf(|new| {
                new.offer_name == "Offer a (Copy)" && new.offer_status == OfferStatus::Draft
            })
            .times(1)
            .returning(|_| Ok(offer("a-copy", OfferStatus::Draft)));

        let mut backend = remote(mock);
        let mut out = Vec::new();

        clone(&mut backend, OfferArgs { id: "a".to_string() }, &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "cloned a as a-copy\n");

        Ok(())
    }

    #[tokio::test]
    async fn remote_toggle_and_delete() -> TestResult {
        let mut mock = MockOffersService::new();

        mock.expect_get_offer()
            .times(1)
            .returning(|_| Ok(offer("a", OfferStatus::Paused)));

        mock.expect_update_offer()
            .with(
                eq(OfferId::from("a")),
                eq(OfferUpdate::status(OfferStatus::Published)),
            )
            .times(1)
            .returning(|_, _| Ok(offer("a", OfferStatus::Published)));

        mock.expect_delete_offer()
            .with(eq(OfferId::from("a")))
            .times(1)
            .returning(|_| Ok(()));

        let mut backend = remote(mock);
        let mut out = Vec::new();

        toggle(&mut backend, OfferArgs { id: "a".to_string() }, &mut out).await?;
        delete(&mut backend, OfferArgs { id: "a".to_string() }, &mut out).await?;

        assert_eq!(String::from_utf8(out)?, "a: Published\ndeleted a\n");

        Ok(())
    }

    #[tokio::test]
    async fn local_actions_are_written_back_to_the_book() -> TestResult {
        let dir = tempdir()?;
        let path = dir.path().join("offers.yml");

        OfferBook::new(vec![
            offer("a", OfferStatus::Draft),
            offer("b", OfferStatus::Published),
        ])?
        .save(&path)?;

        let mut backend = Backend::local(Some(path.clone()), OfferBook::load(&path)?)?;
        let mut out = Vec::new();

        publish(&mut backend, selection(&["a", "b"]), &mut out).await?;
        clone(&mut backend, OfferArgs { id: "b".to_string() }, &mut out).await?;
        delete(&mut backend, OfferArgs { id: "a".to_string() }, &mut out).await?;

        let saved = OfferBook::load(&path)?;
        let names: Vec<&str> = saved
            .offers
            .iter()
            .map(|offer| offer.offer_name.as_str())
            .collect();

        assert_eq!(names, ["Offer b", "Offer b (Copy)"]);
        assert!(String::from_utf8(out)?.starts_with("published a\ncloned b as offer-"));

        Ok(())
    }

    #[tokio::test]
    async fn local_unknown_id_is_reported() -> TestResult {
        let mut backend = Backend::local(None, OfferBook::demo()?)?;

        let args = OfferArgs {
            id: "nope".to_string(),
        };

        let result = toggle(&mut backend, args, &mut Vec::new()).await;

        assert!(matches!(result, Err(CommandError::Store(_))));

        Ok(())
    }
}
