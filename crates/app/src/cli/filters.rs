use clap::Args;
use offerdesk::prelude::{FilterError, FilterSet, FilterTag};

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArgs {
    /// Filter tag such as `status:inactive` or `merchant:m-cvs`; repeatable
    #[arg(short, long = "filter", value_name = "CATEGORY:VALUE")]
    pub(crate) filters: Vec<String>,

    /// Free-text search over names, merchants and ids
    #[arg(short, long)]
    pub(crate) search: Option<String>,
}

impl FilterArgs {
    /// Parsed tags, with the search text as a trailing `search:` tag.
    pub(crate) fn tags(&self) -> Result<Vec<FilterTag>, FilterError> {
        let mut tags = self
            .filters
            .iter()
            .map(|value| FilterTag::parse(value))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(search) = &self.search {
            tags.push(FilterTag::search(search));
        }

        Ok(tags)
    }

    pub(crate) fn filter_set(&self) -> Result<FilterSet, FilterError> {
        Ok(FilterSet::from_tags(&self.tags()?))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.search.is_none()
    }
}
