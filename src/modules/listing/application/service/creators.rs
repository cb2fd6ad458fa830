use std::collections::HashMap;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};
use crate::modules::listing::application::domain::entities::{
    CreatorSummary, Listing, ListingView,
};
use crate::shared::domain::PageResult;

impl From<User> for CreatorSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            phone: user.phone,
            region: Some(user.region),
        }
    }
}

/// Joins creator summaries onto listings with one batched user lookup.
pub(crate) async fn attach_creators<U>(
    users: &U,
    listings: Vec<Listing>,
) -> Result<Vec<ListingView>, UserQueryError>
where
    U: UserQuery + ?Sized,
{
    if listings.is_empty() {
        return Ok(Vec::new());
    }

    let mut ids: Vec<_> = listings.iter().map(|l| l.created_by).collect();
    ids.sort_unstable();
    ids.dedup();

    let creators: HashMap<_, CreatorSummary> = users
        .find_by_ids(&ids)
        .await?
        .into_iter()
        .map(|u| (u.id, CreatorSummary::from(u)))
        .collect();

    Ok(listings
        .into_iter()
        .map(|listing| {
            let creator = creators
                .get(&listing.created_by)
                .cloned()
                .unwrap_or_else(|| CreatorSummary::missing(listing.created_by));
            ListingView::new(listing, creator)
        })
        .collect())
}

pub(crate) async fn attach_creator<U>(
    users: &U,
    listing: Listing,
) -> Result<ListingView, UserQueryError>
where
    U: UserQuery + ?Sized,
{
    let creator = users
        .find_by_id(listing.created_by)
        .await?
        .map(CreatorSummary::from)
        .unwrap_or_else(|| CreatorSummary::missing(listing.created_by));

    Ok(ListingView::new(listing, creator))
}

pub(crate) async fn attach_creators_to_page<U>(
    users: &U,
    page: PageResult<Listing>,
) -> Result<PageResult<ListingView>, UserQueryError>
where
    U: UserQuery + ?Sized,
{
    let PageResult {
        items,
        page,
        limit,
        total,
    } = page;

    Ok(PageResult {
        items: attach_creators(users, items).await?,
        page,
        limit,
        total,
    })
}
