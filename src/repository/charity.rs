use diesel::dsl::count_star;
use diesel::prelude::*;

use crate::domain::charity::{Charity, NewCharity};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CharityListQuery, CharityReader, CharityWriter, DieselRepository};

impl CharityReader for DieselRepository {
    fn get_charity_by_id(&self, id: i32) -> RepositoryResult<Option<Charity>> {
        use crate::models::charity::Charity as DbCharity;
        use crate::schema::charities;

        let mut conn = self.conn()?;
        let charity = charities::table
            .find(id)
            .first::<DbCharity>(&mut conn)
            .optional()?;

        Ok(charity.map(Into::into))
    }

    fn list_charities(&self, query: CharityListQuery) -> RepositoryResult<(usize, Vec<Charity>)> {
        use crate::models::charity::Charity as DbCharity;
        use crate::schema::charities;

        let mut conn = self.conn()?;

        let mut items = charities::table.into_boxed();
        let mut total = charities::table.select(count_star()).into_boxed();

        if let Some(term) = &query.search {
            let pattern = format!("%{term}%");
            items = items.filter(
                charities::name
                    .like(pattern.clone())
                    .or(charities::category.like(pattern.clone()))
                    .or(charities::location.like(pattern.clone())),
            );
            total = total.filter(
                charities::name
                    .like(pattern.clone())
                    .or(charities::category.like(pattern.clone()))
                    .or(charities::location.like(pattern)),
            );
        }

        if let Some(category) = &query.category {
            items = items.filter(charities::category.eq(category.clone()));
            total = total.filter(charities::category.eq(category.clone()));
        }

        if let Some(location) = &query.location {
            items = items.filter(charities::location.eq(location.clone()));
            total = total.filter(charities::location.eq(location.clone()));
        }

        // Newest first, id as the tie-break for rows created in the same second.
        items = items.order((charities::created_at.desc(), charities::id.desc()));

        if let Some(pagination) = &query.pagination {
            let page = pagination.page.max(1) as i64;
            let per_page = pagination.per_page as i64;
            items = items.limit(per_page).offset((page - 1) * per_page);
        }

        let total: i64 = total.get_result(&mut conn)?;
        let items = items
            .load::<DbCharity>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Charity>>();

        Ok((total as usize, items))
    }
}

impl CharityWriter for DieselRepository {
    fn create_charity(&self, new_charity: &NewCharity) -> RepositoryResult<Charity> {
        use crate::models::charity::{Charity as DbCharity, NewCharity as DbNewCharity};
        use crate::schema::charities;

        let mut conn = self.conn()?;
        let insertable: DbNewCharity = new_charity.into();
        let created = diesel::insert_into(charities::table)
            .values(&insertable)
            .get_result::<DbCharity>(&mut conn)?;

        Ok(created.into())
    }
}
