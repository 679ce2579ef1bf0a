// Copyright (C) 2026 AdoptNest Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Surrender queries.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;
use tracing::debug;

use crate::data_models::SurrenderRow;
use crate::diesel_schema::surrenders;
use crate::error::PersistenceError;
use adoptnest_core::SurrenderFilter;
use adoptnest_domain::Surrender;

/// Retrieves a surrender by id.
///
/// # Errors
///
/// Returns an error if the query fails. Returns `Ok(None)` if the
/// surrender is not found.
pub fn get_surrender(
    conn: &mut SqliteConnection,
    surrender_id: i64,
) -> Result<Option<Surrender>, PersistenceError> {
    debug!("Looking up surrender by id: {}", surrender_id);

    let result: Result<SurrenderRow, diesel::result::Error> = surrenders::table
        .filter(surrenders::surrender_id.eq(surrender_id))
        .select(SurrenderRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists surrenders matching the filter.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_surrenders(
    conn: &mut SqliteConnection,
    filter: &SurrenderFilter,
) -> Result<Vec<Surrender>, PersistenceError> {
    let mut query: surrenders::BoxedQuery<'static, Sqlite> = surrenders::table.into_boxed();

    if let Some(user_id) = filter.user_id {
        query = query.filter(surrenders::user_id.eq(user_id));
    }
    if let Some(status) = filter.status {
        query = query.filter(surrenders::status.eq(status.as_str()));
    }

    let rows: Vec<SurrenderRow> = query
        .order(surrenders::surrender_id.asc())
        .select(SurrenderRow::as_select())
        .load(conn)?;

    rows.into_iter().map(SurrenderRow::into_domain).collect()
}
