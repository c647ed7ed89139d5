//! PostgreSQL-backed `CampRepository` implementation using Diesel ORM.
//!
//! Reads join talks to their camp by moniker and to their speaker. A commit
//! runs every staged change inside one transaction. Only the
//! `camps_moniker_key` unique constraint surfaces as
//! [`CampRepositoryError::Conflict`]; any other unique violation is a query
//! fault.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{CampRepository, CampRepositoryError};
use crate::domain::{
    Camp, Change, CommitReceipt, Location, Moniker, Speaker, SpeakerId, Talk, TalkDraft, TalkId,
    UnitOfWork,
};

use super::diesel_basic_error_mapping::{
    DieselErrorMapping, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{CampRow, CampValues, NewTalkRow, SpeakerRow, TalkRow, TalkUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::{camps, speakers, talks};

/// The only unique constraint a client can trip.
const MONIKER_CONSTRAINT: &str = "camps_moniker_key";

/// Diesel-backed implementation of the camp repository port.
#[derive(Clone)]
pub struct DieselCampRepository {
    pool: DbPool,
}

impl DieselCampRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CampRepositoryError {
    map_basic_pool_error(error, CampRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CampRepositoryError {
    map_basic_diesel_error(
        error,
        DieselErrorMapping {
            query: CampRepositoryError::query,
            connection: CampRepositoryError::connection,
            unique: |constraint| {
                if constraint == MONIKER_CONSTRAINT {
                    CampRepositoryError::conflict(format!("constraint {constraint} violated"))
                } else {
                    CampRepositoryError::query(format!("constraint {constraint} violated"))
                }
            },
        },
    )
}

fn camp_from_row(row: CampRow) -> Camp {
    let CampRow {
        camp_id: _,
        moniker,
        name,
        description,
        event_date,
        length,
        venue_name,
        address1,
        address2,
        address3,
        city_town,
        state_province,
        postal_code,
        country,
    } = row;

    let mut camp = Camp::new(Moniker::new(moniker), name, event_date);
    camp.description = description;
    camp.length = length;
    camp.location = Location {
        venue_name,
        address1,
        address2,
        address3,
        city_town,
        state_province,
        postal_code,
        country,
    };
    camp
}

fn camp_values(camp: &Camp) -> CampValues<'_> {
    let location = &camp.location;
    CampValues {
        moniker: camp.moniker().as_str(),
        name: camp.name.as_str(),
        description: camp.description.as_deref(),
        event_date: camp.event_date,
        length: camp.length,
        venue_name: location.venue_name.as_deref(),
        address1: location.address1.as_deref(),
        address2: location.address2.as_deref(),
        address3: location.address3.as_deref(),
        city_town: location.city_town.as_deref(),
        state_province: location.state_province.as_deref(),
        postal_code: location.postal_code.as_deref(),
        country: location.country.as_deref(),
    }
}

fn speaker_from_row(row: SpeakerRow) -> Speaker {
    let mut speaker = Speaker::new(SpeakerId::new(row.speaker_id), row.first_name, row.last_name);
    speaker.middle_name = row.middle_name;
    speaker.company = row.company;
    speaker.company_url = row.company_url;
    speaker.blog_url = row.blog_url;
    speaker.twitter = row.twitter;
    speaker.github = row.github;
    speaker
}

fn talk_from_row(row: TalkRow, camp: Moniker) -> Talk {
    Talk::new(
        TalkId::new(row.talk_id),
        camp,
        SpeakerId::new(row.speaker_id),
        TalkDraft {
            title: row.title,
            abstract_text: row.abstract_text,
            level: row.level,
        },
    )
}

fn talk_with_speaker(
    (talk, speaker): (TalkRow, SpeakerRow),
    camp: &Moniker,
    include_speaker: bool,
) -> Talk {
    let talk = talk_from_row(talk, camp.clone());
    if include_speaker {
        talk.with_speaker(speaker_from_row(speaker))
    } else {
        talk
    }
}

/// Turn camp rows into camps, loading every camp's talks in one query when
/// asked to.
async fn load_camps(
    conn: &mut AsyncPgConnection,
    rows: Vec<CampRow>,
    include_talks: bool,
) -> QueryResult<Vec<Camp>> {
    if !include_talks || rows.is_empty() {
        return Ok(rows.into_iter().map(camp_from_row).collect());
    }

    let camp_ids: Vec<i32> = rows.iter().map(|row| row.camp_id).collect();
    let talk_rows: Vec<(TalkRow, SpeakerRow)> = talks::table
        .inner_join(speakers::table)
        .filter(talks::camp_id.eq_any(&camp_ids))
        .order(talks::talk_id.asc())
        .select((TalkRow::as_select(), SpeakerRow::as_select()))
        .load(conn)
        .await?;

    let mut by_camp: HashMap<i32, Vec<(TalkRow, SpeakerRow)>> = HashMap::new();
    for pair in talk_rows {
        by_camp.entry(pair.0.camp_id).or_default().push(pair);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let owned = by_camp.remove(&row.camp_id).unwrap_or_default();
            let mut camp = camp_from_row(row);
            camp.talks = owned
                .into_iter()
                .map(|pair| talk_with_speaker(pair, camp.moniker(), true))
                .collect();
            camp
        })
        .collect())
}

/// Apply one staged change, adding what it touched to `receipt`.
async fn apply_change(
    conn: &mut AsyncPgConnection,
    change: Change,
    receipt: &mut CommitReceipt,
) -> QueryResult<()> {
    let affected = match change {
        Change::AddCamp(camp) => {
            diesel::insert_into(camps::table)
                .values(&camp_values(&camp))
                .execute(conn)
                .await?
        }
        Change::UpdateCamp(camp) => {
            diesel::update(camps::table.filter(camps::moniker.eq(camp.moniker().as_str())))
                .set(&camp_values(&camp))
                .execute(conn)
                .await?
        }
        Change::RemoveCamp(moniker) => {
            let owned = camps::table
                .filter(camps::moniker.eq(moniker.as_str()))
                .select(camps::camp_id);
            // The foreign key cascades too; deleting explicitly keeps the count.
            let removed_talks = diesel::delete(talks::table.filter(talks::camp_id.eq_any(owned)))
                .execute(conn)
                .await?;
            let removed_camps =
                diesel::delete(camps::table.filter(camps::moniker.eq(moniker.as_str())))
                    .execute(conn)
                    .await?;
            removed_talks + removed_camps
        }
        Change::AddTalk(new_talk) => {
            let camp_id: i32 = camps::table
                .filter(camps::moniker.eq(new_talk.camp().as_str()))
                .select(camps::camp_id)
                .first(conn)
                .await?;
            let draft = new_talk.draft();
            let row: TalkRow = diesel::insert_into(talks::table)
                .values(&NewTalkRow {
                    camp_id,
                    speaker_id: new_talk.speaker().id.get(),
                    title: draft.title.as_str(),
                    abstract_text: draft.abstract_text.as_str(),
                    level: draft.level,
                })
                .returning(TalkRow::as_returning())
                .get_result(conn)
                .await?;
            receipt
                .added_talks
                .push(new_talk.into_talk(TalkId::new(row.talk_id)));
            1
        }
        Change::UpdateTalk(talk) => {
            let owner = camps::table
                .filter(camps::moniker.eq(talk.camp().as_str()))
                .select(camps::camp_id);
            diesel::update(
                talks::table
                    .filter(talks::talk_id.eq(talk.id().get()))
                    .filter(talks::camp_id.eq_any(owner)),
            )
            .set(&TalkUpdate {
                speaker_id: talk.speaker_id().get(),
                title: talk.title.as_str(),
                abstract_text: talk.abstract_text.as_str(),
                level: talk.level,
            })
            .execute(conn)
            .await?
        }
        Change::RemoveTalk { camp, talk } => {
            let owner = camps::table
                .filter(camps::moniker.eq(camp.as_str()))
                .select(camps::camp_id);
            diesel::delete(
                talks::table
                    .filter(talks::talk_id.eq(talk.get()))
                    .filter(talks::camp_id.eq_any(owner)),
            )
            .execute(conn)
            .await?
        }
    };
    receipt.affected += affected;
    Ok(())
}

#[async_trait]
impl CampRepository for DieselCampRepository {
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, CampRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CampRow> = camps::table
            .order((camps::event_date.asc(), camps::moniker.asc()))
            .select(CampRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        load_camps(&mut conn, rows, include_talks)
            .await
            .map_err(map_diesel_error)
    }

    async fn find_camp(&self, moniker: &Moniker) -> Result<Option<Camp>, CampRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = camps::table
            .filter(camps::moniker.eq(moniker.as_str()))
            .select(CampRow::as_select())
            .first::<CampRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(camp_from_row))
    }

    async fn list_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, CampRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CampRow> = camps::table
            .filter(camps::event_date.eq(date))
            .order(camps::moniker.asc())
            .select(CampRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        load_camps(&mut conn, rows, include_talks)
            .await
            .map_err(map_diesel_error)
    }

    async fn find_speaker(&self, id: SpeakerId) -> Result<Option<Speaker>, CampRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = speakers::table
            .filter(speakers::speaker_id.eq(id.get()))
            .select(SpeakerRow::as_select())
            .first::<SpeakerRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(speaker_from_row))
    }

    async fn list_talks(
        &self,
        moniker: &Moniker,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, CampRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(TalkRow, SpeakerRow)> = talks::table
            .inner_join(camps::table)
            .inner_join(speakers::table)
            .filter(camps::moniker.eq(moniker.as_str()))
            .order(talks::talk_id.asc())
            .select((TalkRow::as_select(), SpeakerRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|pair| talk_with_speaker(pair, moniker, include_speakers))
            .collect())
    }

    async fn find_talk(
        &self,
        moniker: &Moniker,
        talk_id: TalkId,
        include_speaker: bool,
    ) -> Result<Option<Talk>, CampRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(TalkRow, SpeakerRow)> = talks::table
            .inner_join(camps::table)
            .inner_join(speakers::table)
            .filter(camps::moniker.eq(moniker.as_str()))
            .filter(talks::talk_id.eq(talk_id.get()))
            .select((TalkRow::as_select(), SpeakerRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|pair| talk_with_speaker(pair, moniker, include_speaker)))
    }

    async fn commit(&self, work: UnitOfWork) -> Result<CommitReceipt, CampRepositoryError> {
        if work.is_empty() {
            return Ok(CommitReceipt::unchanged());
        }
        let changes = work.into_changes();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let receipt = conn
            .transaction(|conn| {
                async move {
                    let mut receipt = CommitReceipt::unchanged();
                    for change in changes {
                        apply_change(conn, change, &mut receipt).await?;
                    }
                    Ok::<_, diesel::result::Error>(receipt)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        debug!(affected = receipt.affected, "camp store commit applied");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    //! Row mapping and error mapping coverage; queries run against a live
    //! database only.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn camp_row() -> CampRow {
        CampRow {
            camp_id: 1,
            moniker: "ATL2018".to_owned(),
            name: "Atlanta Code Camp".to_owned(),
            description: None,
            event_date: NaiveDate::from_ymd_opt(2018, 10, 18).expect("valid date"),
            length: 1,
            venue_name: Some("Atlanta Convention Center".to_owned()),
            address1: Some("123 Main Street".to_owned()),
            address2: None,
            address3: None,
            city_town: Some("Atlanta".to_owned()),
            state_province: Some("GA".to_owned()),
            postal_code: Some("12345".to_owned()),
            country: Some("USA".to_owned()),
        }
    }

    #[fixture]
    fn speaker_row() -> SpeakerRow {
        SpeakerRow {
            speaker_id: 2,
            first_name: "Resa".to_owned(),
            last_name: "Wildermuth".to_owned(),
            middle_name: None,
            company: Some("Wilder Minds LLC".to_owned()),
            company_url: None,
            blog_url: None,
            twitter: Some("resawildermuth".to_owned()),
            github: None,
        }
    }

    #[rstest]
    fn camp_rows_round_trip_through_values(camp_row: CampRow) {
        let camp = camp_from_row(camp_row);
        assert_eq!(camp.moniker().as_str(), "ATL2018");
        assert_eq!(
            camp.location.venue_name.as_deref(),
            Some("Atlanta Convention Center")
        );

        let values = camp_values(&camp);
        assert_eq!(values.moniker, "ATL2018");
        assert_eq!(values.venue_name, Some("Atlanta Convention Center"));
        assert_eq!(values.address2, None);
    }

    #[rstest]
    fn talk_rows_attach_speaker_on_request(speaker_row: SpeakerRow) {
        let talk_row = TalkRow {
            talk_id: 2,
            camp_id: 1,
            speaker_id: 2,
            title: "Writing Sample Data Made Easy".to_owned(),
            abstract_text: "Thinking of good sample data examples is tiring.".to_owned(),
            level: 200,
        };
        let moniker = Moniker::new("ATL2018");

        let with = talk_with_speaker((talk_row.clone(), speaker_row.clone()), &moniker, true);
        assert_eq!(with.speaker().map(|s| s.first_name.as_str()), Some("Resa"));

        let without = talk_with_speaker((talk_row, speaker_row), &moniker, false);
        assert!(without.speaker().is_none());
        assert_eq!(without.speaker_id(), SpeakerId::new(2));
    }

    struct ConstraintViolation(Option<&'static str>);

    impl diesel::result::DatabaseErrorInformation for ConstraintViolation {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.0
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn unique_violation(constraint: Option<&'static str>) -> CampRepositoryError {
        map_diesel_error(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new(ConstraintViolation(constraint)),
        ))
    }

    #[rstest]
    fn moniker_violation_maps_to_conflict() {
        let err = unique_violation(Some("camps_moniker_key"));
        assert!(matches!(err, CampRepositoryError::Conflict { .. }));
    }

    #[rstest]
    #[case(Some("talks_pkey"))]
    #[case(Some("speakers_pkey"))]
    #[case(None)]
    fn other_unique_violations_are_query_faults(#[case] constraint: Option<&'static str>) {
        let err = unique_violation(constraint);
        assert!(matches!(err, CampRepositoryError::Query { .. }));

        let mapped = crate::domain::camps_service::map_repository_error(err);
        assert_eq!(mapped.code(), crate::domain::ErrorCode::InternalError);
    }

    #[rstest]
    fn pool_checkout_failure_maps_to_connection() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, CampRepositoryError::connection("timed out"));
    }
}
