//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{camps, speakers, talks};

/// Row struct for reading from the camps table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = camps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CampRow {
    pub camp_id: i32,
    pub moniker: String,
    pub name: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub length: i32,
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Column values shared by camp inserts and updates.
///
/// `None` writes `NULL` so clearing a location field is persisted.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = camps)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct CampValues<'a> {
    pub moniker: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub event_date: NaiveDate,
    pub length: i32,
    pub venue_name: Option<&'a str>,
    pub address1: Option<&'a str>,
    pub address2: Option<&'a str>,
    pub address3: Option<&'a str>,
    pub city_town: Option<&'a str>,
    pub state_province: Option<&'a str>,
    pub postal_code: Option<&'a str>,
    pub country: Option<&'a str>,
}

/// Row struct for reading from the speakers table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = speakers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SpeakerRow {
    pub speaker_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

/// Row struct for reading from the talks table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = talks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TalkRow {
    pub talk_id: i32,
    pub camp_id: i32,
    pub speaker_id: i32,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}

/// Insertable struct for creating talk records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = talks)]
pub(crate) struct NewTalkRow<'a> {
    pub camp_id: i32,
    pub speaker_id: i32,
    pub title: &'a str,
    pub abstract_text: &'a str,
    pub level: i32,
}

/// Changeset for talk updates. The owning camp never changes.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = talks)]
pub(crate) struct TalkUpdate<'a> {
    pub speaker_id: i32,
    pub title: &'a str,
    pub abstract_text: &'a str,
    pub level: i32,
}
