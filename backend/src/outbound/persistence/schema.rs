//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Conferences. `moniker` carries the `camps_moniker_key` unique
    /// constraint; the location columns are the flattened venue.
    camps (camp_id) {
        camp_id -> Int4,
        moniker -> Varchar,
        name -> Varchar,
        description -> Nullable<Text>,
        event_date -> Date,
        length -> Int4,
        venue_name -> Nullable<Varchar>,
        address1 -> Nullable<Varchar>,
        address2 -> Nullable<Varchar>,
        address3 -> Nullable<Varchar>,
        city_town -> Nullable<Varchar>,
        state_province -> Nullable<Varchar>,
        postal_code -> Nullable<Varchar>,
        country -> Nullable<Varchar>,
    }
}

diesel::table! {
    speakers (speaker_id) {
        speaker_id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        middle_name -> Nullable<Varchar>,
        company -> Nullable<Varchar>,
        company_url -> Nullable<Varchar>,
        blog_url -> Nullable<Varchar>,
        twitter -> Nullable<Varchar>,
        github -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Talks. Rows are removed with their camp (`ON DELETE CASCADE`).
    talks (talk_id) {
        talk_id -> Int4,
        camp_id -> Int4,
        speaker_id -> Int4,
        title -> Varchar,
        #[sql_name = "abstract"]
        abstract_text -> Varchar,
        level -> Int4,
    }
}

diesel::joinable!(talks -> camps (camp_id));
diesel::joinable!(talks -> speakers (speaker_id));

diesel::allow_tables_to_appear_in_same_query!(camps, speakers, talks);
