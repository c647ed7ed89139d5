//! Wire-level representations of camps, talks and speakers.
//!
//! Representations are flattened views of the entities. Every field is
//! optional so the same type serves as a full response body and as a
//! partial request body: a field that is absent (or `null`) in a request
//! means "not supplied". Conversion rules live in [`super::mapping`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SpeakerId;

/// Representation of a camp with its venue flattened into `venue` and
/// `location*` fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampModel {
    pub moniker: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub length: Option<i32>,
    /// Derived from `Location::venue_name`.
    pub venue: Option<String>,
    pub location_address1: Option<String>,
    pub location_address2: Option<String>,
    pub location_address3: Option<String>,
    pub location_city_town: Option<String>,
    pub location_state_province: Option<String>,
    pub location_postal_code: Option<String>,
    pub location_country: Option<String>,
    /// Nested venue accepted on writes. The flattened fields win when both
    /// are supplied; responses always use the flattened form.
    #[serde(skip_serializing)]
    pub location: Option<LocationModel>,
    /// Output only; ignored when a representation is written to a camp.
    pub talks: Vec<TalkModel>,
}

/// Nested form of a camp's venue, as clients that mirror the entity send it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationModel {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Representation of a talk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalkModel {
    pub talk_id: Option<i32>,
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<SpeakerModel>,
}

impl TalkModel {
    /// The speaker the client referenced, if any.
    ///
    /// # Examples
    /// ```
    /// use camps_backend::domain::{SpeakerId, SpeakerModel, TalkModel};
    ///
    /// let model = TalkModel {
    ///     speaker: Some(SpeakerModel { speaker_id: Some(4), ..SpeakerModel::default() }),
    ///     ..TalkModel::default()
    /// };
    /// assert_eq!(model.speaker_reference(), Some(SpeakerId::new(4)));
    /// assert_eq!(TalkModel::default().speaker_reference(), None);
    /// ```
    pub fn speaker_reference(&self) -> Option<SpeakerId> {
        self.speaker
            .as_ref()
            .and_then(|speaker| speaker.speaker_id)
            .map(SpeakerId::new)
    }
}

/// Representation of a speaker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeakerModel {
    pub speaker_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    #[serde(rename = "gitHub")]
    pub github: Option<String>,
}
