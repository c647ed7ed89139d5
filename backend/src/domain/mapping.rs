//! Correspondence rules between entities and their representations.
//!
//! Each representation implements [`Representation`]:
//!
//! - `from_entity` builds the outgoing view;
//! - `apply_to` merges the supplied fields of an incoming view onto an
//!   existing entity, leaving absent fields untouched;
//! - `to_entity` materialises a brand-new entity (or, for talks, a draft that
//!   still needs its relationships attached).
//!
//! The conversions are total and never validate. Relationship fields are
//! never written from a representation: a camp's moniker and talks, and a
//! talk's camp and speaker, only change through deliberate handler steps.

use super::{
    Camp, CampModel, Location, LocationModel, Moniker, Speaker, SpeakerId, SpeakerModel, Talk,
    TalkDraft, TalkModel,
};

/// Bidirectional mapping between an entity and its representation.
pub trait Representation {
    /// The persisted entity.
    type Entity;
    /// What [`Representation::to_entity`] produces.
    type Draft;

    /// Build the representation of `entity`.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Merge the supplied fields onto `entity`.
    fn apply_to(&self, entity: &mut Self::Entity);

    /// Create a new entity from the supplied fields.
    fn to_entity(&self) -> Self::Draft;
}

fn merge<T: Clone>(target: &mut T, incoming: Option<&T>) {
    if let Some(value) = incoming {
        target.clone_from(value);
    }
}

fn merge_optional<T: Clone>(target: &mut Option<T>, incoming: Option<&T>) {
    if let Some(value) = incoming {
        *target = Some(value.clone());
    }
}

/// The flat field when supplied, otherwise the matching nested one.
fn flat_or_nested<'a>(
    flat: &'a Option<String>,
    nested: Option<&'a LocationModel>,
    field: fn(&LocationModel) -> &Option<String>,
) -> Option<&'a String> {
    flat.as_ref()
        .or_else(|| nested.and_then(|location| field(location).as_ref()))
}

impl CampModel {
    /// Location described by the flattened `venue` and `location*` fields,
    /// falling back to the nested `location` for fields left flat-empty.
    ///
    /// # Examples
    /// ```
    /// use camps_backend::domain::CampModel;
    ///
    /// let model = CampModel {
    ///     venue: Some("Convention Center".to_owned()),
    ///     ..CampModel::default()
    /// };
    /// assert_eq!(model.location().venue_name.as_deref(), Some("Convention Center"));
    /// ```
    pub fn location(&self) -> Location {
        let mut location = Location::default();
        self.merge_location(&mut location);
        location
    }

    /// Flatten `location` into the `venue` and `location*` fields.
    pub fn set_location(&mut self, location: &Location) {
        self.venue.clone_from(&location.venue_name);
        self.location_address1.clone_from(&location.address1);
        self.location_address2.clone_from(&location.address2);
        self.location_address3.clone_from(&location.address3);
        self.location_city_town.clone_from(&location.city_town);
        self.location_state_province
            .clone_from(&location.state_province);
        self.location_postal_code.clone_from(&location.postal_code);
        self.location_country.clone_from(&location.country);
    }

    fn merge_location(&self, location: &mut Location) {
        let nested = self.location.as_ref();
        merge_optional(
            &mut location.venue_name,
            flat_or_nested(&self.venue, nested, |n| &n.venue_name),
        );
        merge_optional(
            &mut location.address1,
            flat_or_nested(&self.location_address1, nested, |n| &n.address1),
        );
        merge_optional(
            &mut location.address2,
            flat_or_nested(&self.location_address2, nested, |n| &n.address2),
        );
        merge_optional(
            &mut location.address3,
            flat_or_nested(&self.location_address3, nested, |n| &n.address3),
        );
        merge_optional(
            &mut location.city_town,
            flat_or_nested(&self.location_city_town, nested, |n| &n.city_town),
        );
        merge_optional(
            &mut location.state_province,
            flat_or_nested(&self.location_state_province, nested, |n| &n.state_province),
        );
        merge_optional(
            &mut location.postal_code,
            flat_or_nested(&self.location_postal_code, nested, |n| &n.postal_code),
        );
        merge_optional(
            &mut location.country,
            flat_or_nested(&self.location_country, nested, |n| &n.country),
        );
    }
}

impl Representation for CampModel {
    type Entity = Camp;
    type Draft = Camp;

    fn from_entity(camp: &Camp) -> Self {
        let mut model = Self {
            moniker: Some(camp.moniker().to_string()),
            name: Some(camp.name.clone()),
            description: camp.description.clone(),
            event_date: Some(camp.event_date),
            length: Some(camp.length),
            talks: camp.talks.iter().map(TalkModel::from_entity).collect(),
            ..Self::default()
        };
        model.set_location(&camp.location);
        model
    }

    /// The moniker is immutable and the talks collection is output only, so
    /// neither is touched here.
    fn apply_to(&self, camp: &mut Camp) {
        merge(&mut camp.name, self.name.as_ref());
        merge_optional(&mut camp.description, self.description.as_ref());
        merge(&mut camp.event_date, self.event_date.as_ref());
        merge(&mut camp.length, self.length.as_ref());
        self.merge_location(&mut camp.location);
    }

    fn to_entity(&self) -> Camp {
        let mut camp = Camp::new(
            Moniker::new(self.moniker.clone().unwrap_or_default()),
            self.name.clone().unwrap_or_default(),
            self.event_date.unwrap_or_default(),
        );
        self.apply_to(&mut camp);
        camp
    }
}

impl Representation for TalkModel {
    type Entity = Talk;
    type Draft = TalkDraft;

    fn from_entity(talk: &Talk) -> Self {
        Self {
            talk_id: Some(talk.id().get()),
            title: Some(talk.title.clone()),
            abstract_text: Some(talk.abstract_text.clone()),
            level: Some(talk.level),
            speaker: talk.speaker().map(SpeakerModel::from_entity),
        }
    }

    /// Scalar fields only. The camp and speaker references are left alone
    /// even when the representation carries a nested speaker.
    fn apply_to(&self, talk: &mut Talk) {
        merge(&mut talk.title, self.title.as_ref());
        merge(&mut talk.abstract_text, self.abstract_text.as_ref());
        merge(&mut talk.level, self.level.as_ref());
    }

    fn to_entity(&self) -> TalkDraft {
        TalkDraft {
            title: self.title.clone().unwrap_or_default(),
            abstract_text: self.abstract_text.clone().unwrap_or_default(),
            level: self.level.unwrap_or_default(),
        }
    }
}

impl Representation for SpeakerModel {
    type Entity = Speaker;
    type Draft = Speaker;

    fn from_entity(speaker: &Speaker) -> Self {
        Self {
            speaker_id: Some(speaker.id.get()),
            first_name: Some(speaker.first_name.clone()),
            last_name: Some(speaker.last_name.clone()),
            middle_name: speaker.middle_name.clone(),
            company: speaker.company.clone(),
            company_url: speaker.company_url.clone(),
            blog_url: speaker.blog_url.clone(),
            twitter: speaker.twitter.clone(),
            github: speaker.github.clone(),
        }
    }

    fn apply_to(&self, speaker: &mut Speaker) {
        if let Some(id) = self.speaker_id {
            speaker.id = SpeakerId::new(id);
        }
        merge(&mut speaker.first_name, self.first_name.as_ref());
        merge(&mut speaker.last_name, self.last_name.as_ref());
        merge_optional(&mut speaker.middle_name, self.middle_name.as_ref());
        merge_optional(&mut speaker.company, self.company.as_ref());
        merge_optional(&mut speaker.company_url, self.company_url.as_ref());
        merge_optional(&mut speaker.blog_url, self.blog_url.as_ref());
        merge_optional(&mut speaker.twitter, self.twitter.as_ref());
        merge_optional(&mut speaker.github, self.github.as_ref());
    }

    fn to_entity(&self) -> Speaker {
        let mut speaker = Speaker::new(SpeakerId::new(0), String::new(), String::new());
        self.apply_to(&mut speaker);
        speaker
    }
}
