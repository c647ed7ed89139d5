//! Talks and the staged shape of a talk that has not been persisted yet.
//!
//! A talk is owned by one camp and references one speaker. Neither reference
//! can be changed through scalar edits: the camp is fixed when the talk is
//! created and the speaker only changes through [`Talk::assign_speaker`].

use super::{Camp, Moniker, Speaker, SpeakerId};

/// Numeric talk identifier, assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TalkId(i32);

impl TalkId {
    /// Wrap a raw identifier.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for TalkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scalar attributes of a talk without any relationship attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalkDraft {
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}

impl TalkDraft {
    /// Bind the draft to its owning camp and speaker.
    pub fn attach(self, camp: &Camp, speaker: Speaker) -> NewTalk {
        NewTalk {
            camp: camp.moniker().clone(),
            speaker,
            draft: self,
        }
    }
}

/// A talk staged for insertion. Carries both references by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTalk {
    camp: Moniker,
    speaker: Speaker,
    draft: TalkDraft,
}

impl NewTalk {
    /// Moniker of the owning camp.
    pub fn camp(&self) -> &Moniker {
        &self.camp
    }

    /// The resolved speaker.
    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    /// Scalar attributes.
    pub fn draft(&self) -> &TalkDraft {
        &self.draft
    }

    /// Materialise the persisted talk once the store has assigned an id.
    pub fn into_talk(self, id: TalkId) -> Talk {
        let NewTalk {
            camp,
            speaker,
            draft,
        } = self;
        Talk::new(id, camp, speaker.id, draft).with_speaker(speaker)
    }
}

/// A persisted talk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    id: TalkId,
    camp: Moniker,
    speaker_id: SpeakerId,
    speaker: Option<Speaker>,
    pub title: String,
    pub abstract_text: String,
    pub level: i32,
}

impl Talk {
    /// Rebuild a talk from stored values. The speaker is not loaded.
    pub fn new(id: TalkId, camp: Moniker, speaker_id: SpeakerId, draft: TalkDraft) -> Self {
        let TalkDraft {
            title,
            abstract_text,
            level,
        } = draft;
        Self {
            id,
            camp,
            speaker_id,
            speaker: None,
            title,
            abstract_text,
            level,
        }
    }

    /// Attach the loaded speaker record.
    #[must_use]
    pub fn with_speaker(mut self, speaker: Speaker) -> Self {
        self.assign_speaker(speaker);
        self
    }

    /// Point the talk at a different, already resolved speaker.
    pub fn assign_speaker(&mut self, speaker: Speaker) {
        self.speaker_id = speaker.id;
        self.speaker = Some(speaker);
    }

    pub fn id(&self) -> TalkId {
        self.id
    }

    /// Moniker of the owning camp.
    pub fn camp(&self) -> &Moniker {
        &self.camp
    }

    pub fn speaker_id(&self) -> SpeakerId {
        self.speaker_id
    }

    /// The speaker record, when it was loaded with the talk.
    pub fn speaker(&self) -> Option<&Speaker> {
        self.speaker.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn camp() -> Camp {
        let date = NaiveDate::from_ymd_opt(2024, 9, 14).expect("valid date");
        Camp::new(Moniker::new("ATL2024"), "Atlanta Code Camp", date)
    }

    #[rstest]
    fn attached_draft_carries_both_references() {
        let speaker = Speaker::new(SpeakerId::new(7), "Ada", "Lovelace");
        let new_talk = TalkDraft {
            title: "Engines".to_owned(),
            abstract_text: "Analytical engines and their programs".to_owned(),
            level: 200,
        }
        .attach(&camp(), speaker.clone());

        let talk = new_talk.into_talk(TalkId::new(3));
        assert_eq!(talk.id(), TalkId::new(3));
        assert_eq!(talk.camp().as_str(), "ATL2024");
        assert_eq!(talk.speaker_id(), SpeakerId::new(7));
        assert_eq!(talk.speaker(), Some(&speaker));
    }

    #[rstest]
    fn assigning_a_speaker_updates_the_reference() {
        let mut talk = Talk::new(
            TalkId::new(1),
            Moniker::new("ATL2024"),
            SpeakerId::new(1),
            TalkDraft::default(),
        );
        talk.assign_speaker(Speaker::new(SpeakerId::new(2), "Grace", "Hopper"));
        assert_eq!(talk.speaker_id(), SpeakerId::new(2));
    }
}
