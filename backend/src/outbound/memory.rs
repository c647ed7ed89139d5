//! In-process camp store.
//!
//! Backs the service when no database is configured and in HTTP tests.
//! Commits stage every change against a copy of the state and swap it in
//! under the write lock, so a failing change leaves the store untouched.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{CampRepository, CampRepositoryError};
use crate::domain::{
    Camp, Change, CommitReceipt, Location, Moniker, Speaker, SpeakerId, Talk, TalkDraft, TalkId,
    UnitOfWork,
};

#[derive(Debug, Clone, Default)]
struct StoreState {
    camps: BTreeMap<Moniker, Camp>,
    speakers: BTreeMap<SpeakerId, Speaker>,
    talks: BTreeMap<TalkId, Talk>,
    next_talk_id: i32,
}

/// Talks are stored without their speaker record so a speaker is never
/// duplicated per talk.
fn detached(talk: &Talk) -> Talk {
    Talk::new(
        talk.id(),
        talk.camp().clone(),
        talk.speaker_id(),
        TalkDraft {
            title: talk.title.clone(),
            abstract_text: talk.abstract_text.clone(),
            level: talk.level,
        },
    )
}

impl StoreState {
    fn talk_with_speaker(&self, talk: &Talk, include_speaker: bool) -> Talk {
        match self.speakers.get(&talk.speaker_id()) {
            Some(speaker) if include_speaker => talk.clone().with_speaker(speaker.clone()),
            _ => talk.clone(),
        }
    }

    fn talks_of(&self, moniker: &Moniker, include_speakers: bool) -> Vec<Talk> {
        self.talks
            .values()
            .filter(|talk| talk.camp() == moniker)
            .map(|talk| self.talk_with_speaker(talk, include_speakers))
            .collect()
    }

    fn camps_where(&self, include_talks: bool, keep: impl Fn(&Camp) -> bool) -> Vec<Camp> {
        let mut camps: Vec<Camp> = self
            .camps
            .values()
            .filter(|camp| keep(camp))
            .cloned()
            .map(|mut camp| {
                if include_talks {
                    camp.talks = self.talks_of(camp.moniker(), true);
                }
                camp
            })
            .collect();
        camps.sort_by(|a, b| {
            a.event_date
                .cmp(&b.event_date)
                .then_with(|| a.moniker().cmp(b.moniker()))
        });
        camps
    }

    fn require_speaker(&self, id: SpeakerId) -> Result<(), CampRepositoryError> {
        if self.speakers.contains_key(&id) {
            Ok(())
        } else {
            Err(CampRepositoryError::query(format!(
                "speaker {id} does not exist"
            )))
        }
    }

    fn apply(
        &mut self,
        change: Change,
        receipt: &mut CommitReceipt,
    ) -> Result<(), CampRepositoryError> {
        match change {
            Change::AddCamp(mut camp) => {
                if self.camps.contains_key(camp.moniker()) {
                    return Err(CampRepositoryError::conflict(format!(
                        "moniker {} already exists",
                        camp.moniker()
                    )));
                }
                camp.talks.clear();
                self.camps.insert(camp.moniker().clone(), camp);
                receipt.affected += 1;
            }
            Change::UpdateCamp(mut camp) => {
                if let Some(stored) = self.camps.get_mut(camp.moniker()) {
                    camp.talks.clear();
                    *stored = camp;
                    receipt.affected += 1;
                }
            }
            Change::RemoveCamp(moniker) => {
                if self.camps.remove(&moniker).is_some() {
                    let before = self.talks.len();
                    self.talks.retain(|_, talk| talk.camp() != &moniker);
                    receipt.affected += 1 + before - self.talks.len();
                }
            }
            Change::AddTalk(new_talk) => {
                if !self.camps.contains_key(new_talk.camp()) {
                    return Err(CampRepositoryError::query(format!(
                        "camp {} does not exist",
                        new_talk.camp()
                    )));
                }
                self.require_speaker(new_talk.speaker().id)?;
                self.next_talk_id += 1;
                let talk = new_talk.into_talk(TalkId::new(self.next_talk_id));
                self.talks.insert(talk.id(), detached(&talk));
                receipt.added_talks.push(talk);
                receipt.affected += 1;
            }
            Change::UpdateTalk(talk) => {
                self.require_speaker(talk.speaker_id())?;
                match self.talks.get_mut(&talk.id()) {
                    Some(stored) if stored.camp() == talk.camp() => {
                        *stored = detached(&talk);
                        receipt.affected += 1;
                    }
                    _ => {}
                }
            }
            Change::RemoveTalk { camp, talk } => {
                let owned = self
                    .talks
                    .get(&talk)
                    .is_some_and(|stored| stored.camp() == &camp);
                if owned {
                    self.talks.remove(&talk);
                    receipt.affected += 1;
                }
            }
        }
        Ok(())
    }
}

/// [`CampRepository`] held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryCampRepository {
    state: RwLock<StoreState>,
}

impl InMemoryCampRepository {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample camp, its two talks and their speakers.
    pub fn with_sample_data() -> Self {
        let mut state = StoreState::default();
        let (camp, speakers, talks) = sample_data();
        state.camps.insert(camp.moniker().clone(), camp);
        for speaker in speakers {
            state.speakers.insert(speaker.id, speaker);
        }
        for talk in talks {
            state.next_talk_id = state.next_talk_id.max(talk.id().get());
            state.talks.insert(talk.id(), talk);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Register a speaker. Speakers are read-only through the API.
    pub async fn insert_speaker(&self, speaker: Speaker) {
        self.state.write().await.speakers.insert(speaker.id, speaker);
    }
}

#[async_trait]
impl CampRepository for InMemoryCampRepository {
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, CampRepositoryError> {
        Ok(self.state.read().await.camps_where(include_talks, |_| true))
    }

    async fn find_camp(&self, moniker: &Moniker) -> Result<Option<Camp>, CampRepositoryError> {
        Ok(self.state.read().await.camps.get(moniker).cloned())
    }

    async fn list_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, CampRepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .camps_where(include_talks, |camp| camp.event_date == date))
    }

    async fn find_speaker(&self, id: SpeakerId) -> Result<Option<Speaker>, CampRepositoryError> {
        Ok(self.state.read().await.speakers.get(&id).cloned())
    }

    async fn list_talks(
        &self,
        moniker: &Moniker,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, CampRepositoryError> {
        Ok(self.state.read().await.talks_of(moniker, include_speakers))
    }

    async fn find_talk(
        &self,
        moniker: &Moniker,
        talk_id: TalkId,
        include_speaker: bool,
    ) -> Result<Option<Talk>, CampRepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .talks
            .get(&talk_id)
            .filter(|talk| talk.camp() == moniker)
            .map(|talk| state.talk_with_speaker(talk, include_speaker)))
    }

    async fn commit(&self, work: UnitOfWork) -> Result<CommitReceipt, CampRepositoryError> {
        if work.is_empty() {
            return Ok(CommitReceipt::unchanged());
        }

        let mut guard = self.state.write().await;
        let mut staged = guard.clone();
        let mut receipt = CommitReceipt::unchanged();
        for change in work.into_changes() {
            staged.apply(change, &mut receipt)?;
        }
        *guard = staged;
        debug!(affected = receipt.affected, "in-memory commit applied");
        Ok(receipt)
    }
}

/// The sample camp `ATL2018` with two talks by two speakers.
pub fn sample_data() -> (Camp, Vec<Speaker>, Vec<Talk>) {
    let moniker = Moniker::new("ATL2018");
    let date = NaiveDate::from_ymd_opt(2018, 10, 18).unwrap_or_default();
    let mut camp = Camp::new(moniker.clone(), "Atlanta Code Camp", date);
    camp.location = Location {
        venue_name: Some("Atlanta Convention Center".to_owned()),
        address1: Some("123 Main Street".to_owned()),
        city_town: Some("Atlanta".to_owned()),
        state_province: Some("GA".to_owned()),
        postal_code: Some("12345".to_owned()),
        country: Some("USA".to_owned()),
        ..Location::default()
    };

    let mut shawn = Speaker::new(SpeakerId::new(1), "Shawn", "Wildermuth");
    shawn.company = Some("Wilder Minds LLC".to_owned());
    shawn.company_url = Some("http://wilderminds.com".to_owned());
    shawn.blog_url = Some("http://wildermuth.com".to_owned());
    shawn.twitter = Some("shawnwildermuth".to_owned());
    shawn.github = Some("shawnwildermuth".to_owned());

    let mut resa = Speaker::new(SpeakerId::new(2), "Resa", "Wildermuth");
    resa.company = Some("Wilder Minds LLC".to_owned());
    resa.company_url = Some("http://wilderminds.com".to_owned());
    resa.blog_url = Some("http://shawnandresa.com".to_owned());
    resa.twitter = Some("resawildermuth".to_owned());
    resa.github = Some("resawildermuth".to_owned());

    let talks = vec![
        Talk::new(
            TalkId::new(1),
            moniker.clone(),
            shawn.id,
            TalkDraft {
                title: "Entity Framework From Scratch".to_owned(),
                abstract_text: "Working with Entity Framework is easier than you think"
                    .to_owned(),
                level: 100,
            },
        ),
        Talk::new(
            TalkId::new(2),
            moniker,
            resa.id,
            TalkDraft {
                title: "Writing Sample Data Made Easy".to_owned(),
                abstract_text: "Thinking of good sample data examples is tiring.".to_owned(),
                level: 200,
            },
        ),
    ];

    (camp, vec![shawn, resa], talks)
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
