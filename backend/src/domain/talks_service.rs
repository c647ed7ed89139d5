//! Talk use-cases.
//!
//! Talks are always addressed through their owning camp's moniker. Creation
//! resolves the camp and the speaker before anything is staged; updates merge
//! scalar fields and only reassign the speaker when the referenced speaker
//! exists.

use std::sync::Arc;

use async_trait::async_trait;

use super::camps_service::map_repository_error;
use crate::domain::ports::{
    CampRepository, CreateTalkRequest, Created, DeleteTalkRequest, GetTalkRequest,
    ListTalksRequest, TalksCommand, TalksQuery, UpdateTalkRequest,
};
use crate::domain::validation::{
    missing_field, require_talk_fields, validate_talk, validate_talk_draft,
};
use crate::domain::{
    CommitReceipt, Error, Moniker, Representation, ResourceLocator, Speaker, SpeakerId, Talk,
    TalkId, TalkModel, UnitOfWork,
};

fn talk_missing() -> Error {
    Error::not_found("Talk with provided id was not found")
}

/// Talk service implementing [`TalksQuery`] and [`TalksCommand`].
#[derive(Clone)]
pub struct TalkService<R> {
    camp_repo: Arc<R>,
    locator: ResourceLocator,
}

impl<R> TalkService<R> {
    /// Create a service over `camp_repo` that builds locations with `locator`.
    pub fn new(camp_repo: Arc<R>, locator: ResourceLocator) -> Self {
        Self { camp_repo, locator }
    }
}

impl<R> TalkService<R>
where
    R: CampRepository,
{
    async fn find_talk(
        &self,
        moniker: &Moniker,
        talk_id: TalkId,
        include_speaker: bool,
    ) -> Result<Option<Talk>, Error> {
        self.camp_repo
            .find_talk(moniker, talk_id, include_speaker)
            .await
            .map_err(map_repository_error)
    }

    async fn find_speaker(&self, id: SpeakerId) -> Result<Option<Speaker>, Error> {
        self.camp_repo
            .find_speaker(id)
            .await
            .map_err(map_repository_error)
    }

    async fn commit(&self, work: UnitOfWork) -> Result<CommitReceipt, Error> {
        self.camp_repo
            .commit(work)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> TalksQuery for TalkService<R>
where
    R: CampRepository,
{
    async fn list_talks(&self, request: ListTalksRequest) -> Result<Vec<TalkModel>, Error> {
        let talks = self
            .camp_repo
            .list_talks(&Moniker::new(request.moniker), true)
            .await
            .map_err(map_repository_error)?;
        Ok(talks.iter().map(TalkModel::from_entity).collect())
    }

    async fn get_talk(&self, request: GetTalkRequest) -> Result<TalkModel, Error> {
        let moniker = Moniker::new(request.moniker);
        let talk = self
            .find_talk(&moniker, TalkId::new(request.talk_id), true)
            .await?
            .ok_or_else(|| Error::invalid_request("Talk was not found for this camp"))?;
        Ok(TalkModel::from_entity(&talk))
    }
}

#[async_trait]
impl<R> TalksCommand for TalkService<R>
where
    R: CampRepository,
{
    async fn create_talk(&self, request: CreateTalkRequest) -> Result<Created<TalkModel>, Error> {
        let moniker = Moniker::new(request.moniker);
        let model = request.talk;

        let camp = self
            .camp_repo
            .find_camp(&moniker)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::invalid_request("Camp does not exist"))?;
        let speaker_id = model
            .speaker_reference()
            .ok_or_else(|| Error::invalid_request("Speaker ID is required"))?;
        let speaker = self
            .find_speaker(speaker_id)
            .await?
            .ok_or_else(|| Error::invalid_request("Speaker could not be found"))?;

        require_talk_fields(&model)?;
        let draft = model.to_entity();
        validate_talk_draft(&draft)?;
        let location = self
            .locator
            .camp(camp.moniker())
            .map_err(|_| Error::invalid_request("Could not use current moniker"))?;

        let mut work = UnitOfWork::new();
        work.add_talk(draft.attach(&camp, speaker));
        let receipt = self.commit(work).await?;
        if !receipt.is_changed() {
            return Err(Error::invalid_request("Failed to create the talk"));
        }
        let talk = receipt
            .added_talks
            .into_iter()
            .next()
            .ok_or_else(|| Error::internal("commit reported no inserted talk"))?;

        Ok(Created {
            location: location.talk(talk.id()),
            representation: TalkModel::from_entity(&talk),
        })
    }

    async fn update_talk(&self, request: UpdateTalkRequest) -> Result<TalkModel, Error> {
        let moniker = Moniker::new(request.moniker);
        let model = request.talk;
        let talk_id = model
            .talk_id
            .map(TalkId::new)
            .ok_or_else(|| missing_field("talkId"))?;

        let original = self
            .find_talk(&moniker, talk_id, true)
            .await?
            .ok_or_else(talk_missing)?;

        let mut talk = original.clone();
        model.apply_to(&mut talk);
        if let Some(speaker_id) = model.speaker_reference() {
            // An unknown speaker keeps the current assignment.
            if let Some(speaker) = self.find_speaker(speaker_id).await? {
                talk.assign_speaker(speaker);
            }
        }
        validate_talk(&talk)?;

        let mut work = UnitOfWork::new();
        if talk != original {
            work.update_talk(talk.clone());
        }
        if !self.commit(work).await?.is_changed() {
            return Err(Error::invalid_request("Failed to update the talk"));
        }

        Ok(TalkModel::from_entity(&talk))
    }

    async fn delete_talk(&self, request: DeleteTalkRequest) -> Result<(), Error> {
        let moniker = Moniker::new(request.moniker);
        let talk = self
            .find_talk(&moniker, TalkId::new(request.talk_id), false)
            .await?
            .ok_or_else(talk_missing)?;

        let mut work = UnitOfWork::new();
        work.remove_talk(talk.camp().clone(), talk.id());
        if !self.commit(work).await?.is_changed() {
            return Err(Error::invalid_request("Failed to delete the talk"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "talks_service_tests.rs"]
mod tests;
