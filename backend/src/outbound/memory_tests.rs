//! Tests for the in-memory camp store.

use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn store() -> InMemoryCampRepository {
    InMemoryCampRepository::with_sample_data()
}

fn camp(moniker: &str, y: i32, m: u32, d: u32) -> Camp {
    let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
    Camp::new(Moniker::new(moniker), format!("{moniker} camp"), date)
}

fn draft(title: &str) -> TalkDraft {
    TalkDraft {
        title: title.to_owned(),
        abstract_text: "An abstract long enough to be accepted.".to_owned(),
        level: 200,
    }
}

#[rstest]
#[tokio::test]
async fn empty_commit_reports_no_change(store: InMemoryCampRepository) {
    let receipt = store
        .commit(UnitOfWork::new())
        .await
        .expect("commit succeeds");
    assert!(!receipt.is_changed());
}

#[rstest]
#[tokio::test]
async fn sample_camp_lists_talks_with_speakers(store: InMemoryCampRepository) {
    let camps = store.list_camps(true).await.expect("list succeeds");
    assert_eq!(camps.len(), 1);
    assert_eq!(camps[0].moniker().as_str(), "ATL2018");
    assert_eq!(camps[0].talks.len(), 2);
    assert!(camps[0].talks.iter().all(|talk| talk.speaker().is_some()));

    let without = store.list_camps(false).await.expect("list succeeds");
    assert!(without[0].talks.is_empty());
}

#[rstest]
#[tokio::test]
async fn camps_are_ordered_by_event_date() {
    let store = InMemoryCampRepository::new();
    let mut work = UnitOfWork::new();
    work.add_camp(camp("LATE", 2025, 6, 1));
    work.add_camp(camp("EARLY", 2024, 1, 1));
    store.commit(work).await.expect("commit succeeds");

    let monikers: Vec<String> = store
        .list_camps(false)
        .await
        .expect("list succeeds")
        .iter()
        .map(|camp| camp.moniker().to_string())
        .collect();
    assert_eq!(monikers, ["EARLY", "LATE"]);
}

#[rstest]
#[tokio::test]
async fn search_matches_exact_date(store: InMemoryCampRepository) {
    let hit = NaiveDate::from_ymd_opt(2018, 10, 18).expect("valid date");
    let miss = NaiveDate::from_ymd_opt(2018, 10, 19).expect("valid date");
    assert_eq!(
        store
            .list_camps_by_date(hit, false)
            .await
            .expect("search")
            .len(),
        1
    );
    assert!(
        store
            .list_camps_by_date(miss, false)
            .await
            .expect("search")
            .is_empty()
    );
}

#[rstest]
#[tokio::test]
async fn duplicate_moniker_leaves_store_unchanged(store: InMemoryCampRepository) {
    let mut work = UnitOfWork::new();
    work.add_camp(camp("NEW2024", 2024, 9, 14));
    work.add_camp(camp("ATL2018", 2024, 9, 14));

    let err = store.commit(work).await.expect_err("conflict");
    assert!(matches!(err, CampRepositoryError::Conflict { .. }));

    let missing = store
        .find_camp(&Moniker::new("NEW2024"))
        .await
        .expect("lookup");
    assert!(missing.is_none(), "partial commit must not be visible");
}

#[rstest]
#[tokio::test]
async fn added_talk_receives_next_id(store: InMemoryCampRepository) {
    let atl = store
        .find_camp(&Moniker::new("ATL2018"))
        .await
        .expect("lookup")
        .expect("sample camp");
    let speaker = store
        .find_speaker(SpeakerId::new(2))
        .await
        .expect("lookup")
        .expect("sample speaker");

    let mut work = UnitOfWork::new();
    work.add_talk(draft("Rust for C# developers").attach(&atl, speaker));
    let receipt = store.commit(work).await.expect("commit succeeds");

    assert_eq!(receipt.added_talks.len(), 1);
    let talk = &receipt.added_talks[0];
    assert_eq!(talk.id(), TalkId::new(3));

    let stored = store
        .find_talk(&Moniker::new("ATL2018"), TalkId::new(3), true)
        .await
        .expect("lookup")
        .expect("stored talk");
    assert_eq!(stored.speaker().map(|s| s.id), Some(SpeakerId::new(2)));
}

#[rstest]
#[tokio::test]
async fn talk_lookup_is_scoped_to_its_camp(store: InMemoryCampRepository) {
    let mut work = UnitOfWork::new();
    work.add_camp(camp("OTHER", 2024, 1, 1));
    store.commit(work).await.expect("commit succeeds");

    let found = store
        .find_talk(&Moniker::new("OTHER"), TalkId::new(1), false)
        .await
        .expect("lookup");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn removing_a_camp_removes_its_talks(store: InMemoryCampRepository) {
    let mut work = UnitOfWork::new();
    work.remove_camp(Moniker::new("ATL2018"));
    let receipt = store.commit(work).await.expect("commit succeeds");

    assert_eq!(receipt.affected, 3);
    assert!(
        store
            .list_talks(&Moniker::new("ATL2018"), false)
            .await
            .expect("list")
            .is_empty()
    );
}

#[rstest]
#[tokio::test]
async fn update_keeps_talks_and_moniker(store: InMemoryCampRepository) {
    let mut atl = store
        .find_camp(&Moniker::new("ATL2018"))
        .await
        .expect("lookup")
        .expect("sample camp");
    atl.name = "Atlanta Code Camp 2018".to_owned();

    let mut work = UnitOfWork::new();
    work.update_camp(atl);
    store.commit(work).await.expect("commit succeeds");

    let camps = store.list_camps(true).await.expect("list");
    assert_eq!(camps[0].name, "Atlanta Code Camp 2018");
    assert_eq!(camps[0].talks.len(), 2);
}

#[rstest]
#[tokio::test]
async fn removing_a_foreign_talk_changes_nothing(store: InMemoryCampRepository) {
    let mut work = UnitOfWork::new();
    work.remove_talk(Moniker::new("OTHER"), TalkId::new(1));
    let receipt = store.commit(work).await.expect("commit succeeds");
    assert!(!receipt.is_changed());
}

#[rstest]
#[tokio::test]
async fn inserted_speakers_are_resolvable() {
    let store = InMemoryCampRepository::new();
    store
        .insert_speaker(Speaker::new(SpeakerId::new(9), "Ada", "Lovelace"))
        .await;
    let found = store.find_speaker(SpeakerId::new(9)).await.expect("lookup");
    assert_eq!(found.map(|s| s.last_name), Some("Lovelace".to_owned()));
}
