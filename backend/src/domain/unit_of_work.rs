//! Per-request staging area for store mutations.
//!
//! Handlers stage changes on a [`UnitOfWork`] and hand it to
//! [`crate::domain::ports::CampRepository::commit`], which applies every
//! staged change atomically. Staging alone never touches the store.

use super::{Camp, Moniker, NewTalk, Talk, TalkId};

/// One staged mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    AddCamp(Camp),
    /// Scalar and location fields of an existing camp. Talks are untouched.
    UpdateCamp(Camp),
    /// Removes the camp and every talk it owns.
    RemoveCamp(Moniker),
    AddTalk(NewTalk),
    UpdateTalk(Talk),
    RemoveTalk { camp: Moniker, talk: TalkId },
}

/// Ordered set of staged changes.
///
/// # Examples
/// ```
/// use camps_backend::domain::{Moniker, UnitOfWork};
///
/// let mut work = UnitOfWork::new();
/// assert!(work.is_empty());
/// work.remove_camp(Moniker::new("ATL2024"));
/// assert_eq!(work.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitOfWork {
    changes: Vec<Change>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_camp(&mut self, camp: Camp) {
        self.changes.push(Change::AddCamp(camp));
    }

    pub fn update_camp(&mut self, camp: Camp) {
        self.changes.push(Change::UpdateCamp(camp));
    }

    pub fn remove_camp(&mut self, moniker: Moniker) {
        self.changes.push(Change::RemoveCamp(moniker));
    }

    pub fn add_talk(&mut self, talk: NewTalk) {
        self.changes.push(Change::AddTalk(talk));
    }

    pub fn update_talk(&mut self, talk: Talk) {
        self.changes.push(Change::UpdateTalk(talk));
    }

    pub fn remove_talk(&mut self, camp: Moniker, talk: TalkId) {
        self.changes.push(Change::RemoveTalk { camp, talk });
    }

    /// Whether nothing has been staged.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Staged changes in staging order.
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }
}

/// Outcome of a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReceipt {
    /// Number of records written or removed.
    pub affected: usize,
    /// Talks inserted by the commit, with their assigned ids, in staging order.
    pub added_talks: Vec<Talk>,
}

impl CommitReceipt {
    /// Receipt for a commit that left the store as it was.
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// Whether the commit changed anything.
    pub fn is_changed(&self) -> bool {
        self.affected > 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn changes_keep_staging_order() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 14).expect("valid date");
        let camp = Camp::new(Moniker::new("ATL2024"), "Atlanta Code Camp", date);

        let mut work = UnitOfWork::new();
        work.add_camp(camp.clone());
        work.remove_talk(Moniker::new("ATL2024"), TalkId::new(4));

        assert_eq!(
            work.into_changes(),
            vec![
                Change::AddCamp(camp),
                Change::RemoveTalk {
                    camp: Moniker::new("ATL2024"),
                    talk: TalkId::new(4),
                },
            ]
        );
    }

    #[rstest]
    #[case(0, false)]
    #[case(2, true)]
    fn receipt_reports_change(#[case] affected: usize, #[case] expected: bool) {
        let receipt = CommitReceipt {
            affected,
            added_talks: Vec::new(),
        };
        assert_eq!(receipt.is_changed(), expected);
    }
}
