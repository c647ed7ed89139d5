//! Camp aggregate: the conference, its venue and its talks.

use chrono::NaiveDate;

use super::Talk;

const MAX_MONIKER_LEN: usize = 64;

/// Human-chosen unique key of a camp, e.g. `ATL2024`.
///
/// Any string can be wrapped so lookups by arbitrary path values work; only
/// well-formed monikers can be turned into a resource location (see
/// [`Moniker::is_well_formed`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Moniker(String);

impl Moniker {
    /// Wrap a raw moniker.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the moniker text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the moniker can be used as a single URL path segment.
    ///
    /// # Examples
    /// ```
    /// use camps_backend::domain::Moniker;
    ///
    /// assert!(Moniker::new("ATL2024").is_well_formed());
    /// assert!(!Moniker::new("atl/2024").is_well_formed());
    /// ```
    pub fn is_well_formed(&self) -> bool {
        let value = self.as_str();
        !value.is_empty()
            && value.len() <= MAX_MONIKER_LEN
            && value != "."
            && value != ".."
            && value
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
    }
}

impl std::fmt::Display for Moniker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Moniker {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Venue of a camp. Embedded in [`Camp`] and never addressed on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// A conference.
///
/// The moniker is fixed at construction; every other attribute is freely
/// mutable through a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camp {
    moniker: Moniker,
    pub name: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub length: i32,
    pub location: Location,
    /// Talks held at the camp. Only populated when a query asks for them.
    pub talks: Vec<Talk>,
}

impl Camp {
    /// Create a camp with an empty location and no talks.
    pub fn new(moniker: Moniker, name: impl Into<String>, event_date: NaiveDate) -> Self {
        Self {
            moniker,
            name: name.into(),
            description: None,
            event_date,
            length: 1,
            location: Location::default(),
            talks: Vec::new(),
        }
    }

    /// The camp's unique key.
    pub fn moniker(&self) -> &Moniker {
        &self.moniker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ATL2024", true)]
    #[case("code-camp_2024.v2", true)]
    #[case("", false)]
    #[case(".", false)]
    #[case("..", false)]
    #[case("atl 2024", false)]
    #[case("atl/2024", false)]
    #[case("atl?2024", false)]
    #[case("münchen", false)]
    fn moniker_well_formedness(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(Moniker::new(raw).is_well_formed(), expected);
    }

    #[rstest]
    fn moniker_length_is_bounded() {
        assert!(Moniker::new("a".repeat(64)).is_well_formed());
        assert!(!Moniker::new("a".repeat(65)).is_well_formed());
    }
}
