//! Canonical locations of camp and talk resources.
//!
//! Locations are `/api/camps/{moniker}` and
//! `/api/camps/{moniker}/talks/{talkId}`. When a public base URL is
//! configured they are made absolute against it.

use url::Url;

use super::{Moniker, TalkId};

const CAMPS_PATH: &str = "/api/camps";

/// Reasons a location cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// The moniker cannot be used as a single path segment.
    #[error("moniker {moniker:?} cannot be used in a resource location")]
    MalformedMoniker { moniker: String },
    /// The configured base URL is not an absolute http(s) URL.
    #[error("invalid public base url {value:?}: {message}")]
    InvalidBase { value: String, message: String },
}

/// A resolved resource location, ready for a `Location` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocation(String);

impl ResourceLocation {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of one camp; talk locations hang off it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampLocation {
    prefix: String,
}

impl CampLocation {
    /// Location of the camp itself.
    pub fn resource(&self) -> ResourceLocation {
        ResourceLocation(self.prefix.clone())
    }

    /// Location of a talk owned by the camp.
    pub fn talk(&self, talk: TalkId) -> ResourceLocation {
        ResourceLocation(format!("{}/talks/{talk}", self.prefix))
    }
}

/// Builds resource locations, relative by default.
///
/// # Examples
/// ```
/// use camps_backend::domain::{Moniker, ResourceLocator, TalkId};
///
/// let locator = ResourceLocator::relative();
/// let camp = locator.camp(&Moniker::new("ATL2024")).expect("locatable");
/// assert_eq!(camp.resource().as_str(), "/api/camps/ATL2024");
/// assert_eq!(camp.talk(TalkId::new(3)).as_str(), "/api/camps/ATL2024/talks/3");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceLocator {
    base: Option<String>,
}

impl ResourceLocator {
    /// Locator producing host-relative paths.
    pub fn relative() -> Self {
        Self::default()
    }

    /// Locator producing absolute URLs below `raw`.
    pub fn with_base(raw: &str) -> Result<Self, LocationError> {
        let invalid = |message: String| LocationError::InvalidBase {
            value: raw.to_owned(),
            message,
        };
        let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(invalid("expected an absolute http(s) url".to_owned()));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_owned()));
        }
        Ok(Self {
            base: Some(url.as_str().trim_end_matches('/').to_owned()),
        })
    }

    /// Location of the camp identified by `moniker`.
    pub fn camp(&self, moniker: &Moniker) -> Result<CampLocation, LocationError> {
        if !moniker.is_well_formed() {
            return Err(LocationError::MalformedMoniker {
                moniker: moniker.to_string(),
            });
        }
        let base = self.base.as_deref().unwrap_or_default();
        Ok(CampLocation {
            prefix: format!("{base}{CAMPS_PATH}/{moniker}"),
        })
    }
}
