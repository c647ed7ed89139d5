//! Field rules for camps and talks.
//!
//! Required-field checks run against the incoming representation; range and
//! length rules run against the entity produced by the mapping layer, so the
//! same rules cover creation and partial updates. Violations are
//! [`Error::invalid_request`] with `details { field, code }`.

use serde_json::json;

use super::{Camp, CampModel, Error, Talk, TalkDraft, TalkModel};

const MAX_NAME_LEN: usize = 100;
const MAX_TITLE_LEN: usize = 100;
const ABSTRACT_LEN: std::ops::RangeInclusive<usize> = 20..=4000;
const CAMP_LENGTH: std::ops::RangeInclusive<i32> = 1..=100;
const TALK_LEVEL: std::ops::RangeInclusive<i32> = 100..=300;

/// Validation error codes surfaced in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorCode {
    MissingField,
    Blank,
    TooLong,
    OutOfRange,
}

impl FieldErrorCode {
    /// Wire name of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::Blank => "blank",
            Self::TooLong => "too_long",
            Self::OutOfRange => "out_of_range",
        }
    }
}

/// Build the error for a single field violation.
///
/// # Examples
/// ```
/// use camps_backend::domain::validation::{field_error, FieldErrorCode};
///
/// let err = field_error("talkId", FieldErrorCode::MissingField, "missing required field: talkId");
/// assert_eq!(err.details().and_then(|d| d.get("field")).and_then(|v| v.as_str()), Some("talkId"));
/// ```
pub fn field_error(field: &str, code: FieldErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

/// Error for an absent required field.
pub fn missing_field(field: &str) -> Error {
    field_error(
        field,
        FieldErrorCode::MissingField,
        format!("missing required field: {field}"),
    )
}

fn require<T>(value: Option<&T>, field: &str) -> Result<(), Error> {
    value.map(|_| ()).ok_or_else(|| missing_field(field))
}

fn check_text(value: &str, field: &str, max: usize) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(field_error(
            field,
            FieldErrorCode::Blank,
            format!("{field} must not be blank"),
        ));
    }
    if value.chars().count() > max {
        return Err(field_error(
            field,
            FieldErrorCode::TooLong,
            format!("{field} must be at most {max} characters"),
        ));
    }
    Ok(())
}

fn check_range<T>(value: T, range: &std::ops::RangeInclusive<T>, field: &str) -> Result<(), Error>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        return Ok(());
    }
    Err(field_error(
        field,
        FieldErrorCode::OutOfRange,
        format!(
            "{field} must be between {} and {}",
            range.start(),
            range.end()
        ),
    ))
}

/// Fields a camp must carry on creation.
pub fn require_camp_fields(model: &CampModel) -> Result<(), Error> {
    require(model.moniker.as_ref(), "moniker")?;
    require(model.name.as_ref(), "name")?;
    require(model.event_date.as_ref(), "eventDate")
}

/// Fields a talk must carry on creation.
pub fn require_talk_fields(model: &TalkModel) -> Result<(), Error> {
    require(model.title.as_ref(), "title")?;
    require(model.abstract_text.as_ref(), "abstract")?;
    require(model.level.as_ref(), "level")
}

/// Field rules for a camp.
pub fn validate_camp(camp: &Camp) -> Result<(), Error> {
    check_text(&camp.name, "name", MAX_NAME_LEN)?;
    check_range(camp.length, &CAMP_LENGTH, "length")
}

fn validate_talk_fields(title: &str, abstract_text: &str, level: i32) -> Result<(), Error> {
    check_text(title, "title", MAX_TITLE_LEN)?;
    check_range(abstract_text.chars().count(), &ABSTRACT_LEN, "abstract")?;
    check_range(level, &TALK_LEVEL, "level")
}

/// Field rules for a talk that has not been attached yet.
pub fn validate_talk_draft(draft: &TalkDraft) -> Result<(), Error> {
    validate_talk_fields(&draft.title, &draft.abstract_text, draft.level)
}

/// Field rules for a persisted talk after a merge.
pub fn validate_talk(talk: &Talk) -> Result<(), Error> {
    validate_talk_fields(&talk.title, &talk.abstract_text, talk.level)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};
    use serde_json::Value;

    use super::*;
    use crate::domain::{ErrorCode, Moniker};

    fn detail<'a>(err: &'a Error, key: &str) -> Option<&'a str> {
        err.details().and_then(|d| d.get(key)).and_then(Value::as_str)
    }

    #[fixture]
    fn camp() -> Camp {
        let date = NaiveDate::from_ymd_opt(2024, 9, 14).expect("valid date");
        Camp::new(Moniker::new("ATL2024"), "Atlanta Code Camp", date)
    }

    #[fixture]
    fn draft() -> TalkDraft {
        TalkDraft {
            title: "Entity Framework From Scratch".to_owned(),
            abstract_text: "Working with Entity Framework is easier than you think"
                .to_owned(),
            level: 100,
        }
    }

    #[rstest]
    #[case(CampModel { name: Some("n".into()), event_date: NaiveDate::from_ymd_opt(2024, 1, 1), ..CampModel::default() }, "moniker")]
    #[case(CampModel { moniker: Some("m".into()), event_date: NaiveDate::from_ymd_opt(2024, 1, 1), ..CampModel::default() }, "name")]
    #[case(CampModel { moniker: Some("m".into()), name: Some("n".into()), ..CampModel::default() }, "eventDate")]
    fn camp_required_fields(#[case] model: CampModel, #[case] field: &str) {
        let err = require_camp_fields(&model).expect_err("missing field");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(detail(&err, "field"), Some(field));
        assert_eq!(detail(&err, "code"), Some("missing_field"));
    }

    #[rstest]
    fn valid_camp_passes(camp: Camp) {
        assert!(validate_camp(&camp).is_ok());
    }

    #[rstest]
    #[case("   ", "blank")]
    #[case(&"x".repeat(101), "too_long")]
    fn camp_name_rules(mut camp: Camp, #[case] name: &str, #[case] code: &str) {
        camp.name = name.to_owned();
        let err = validate_camp(&camp).expect_err("invalid name");
        assert_eq!(detail(&err, "field"), Some("name"));
        assert_eq!(detail(&err, "code"), Some(code));
    }

    #[rstest]
    #[case(0)]
    #[case(101)]
    fn camp_length_is_bounded(mut camp: Camp, #[case] length: i32) {
        camp.length = length;
        let err = validate_camp(&camp).expect_err("invalid length");
        assert_eq!(detail(&err, "code"), Some("out_of_range"));
    }

    #[rstest]
    fn valid_talk_passes(draft: TalkDraft) {
        assert!(validate_talk_draft(&draft).is_ok());
    }

    #[rstest]
    #[case(99)]
    #[case(301)]
    fn talk_level_is_bounded(mut draft: TalkDraft, #[case] level: i32) {
        draft.level = level;
        let err = validate_talk_draft(&draft).expect_err("invalid level");
        assert_eq!(detail(&err, "field"), Some("level"));
    }

    #[rstest]
    fn short_abstract_is_rejected(mut draft: TalkDraft) {
        draft.abstract_text = "too short".to_owned();
        let err = validate_talk_draft(&draft).expect_err("invalid abstract");
        assert_eq!(detail(&err, "field"), Some("abstract"));
        assert_eq!(detail(&err, "code"), Some("out_of_range"));
    }

    #[rstest]
    fn talk_requires_title() {
        let model = TalkModel {
            abstract_text: Some("x".repeat(30)),
            level: Some(200),
            ..TalkModel::default()
        };
        let err = require_talk_fields(&model).expect_err("missing title");
        assert_eq!(detail(&err, "field"), Some("title"));
    }
}
