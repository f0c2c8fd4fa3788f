use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

/// Type of media content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(MediaType::Movie),
            "tv" => Ok(MediaType::Tv),
            other => Err(format!("expected 'movie' or 'tv', got '{}'", other)),
        }
    }
}

/// Library availability status as reported by the Seerr server.
///
/// The server sends Overseerr's numeric media-status codes (1-6); output
/// always uses the symbolic name so it stays stable across server versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Missing,
    Pending,
    Processing,
    PartiallyAvailable,
    Available,
    Deleted,
}

impl Status {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Status::Missing),
            2 => Some(Status::Pending),
            3 => Some(Status::Processing),
            4 => Some(Status::PartiallyAvailable),
            5 => Some(Status::Available),
            6 => Some(Status::Deleted),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Status::Missing => "MISSING",
            Status::Pending => "PENDING",
            Status::Processing => "PROCESSING",
            Status::PartiallyAvailable => "PARTIALLY_AVAILABLE",
            Status::Available => "AVAILABLE",
            Status::Deleted => "DELETED",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        [
            Status::Missing,
            Status::Pending,
            Status::Processing,
            Status::PartiallyAvailable,
            Status::Available,
            Status::Deleted,
        ]
        .into_iter()
        .find(|status| status.name() == name)
    }

    fn from_value(value: &Value, field: &'static str) -> Result<Self, ValidationError> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .and_then(Self::from_code)
                .ok_or_else(|| ValidationError::invalid(field, format!("unknown status code {}", n))),
            Value::String(s) => Self::from_name(s)
                .ok_or_else(|| ValidationError::invalid(field, format!("unknown status '{}'", s))),
            _ => Err(ValidationError::invalid(field, "expected a status code")),
        }
    }
}

/// One entry of a catalog search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: i64,
    pub media_type: MediaType,
    pub title: String,
    pub overview: String,
    pub release_date: Option<NaiveDate>,
}

impl SearchResult {
    /// Normalize one raw search item. Field names vary by media type:
    /// movies carry `originalTitle`/`releaseDate`, shows carry
    /// `originalName`/`firstAirDate`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let id = require_i64(value, "id", &["id"])?;
        let media_type = require_str(value, "mediaType", &["mediaType"])?
            .parse::<MediaType>()
            .map_err(|reason| ValidationError::invalid("mediaType", reason))?;
        let title = require_str(value, "title", &["originalTitle", "originalName"])?.to_string();
        let overview = lookup(value, &["overview"])
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let release_date = parse_release_date(value, &["releaseDate", "firstAirDate"])?;

        Ok(Self {
            id,
            media_type,
            title,
            overview,
            release_date,
        })
    }
}

/// Per-season availability within a show's `mediaInfo`
#[derive(Debug, Clone, Serialize)]
pub struct SeasonStatus {
    pub season_number: i64,
    pub status: Status,
}

impl SeasonStatus {
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let season_number = require_i64(value, "seasonNumber", &["seasonNumber"])?;
        let status = Status::from_value(require(value, "status", &["status"])?, "status")?;

        Ok(Self {
            season_number,
            status,
        })
    }
}

/// Availability of a single library item
#[derive(Debug, Clone, Serialize)]
pub struct MediaStatus {
    pub id: i64,
    pub name: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<SeasonStatus>>,
}

impl MediaStatus {
    /// Normalize an availability response. Status lives in the nested
    /// `mediaInfo` object, which the server omits for items it does not
    /// manage; those decode as missing-field errors here.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let id = require_i64(value, "id", &["id"])?;
        let name = require_str(value, "name", &["name", "title"])?.to_string();

        let info = value
            .get("mediaInfo")
            .filter(|v| !v.is_null())
            .ok_or(ValidationError::MissingField("mediaInfo"))?;

        let status = Status::from_value(require(info, "mediaInfo.status", &["status"])?, "mediaInfo.status")?;

        // An empty season list is normalized to absent so it never renders
        let seasons = match lookup(info, &["seasons"]) {
            Some(Value::Array(items)) if !items.is_empty() => Some(
                items
                    .iter()
                    .map(SeasonStatus::from_value)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Some(Value::Array(_)) | None => None,
            Some(_) => return Err(ValidationError::invalid("mediaInfo.seasons", "expected a list")),
        };

        Ok(Self {
            id,
            name,
            status,
            seasons,
        })
    }
}

/// Ordered-fallback lookup: the first candidate key holding a non-null
/// value wins.
fn lookup<'a>(object: &'a Value, keys: &[&'static str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(key))
        .find(|v| !v.is_null())
}

fn require<'a>(
    object: &'a Value,
    field: &'static str,
    keys: &[&'static str],
) -> Result<&'a Value, ValidationError> {
    lookup(object, keys).ok_or(ValidationError::MissingField(field))
}

fn require_str<'a>(
    object: &'a Value,
    field: &'static str,
    keys: &[&'static str],
) -> Result<&'a str, ValidationError> {
    require(object, field, keys)?
        .as_str()
        .ok_or_else(|| ValidationError::invalid(field, "expected a string"))
}

fn require_i64(
    object: &Value,
    field: &'static str,
    keys: &[&'static str],
) -> Result<i64, ValidationError> {
    require(object, field, keys)?
        .as_i64()
        .ok_or_else(|| ValidationError::invalid(field, "expected an integer"))
}

/// Empty-string and absent dates both mean "no date"; anything else must
/// be a YYYY-MM-DD date.
fn parse_release_date(
    object: &Value,
    keys: &[&'static str],
) -> Result<Option<NaiveDate>, ValidationError> {
    let Some(raw) = lookup(object, keys) else {
        return Ok(None);
    };

    let text = raw
        .as_str()
        .ok_or_else(|| ValidationError::invalid("releaseDate", "expected a string"))?;

    if text.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| ValidationError::invalid("releaseDate", e.to_string()))
}
