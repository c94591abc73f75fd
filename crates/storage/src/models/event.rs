use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::alias::{lookup, normalize_alias};

/// Puzzle events tracked by the leaderboard.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[sqlx(type_name = "event_id")]
pub enum EventId {
    #[default]
    #[serde(rename = "333")]
    #[sqlx(rename = "333")]
    Cube3x3,
    #[serde(rename = "222")]
    #[sqlx(rename = "222")]
    Cube2x2,
    #[serde(rename = "444")]
    #[sqlx(rename = "444")]
    Cube4x4,
    #[serde(rename = "333oh")]
    #[sqlx(rename = "333oh")]
    OneHanded,
    #[serde(rename = "pyram")]
    #[sqlx(rename = "pyram")]
    Pyraminx,
    #[serde(rename = "clock")]
    #[sqlx(rename = "clock")]
    Clock,
}

const EVENT_ALIASES: &[(&str, EventId)] = &[
    ("333", EventId::Cube3x3),
    ("3x3", EventId::Cube3x3),
    ("3x3x3", EventId::Cube3x3),
    ("222", EventId::Cube2x2),
    ("2x2", EventId::Cube2x2),
    ("2x2x2", EventId::Cube2x2),
    ("444", EventId::Cube4x4),
    ("4x4", EventId::Cube4x4),
    ("4x4x4", EventId::Cube4x4),
    ("333oh", EventId::OneHanded),
    ("oh", EventId::OneHanded),
    ("3oh", EventId::OneHanded),
    ("pyram", EventId::Pyraminx),
    ("pyraminx", EventId::Pyraminx),
    ("clock", EventId::Clock),
];

impl EventId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cube3x3 => "333",
            Self::Cube2x2 => "222",
            Self::Cube4x4 => "444",
            Self::OneHanded => "333oh",
            Self::Pyraminx => "pyram",
            Self::Clock => "clock",
        }
    }

    pub fn all() -> &'static [EventId] {
        &[
            Self::Cube3x3,
            Self::Cube2x2,
            Self::Cube4x4,
            Self::OneHanded,
            Self::Pyraminx,
            Self::Clock,
        ]
    }

    /// Resolves loosely typed input such as `"3x3x3"` or `" OH "` to an event.
    ///
    /// Returns `None` for anything outside the alias table; callers surface that
    /// as an unsupported value rather than a failure.
    pub fn from_alias(raw: &str) -> Option<Self> {
        lookup(EVENT_ALIASES, &normalize_alias(raw))
    }

    /// Exact match on the canonical id, without alias resolution.
    pub fn from_canonical(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|e| e.as_str() == id)
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: EventId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_aliases() {
        assert_eq!(EventId::from_alias("3x3x3"), Some(EventId::Cube3x3));
        assert_eq!(EventId::from_alias("3x3"), Some(EventId::Cube3x3));
        assert_eq!(EventId::from_alias("2x2x2"), Some(EventId::Cube2x2));
        assert_eq!(EventId::from_alias("4x4"), Some(EventId::Cube4x4));
        assert_eq!(EventId::from_alias("oh"), Some(EventId::OneHanded));
        assert_eq!(EventId::from_alias("3oh"), Some(EventId::OneHanded));
        assert_eq!(EventId::from_alias("pyraminx"), Some(EventId::Pyraminx));
        assert_eq!(EventId::from_alias("clock"), Some(EventId::Clock));
    }

    #[test]
    fn test_event_alias_trims_and_ignores_case() {
        assert_eq!(EventId::from_alias("  3X3X3 "), Some(EventId::Cube3x3));
        assert_eq!(EventId::from_alias("\tPyraminx\n"), Some(EventId::Pyraminx));
        assert_eq!(EventId::from_alias("\u{feff}OH"), Some(EventId::OneHanded));
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        assert_eq!(EventId::from_alias("foo"), None);
        assert_eq!(EventId::from_alias(""), None);
        assert_eq!(EventId::from_alias("555"), None);
        assert_eq!(EventId::from_alias("3 x 3"), None);
    }

    #[test]
    fn test_canonical_ids_map_to_themselves() {
        for id in EventId::all() {
            assert_eq!(EventId::from_alias(id.as_str()), Some(*id));
        }
    }

    #[test]
    fn test_canonical_lookup_ignores_aliases() {
        assert_eq!(EventId::from_canonical("333oh"), Some(EventId::OneHanded));
        assert_eq!(EventId::from_canonical("oh"), None);
        assert_eq!(EventId::from_canonical("333 "), None);
    }

    #[test]
    fn test_serde_uses_canonical_ids() {
        let json = serde_json::to_string(&EventId::OneHanded).unwrap();
        assert_eq!(json, "\"333oh\"");

        let parsed: EventId = serde_json::from_str("\"pyram\"").unwrap();
        assert_eq!(parsed, EventId::Pyraminx);

        assert!(serde_json::from_str::<EventId>("\"3x3\"").is_err());
    }
}
