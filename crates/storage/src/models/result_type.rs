use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::alias::{lookup, normalize_alias};

/// Classification of a record: one attempt, an average of five, or of twelve.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "record_type", rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Single,
    Average,
    Ao12,
}

const RESULT_TYPE_ALIASES: &[(&str, ResultType)] = &[
    ("single", ResultType::Single),
    ("s", ResultType::Single),
    ("average", ResultType::Average),
    ("avg", ResultType::Average),
    ("mean", ResultType::Average),
    ("ao5", ResultType::Average),
    ("ao-5", ResultType::Average),
    ("ao12", ResultType::Ao12),
    ("ao-12", ResultType::Ao12),
];

impl ResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Average => "average",
            Self::Ao12 => "ao12",
        }
    }

    pub fn all() -> &'static [ResultType] {
        &[Self::Single, Self::Average, Self::Ao12]
    }

    /// Human readable column label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Average => "Average",
            Self::Ao12 => "AO12",
        }
    }

    pub fn from_alias(raw: &str) -> Option<Self> {
        lookup(RESULT_TYPE_ALIASES, &normalize_alias(raw))
    }

    pub fn from_canonical(kind: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == kind)
    }
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_type_aliases() {
        assert_eq!(ResultType::from_alias("s"), Some(ResultType::Single));
        assert_eq!(ResultType::from_alias("SINGLE"), Some(ResultType::Single));
        assert_eq!(ResultType::from_alias("avg"), Some(ResultType::Average));
        assert_eq!(ResultType::from_alias("mean"), Some(ResultType::Average));
        assert_eq!(ResultType::from_alias("AO5"), Some(ResultType::Average));
        assert_eq!(ResultType::from_alias("ao-5"), Some(ResultType::Average));
        assert_eq!(ResultType::from_alias("AO12"), Some(ResultType::Ao12));
        assert_eq!(ResultType::from_alias(" ao-12 "), Some(ResultType::Ao12));
    }

    #[test]
    fn test_unknown_result_type_is_rejected() {
        assert_eq!(ResultType::from_alias("ao20"), None);
        assert_eq!(ResultType::from_alias("ao100"), None);
        assert_eq!(ResultType::from_alias("mo3"), None);
        assert_eq!(ResultType::from_alias(""), None);
    }

    #[test]
    fn test_canonical_types_map_to_themselves() {
        for kind in ResultType::all() {
            assert_eq!(ResultType::from_alias(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ResultType::Single.label(), "Single");
        assert_eq!(ResultType::Average.label(), "Average");
        assert_eq!(ResultType::Ao12.label(), "AO12");
    }
}
