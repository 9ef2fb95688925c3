//! PersonaId - Identifier of an advisory persona

use serde::{Deserialize, Serialize};

/// Persona identifier
///
/// The built-in personas have dedicated variants. Any other identifier is
/// carried verbatim in [`PersonaId::Other`]; it is never rejected, and
/// resolves to the default template unless a catalog registers it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PersonaId {
    CareerCoach,
    HealthAdvisor,
    Other(String),
}

impl PersonaId {
    pub const CAREER_COACH: &'static str = "career_coach";
    pub const HEALTH_ADVISOR: &'static str = "health_advisor";

    /// Wire identifier (snake_case)
    pub fn as_str(&self) -> &str {
        match self {
            PersonaId::CareerCoach => Self::CAREER_COACH,
            PersonaId::HealthAdvisor => Self::HEALTH_ADVISOR,
            PersonaId::Other(id) => id,
        }
    }

    /// Whether this is one of the built-in personas
    pub fn is_builtin(&self) -> bool {
        !matches!(self, PersonaId::Other(_))
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PersonaId {
    type Err = std::convert::Infallible;

    /// Exact match only: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            Self::CAREER_COACH => PersonaId::CareerCoach,
            Self::HEALTH_ADVISOR => PersonaId::HealthAdvisor,
            other => PersonaId::Other(other.to_string()),
        })
    }
}

impl From<&str> for PersonaId {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(id) => id,
            Err(never) => match never {},
        }
    }
}

impl From<String> for PersonaId {
    fn from(s: String) -> Self {
        match s.as_str() {
            Self::CAREER_COACH => PersonaId::CareerCoach,
            Self::HEALTH_ADVISOR => PersonaId::HealthAdvisor,
            _ => PersonaId::Other(s),
        }
    }
}

impl From<PersonaId> for String {
    fn from(id: PersonaId) -> Self {
        match id {
            PersonaId::Other(id) => id,
            builtin => builtin.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builtin_ids() {
        assert_eq!(PersonaId::from("career_coach"), PersonaId::CareerCoach);
        assert_eq!(PersonaId::from("health_advisor"), PersonaId::HealthAdvisor);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(
            PersonaId::from("Career_Coach"),
            PersonaId::Other("Career_Coach".to_string())
        );
        assert_eq!(
            PersonaId::from(" career_coach"),
            PersonaId::Other(" career_coach".to_string())
        );
    }

    #[test]
    fn test_unknown_id_is_kept_verbatim() {
        let id = PersonaId::from("Unknown");
        assert!(!id.is_builtin());
        assert_eq!(id.as_str(), "Unknown");
    }

    #[test]
    fn test_serde_uses_wire_identifier() {
        let json = serde_json::to_string(&PersonaId::HealthAdvisor).unwrap();
        assert_eq!(json, "\"health_advisor\"");

        let id: PersonaId = serde_json::from_str("\"career_coach\"").unwrap();
        assert_eq!(id, PersonaId::CareerCoach);

        let id: PersonaId = serde_json::from_str("\"lawyer\"").unwrap();
        assert_eq!(id, PersonaId::Other("lawyer".to_string()));
    }
}
