//! Platform user roles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// The four account types that can sign up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// A student using the wellness and academic tools.
    Student,
    /// A parent or guardian linked to a student.
    Parent,
    /// A teacher or school staff member.
    Teacher,
    /// A licensed therapist listed in the marketplace.
    Therapist,
}

impl UserRole {
    /// All roles, in signup-menu order.
    pub const ALL: [Self; 4] = [Self::Student, Self::Parent, Self::Teacher, Self::Therapist];

    /// Lowercase identifier used in paths and claims.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Parent => "parent",
            Self::Teacher => "teacher",
            Self::Therapist => "therapist",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    /// Accepts the bare name or a `ROLE_`-prefixed claim value.
    fn from_str(s: &str) -> DomainResult<Self> {
        let lower = s.to_ascii_lowercase();
        let name = lower.strip_prefix("role_").unwrap_or(&lower);
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == name)
            .ok_or_else(|| DomainError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_role() {
        assert_eq!("student".parse::<UserRole>().unwrap(), UserRole::Student);
        assert_eq!("ROLE_THERAPIST".parse::<UserRole>().unwrap(), UserRole::Therapist);
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_serde_name() {
        let json = serde_json::to_string(&UserRole::Teacher).unwrap();
        assert_eq!(json, r#""teacher""#);
    }
}
