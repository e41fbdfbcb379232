//! Assessment (IQ, EQ, Big Five) types

#![allow(missing_docs)]

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Kinds of assessment offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentKind {
    /// Intelligence quotient test.
    #[serde(rename = "IQ")]
    Iq,
    /// Emotional intelligence test.
    #[serde(rename = "EQ")]
    Eq,
    /// Big Five personality inventory.
    #[serde(rename = "BIG_FIVE")]
    BigFive,
}

impl AssessmentKind {
    /// Value used in the `type` query parameter.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::Iq => "IQ",
            Self::Eq => "EQ",
            Self::BigFive => "BIG_FIVE",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for AssessmentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "IQ" => Ok(Self::Iq),
            "EQ" => Ok(Self::Eq),
            "BIG_FIVE" | "BIGFIVE" => Ok(Self::BigFive),
            _ => Err(DomainError::UnknownAssessmentKind(s.to_string())),
        }
    }
}

/// A question with its answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// An assessment definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub id: String,
    pub kind: AssessmentKind,
    pub title: String,
    #[serde(default)]
    pub time_limit_minutes: Option<u32>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: String,
}

/// Body of the submit call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AnswerSubmission {
    pub answers: Vec<Answer>,
}

impl AnswerSubmission {
    /// Adds an answer.
    #[must_use]
    pub fn answer(mut self, question_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.answers.push(Answer {
            question_id: question_id.into(),
            value: value.into(),
        });
        self
    }
}

/// Scored result of a submitted assessment.
///
/// IQ and EQ results carry `score`; Big Five results carry one entry per
/// trait in `traits`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub assessment_id: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub traits: BTreeMap<String, f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}
