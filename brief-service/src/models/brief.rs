//! Project brief intake model.
//!
//! The raw request body is parsed leniently into [`IntakeRequest`], then
//! validated into a [`ProjectBrief`] that the prompt renderers consume.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use validator::{Validate, ValidationErrors};

/// Placeholder rendered for optional project fields the caller left out.
pub const NOT_SPECIFIED: &str = "not specified";

/// Placeholder rendered for an absent clarifying question or answer.
pub const NOT_PROVIDED: &str = "not provided";

/// Request body as submitted by the intake form.
///
/// Every field is optional at this stage; [`IntakeRequest::into_brief`]
/// enforces the required ones.
#[derive(Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    #[serde(default, deserialize_with = "string_only")]
    pub access_code: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "string_only")]
    pub project_name: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "string_only")]
    pub typology: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "string_only")]
    pub location: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "string_only")]
    pub users: Option<String>,

    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "string_only")]
    pub goals: Option<String>,

    #[serde(default, deserialize_with = "string_only")]
    pub time_horizon: Option<String>,

    #[serde(default, deserialize_with = "string_only")]
    pub systems: Option<String>,

    #[serde(default, deserialize_with = "string_only")]
    pub constraints: Option<String>,

    #[serde(default, deserialize_with = "string_only")]
    pub pain_points: Option<String>,

    #[serde(default, deserialize_with = "string_only")]
    pub clarifying_question: Option<String>,

    #[serde(default, deserialize_with = "string_only")]
    pub clarifying_answer: Option<String>,
}

// Hand-written so the access code never ends up in logs.
impl fmt::Debug for IntakeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntakeRequest")
            .field("access_code", &self.access_code.as_ref().map(|_| "[REDACTED]"))
            .field("project_name", &self.project_name)
            .field("typology", &self.typology)
            .field("location", &self.location)
            .field("users", &self.users)
            .field("goals", &self.goals)
            .finish_non_exhaustive()
    }
}

impl IntakeRequest {
    /// Parse a raw request body.
    ///
    /// An empty or whitespace-only body, or a JSON value that is not an object
    /// (`null` included), yields an empty record. Syntactically invalid JSON
    /// is an error.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(body)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            _ => Ok(Self::default()),
        }
    }

    /// Validate required fields and produce a brief.
    pub fn into_brief(self) -> Result<ProjectBrief, ValidationErrors> {
        self.validate()?;

        Ok(ProjectBrief {
            project_name: self.project_name.unwrap_or_default(),
            typology: self.typology.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            users: self.users.unwrap_or_default(),
            goals: self.goals.unwrap_or_default(),
            time_horizon: non_empty(self.time_horizon),
            systems: non_empty(self.systems),
            constraints: non_empty(self.constraints),
            pain_points: non_empty(self.pain_points),
            clarifying_question: non_empty(self.clarifying_question),
            clarifying_answer: non_empty(self.clarifying_answer),
        })
    }
}

/// A validated project brief. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBrief {
    pub project_name: String,
    pub typology: String,
    pub location: String,
    pub users: String,
    pub goals: String,
    time_horizon: Option<String>,
    systems: Option<String>,
    constraints: Option<String>,
    pain_points: Option<String>,
    clarifying_question: Option<String>,
    clarifying_answer: Option<String>,
}

impl ProjectBrief {
    pub fn time_horizon(&self) -> &str {
        self.time_horizon.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    pub fn systems(&self) -> &str {
        self.systems.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    pub fn constraints(&self) -> &str {
        self.constraints.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    pub fn pain_points(&self) -> &str {
        self.pain_points.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    pub fn clarifying_question(&self) -> &str {
        self.clarifying_question.as_deref().unwrap_or(NOT_PROVIDED)
    }

    pub fn clarifying_answer(&self) -> &str {
        self.clarifying_answer.as_deref().unwrap_or(NOT_PROVIDED)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Accept strings verbatim; any other JSON type counts as absent.
fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
