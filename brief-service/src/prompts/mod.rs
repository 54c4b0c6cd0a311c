//! Prompt variants and rendering.
//!
//! Each [`Variant`] is a fixed task template. Rendering is a pure function of
//! the variant and a validated [`ProjectBrief`]; the same inputs always give
//! byte-identical output.

mod airport;
mod question;
mod report;

use crate::models::ProjectBrief;
use std::fmt;

/// The three generation tasks the service offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    ClarifyingQuestion,
    GenericReport,
    AirportReport,
}

/// System and user instructions sent to the completion API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::ClarifyingQuestion,
        Variant::GenericReport,
        Variant::AirportReport,
    ];

    /// Stable identifier used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::ClarifyingQuestion => "clarifying-question",
            Variant::GenericReport => "generic-report",
            Variant::AirportReport => "airport-report",
        }
    }

    /// Key of the JSON success body.
    pub fn response_field(self) -> &'static str {
        match self {
            Variant::ClarifyingQuestion => "question",
            Variant::GenericReport | Variant::AirportReport => "report",
        }
    }

    /// Label used in client-facing failure messages.
    pub fn operation(self) -> &'static str {
        match self {
            Variant::ClarifyingQuestion => "question",
            Variant::GenericReport => "report",
            Variant::AirportReport => "airport report",
        }
    }

    pub fn render(self, brief: &ProjectBrief) -> PromptPair {
        match self {
            Variant::ClarifyingQuestion => PromptPair {
                system: question::system_instruction(brief),
                user: question::USER_INSTRUCTION.to_string(),
            },
            Variant::GenericReport => PromptPair {
                system: report::system_instruction(brief),
                user: report::USER_INSTRUCTION.to_string(),
            },
            Variant::AirportReport => PromptPair {
                system: airport::system_instruction(brief),
                user: airport::USER_INSTRUCTION.to_string(),
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
