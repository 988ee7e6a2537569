use super::ReportGroup;
use crate::report::{Event, Family, Message};
use serde::{Deserialize, Serialize};

/// Version of the document layout below
pub const FORMAT_VERSION: u32 = 1;

/// One output file: every diagnostic reported against a single source path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub format_version: u32,
    pub metadata: Metadata,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub analyzer: ToolInfo,
    pub generated_by: ToolInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub description: String,
    pub category: String,
    pub checker_name: String,
    pub location: Location,
    /// Narrative steps, the first one is the event of interest
    pub path: Vec<PathStep>,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Primary,
    Narrative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub kind: StepKind,
    pub location: Location,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub location: Location,
    pub message: String,
}

impl ReportDocument {
    /// Render all messages of one group
    pub fn from_group(group: &ReportGroup, family: Family) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            metadata: Metadata {
                analyzer: ToolInfo {
                    name: family.tool_name().to_string(),
                    version: None,
                },
                generated_by: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: Some(env!("CARGO_PKG_VERSION").to_string()),
                },
            },
            diagnostics: group
                .messages
                .iter()
                .map(|message| Diagnostic::from_message(message, family))
                .collect(),
        }
    }
}

impl Diagnostic {
    pub fn from_message(message: &Message, family: Family) -> Self {
        let path = message
            .events
            .iter()
            .enumerate()
            .map(|(idx, event)| PathStep {
                kind: if idx == 0 {
                    StepKind::Primary
                } else {
                    StepKind::Narrative
                },
                location: Location::from(event),
                message: event.message.clone(),
            })
            .collect();

        let notes = message
            .notes
            .iter()
            .map(|note| Note {
                location: Location::from(note),
                message: note.message.clone(),
            })
            .collect();

        Self {
            description: message.description.clone(),
            category: family.category(&message.checker_name),
            checker_name: message.checker_name.clone(),
            location: Location {
                file: message.path.clone(),
                line: message.line,
                column: message.column,
            },
            path,
            notes,
        }
    }
}

impl From<&Event> for Location {
    fn from(event: &Event) -> Self {
        Self {
            file: event.path.clone(),
            line: event.line,
            column: event.column,
        }
    }
}
