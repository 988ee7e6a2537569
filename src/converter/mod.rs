mod document;
mod error;
mod naming;

#[cfg(test)]
mod tests;

pub use document::{
    Diagnostic, FORMAT_VERSION, Location, Metadata, Note, PathStep, ReportDocument, StepKind,
    ToolInfo,
};
pub use error::ConvertError;
pub use naming::{output_file_name, sanitize_base_name};

use crate::parser::parse_messages;
use crate::report::{Family, Message};
use std::collections::HashMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Messages reported against one source path, in parse order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroup {
    pub path: String,
    pub messages: Vec<Message>,
}

/// Result of a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Files written, one per source path, in first-seen order
    Written(Vec<PathBuf>),
    /// The input held no report of the requested family
    NothingFound,
}

/// Partition messages by primary path
///
/// Groups come out in the order their path was first seen.
pub fn group_by_path(messages: Vec<Message>) -> Vec<ReportGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ReportGroup> = Vec::new();

    for message in messages {
        match index.get(&message.path) {
            Some(&idx) => groups[idx].messages.push(message),
            None => {
                index.insert(message.path.clone(), groups.len());
                groups.push(ReportGroup {
                    path: message.path.clone(),
                    messages: vec![message],
                });
            }
        }
    }

    groups
}

/// Configured conversion of one tool's output into report files
#[derive(Debug, Clone)]
pub struct Converter {
    family: Family,
    output_dir: PathBuf,
    clean: bool,
}

impl Converter {
    /// Create a converter writing into `output_dir`
    pub fn new(family: Family, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            family,
            output_dir: output_dir.into(),
            clean: false,
        }
    }

    /// Remove everything in the output directory before writing
    ///
    /// This deletes the whole directory, not only the files this run
    /// would replace, and cannot be undone.
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Parse `lines` and write one report file per source path
    pub fn run(&self, lines: &[String]) -> Result<ConversionOutcome, ConvertError> {
        let messages = parse_messages(lines, self.family);

        if messages.is_empty() {
            info!(
                "No '{}' results can be found in the given code analyzer output.",
                self.family
            );
            return Ok(ConversionOutcome::NothingFound);
        }

        let groups = group_by_path(messages);
        self.prepare_output_dir()?;

        let mut written = Vec::with_capacity(groups.len());
        for group in &groups {
            written.push(self.write_group(group)?);
        }

        Ok(ConversionOutcome::Written(written))
    }

    fn prepare_output_dir(&self) -> Result<(), ConvertError> {
        if self.clean && self.output_dir.is_dir() {
            warn!(
                "Removing all previous contents of '{}'; this cannot be undone.",
                self.output_dir.display()
            );
            fs::remove_dir_all(&self.output_dir).map_err(|source| ConvertError::CleanOutput {
                path: self.output_dir.clone(),
                source,
            })?;
        }

        fs::create_dir_all(&self.output_dir).map_err(|source| ConvertError::CreateOutputDir {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Write one document through a temporary file in the output directory
    ///
    /// The final name only appears once the document is complete. On any
    /// error the temporary file is removed when it goes out of scope.
    fn write_group(&self, group: &ReportGroup) -> Result<PathBuf, ConvertError> {
        let out_file = self
            .output_dir
            .join(output_file_name(&group.path, self.family));
        info!("Creating report file: '{}'.", out_file.display());

        let document = ReportDocument::from_group(group, self.family);
        debug!("{} diagnostics for '{}'", document.diagnostics.len(), group.path);

        let temp = tempfile::NamedTempFile::new_in(&self.output_dir).map_err(|source| {
            ConvertError::CreateTempFile {
                path: self.output_dir.clone(),
                source,
            }
        })?;

        let mut writer = BufWriter::new(temp);
        serde_json::to_writer_pretty(&mut writer, &document).map_err(|source| {
            ConvertError::Serialize {
                path: out_file.clone(),
                source,
            }
        })?;
        writer.write_all(b"\n").map_err(|source| ConvertError::Persist {
            path: out_file.clone(),
            source,
        })?;

        let temp = writer.into_inner().map_err(|err| ConvertError::Persist {
            path: out_file.clone(),
            source: err.into_error(),
        })?;
        temp.persist(&out_file).map_err(|err| ConvertError::Persist {
            path: out_file.clone(),
            source: err.error,
        })?;

        Ok(out_file)
    }
}

/// Convert captured tool output into report files under `output_dir`
pub fn convert(
    lines: &[String],
    family: Family,
    output_dir: &Path,
    clean: bool,
) -> Result<ConversionOutcome, ConvertError> {
    Converter::new(family, output_dir).clean(clean).run(lines)
}
