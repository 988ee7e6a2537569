// Public API exports
pub mod converter;
pub mod parser;
pub mod report;
pub mod triple;

// Re-export main types for convenience
pub use report::{Event, Family, Message, UnknownFamily, checker_category};

pub use parser::{LineCursor, Recognition, parse_messages, split_lines};

pub use converter::{
    ConversionOutcome, ConvertError, Converter, ReportDocument, ReportGroup, convert,
    group_by_path,
};

pub use triple::find_arch_in_command;
