// crates/ewp2cmake/src/renderer/template.rs

//! Single-pass placeholder substitution.
//!
//! A template is tokenized once into literal and placeholder segments, line by
//! line. Values are then looked up per placeholder, so text inserted for one
//! placeholder is never scanned for another.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// What happens to a template line when the placeholder value is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Substitute the empty string.
    Replace,
    /// Drop every line containing the placeholder.
    DeleteLine,
}

/// The placeholder vocabulary understood by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Placeholder {
    ProjectName,
    Chip,
    Core,
    Fpu,
    DlibConfig,
    DiagSuppress,
    DiagError,
    SourcesBase,
    ToolkitDir,
    SourceFile,
    LibFiles,
    IncludeDir,
    PreprocessorDefines,
    LinkerIcf,
    LinkerSymbol,
}

impl Placeholder {
    pub const ALL: [Placeholder; 15] = [
        Placeholder::ProjectName,
        Placeholder::Chip,
        Placeholder::Core,
        Placeholder::Fpu,
        Placeholder::DlibConfig,
        Placeholder::DiagSuppress,
        Placeholder::DiagError,
        Placeholder::SourcesBase,
        Placeholder::ToolkitDir,
        Placeholder::SourceFile,
        Placeholder::LibFiles,
        Placeholder::IncludeDir,
        Placeholder::PreprocessorDefines,
        Placeholder::LinkerIcf,
        Placeholder::LinkerSymbol,
    ];

    /// The name between the `%` delimiters.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::ProjectName => "project_name",
            Placeholder::Chip => "chip",
            Placeholder::Core => "core",
            Placeholder::Fpu => "fpu",
            Placeholder::DlibConfig => "dlib_config",
            Placeholder::DiagSuppress => "diag_suppress",
            Placeholder::DiagError => "diag_error",
            Placeholder::SourcesBase => "sources_base",
            Placeholder::ToolkitDir => "toolkit_dir",
            Placeholder::SourceFile => "source_file",
            Placeholder::LibFiles => "lib_files",
            Placeholder::IncludeDir => "include_dir",
            Placeholder::PreprocessorDefines => "preprocessor_defines",
            Placeholder::LinkerIcf => "linker_icf",
            Placeholder::LinkerSymbol => "linker_symbol",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn empty_policy(self) -> EmptyPolicy {
        match self {
            Placeholder::DiagSuppress | Placeholder::DiagError => EmptyPolicy::DeleteLine,
            _ => EmptyPolicy::Replace,
        }
    }
}

/// Placeholder values; absent entries render as the empty string.
pub type PlaceholderValues = BTreeMap<Placeholder, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'t> {
    Literal(&'t str),
    Placeholder(Placeholder),
}

/// A tokenized template. Each line keeps its own terminator.
#[derive(Debug)]
pub struct Template<'t> {
    lines: Vec<Vec<Segment<'t>>>,
}

impl<'t> Template<'t> {
    pub fn parse(text: &'t str) -> Self {
        let lines = text.split_inclusive('\n').map(tokenize_line).collect();
        Self { lines }
    }

    /// Placeholders in order of appearance, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.lines.iter().flatten().filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(*p),
            Segment::Literal(_) => None,
        })
    }

    pub fn render(&self, values: &PlaceholderValues) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let deleted = line.iter().any(|segment| match segment {
                Segment::Placeholder(p) => {
                    p.empty_policy() == EmptyPolicy::DeleteLine && value_of(values, *p).is_empty()
                }
                Segment::Literal(_) => false,
            });
            if deleted {
                continue;
            }

            for segment in line {
                match segment {
                    Segment::Literal(text) => out.push_str(text),
                    Segment::Placeholder(p) => out.push_str(value_of(values, *p)),
                }
            }
        }
        out
    }
}

fn value_of(values: &PlaceholderValues, placeholder: Placeholder) -> &str {
    values.get(&placeholder).map(String::as_str).unwrap_or("")
}

/// Splits one line into literal text and known `%name%` placeholders.
/// Unknown names are kept as literal text.
fn tokenize_line(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = line[cursor..].find('%') {
        let open = cursor + offset;
        let name_start = open + 1;
        let Some(name_len) = line[name_start..].find('%') else {
            break;
        };

        match Placeholder::from_name(&line[name_start..name_start + name_len]) {
            Some(placeholder) => {
                if literal_start < open {
                    segments.push(Segment::Literal(&line[literal_start..open]));
                }
                segments.push(Segment::Placeholder(placeholder));
                cursor = name_start + name_len + 1;
                literal_start = cursor;
            }
            // The closing '%' may open the next placeholder.
            None => cursor = name_start,
        }
    }

    if literal_start < line.len() {
        segments.push(Segment::Literal(&line[literal_start..]));
    }
    segments
}
