// crates/ewp2cmake/src/error.rs

use alloc::fmt;
use alloc::string::String;
use quick_xml::errors::serialize::DeError;

/// Errors that can occur while extracting or rendering a project.
#[derive(Debug)]
pub enum EwpError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// A required descriptor element was missing (e.g., `<configuration>`).
    MissingElement { element: &'static str },

    /// The requested build configuration does not exist in the descriptor.
    UnknownConfiguration(String),

    /// The workbench settings artifact is absent or does not hold the toolkit path.
    ConfigurationMissing { artifact: String, reason: String },

    /// The toolchain selector is not one of the supported variants.
    UnsupportedToolchain(String),

    /// The template store has no text for the selected template.
    TemplateMissing(&'static str),

    /// Reading the descriptor or templates, or writing the output, failed.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl From<DeError> for EwpError {
    fn from(e: DeError) -> Self {
        EwpError::XmlParsing(e)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for EwpError {
    fn from(e: std::io::Error) -> Self {
        EwpError::Io(e)
    }
}

impl fmt::Display for EwpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EwpError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            EwpError::MissingElement { element } => {
                write!(f, "Missing required descriptor element: {}", element)
            }
            EwpError::UnknownConfiguration(name) => {
                write!(f, "Configuration '{}' not found in descriptor", name)
            }
            EwpError::ConfigurationMissing { artifact, reason } => {
                write!(f, "Workbench settings unavailable ({}): {}", artifact, reason)
            }
            EwpError::UnsupportedToolchain(toolchain) => {
                write!(f, "Unsupported toolchain '{}' (expected 'clang' or 'iar')", toolchain)
            }
            EwpError::TemplateMissing(template) => {
                write!(f, "Template '{}' is not available", template)
            }
            #[cfg(feature = "std")]
            EwpError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EwpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EwpError::XmlParsing(e) => Some(e),
            EwpError::Io(e) => Some(e),
            _ => None,
        }
    }
}
