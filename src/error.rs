//! Error types.
//!
//! Everything a caller can observe is a [`SwizzleError`]. Resolution failures
//! are deliberately flattened into [`SwizzleError::UnknownAttribute`] so that a
//! name which cannot be decomposed looks exactly like a name that does not
//! exist; the strategy-specific reason is kept as the error source
//! ([`ResolveError`]) for diagnostics.

/// Result alias used throughout the crate.
pub type Result<T, E = SwizzleError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SwizzleError {
    #[error("no attribute named '{name}'")]
    UnknownAttribute {
        name: String,
        #[source]
        cause: Option<ResolveError>,
    },

    #[error("invalid separator '{separator}': expected letters, digits and underscores, or '+N' with N > 0")]
    InvalidSeparator { separator: String },

    #[error("expected {expected} values for '{target}', got {got}")]
    ArityMismatch { target: String, expected: usize, got: usize },

    #[error("conflicting values assigned to field '{field}'")]
    ConflictingAssignment { field: String },

    #[error("swizzled assignment is disabled for this swizzler")]
    WriteDisabled,

    #[error("invalid name '{name}': {reason}")]
    InvalidFieldDeclaration { name: String, reason: DeclarationFault },

    #[error("arrangement must contain exactly the field names (missing: {missing:?}, unknown: {unknown:?})")]
    ArrangementCoverage { missing: Vec<String>, unknown: Vec<String> },

    #[error("got {defaults} default values for {fields} fields")]
    TooManyDefaults { defaults: usize, fields: usize },

    #[error("{type_name} expects {expected} values, got {got}")]
    ArgumentCount { type_name: String, expected: usize, got: usize },

    #[error("got unexpected field names: {names:?}")]
    UnexpectedFields { names: Vec<String> },
}

impl SwizzleError {
    pub(crate) fn unknown(name: &str, cause: ResolveError) -> Self {
        Self::UnknownAttribute { name: name.to_string(), cause: Some(cause) }
    }

    pub(crate) fn declaration(name: &str, reason: DeclarationFault) -> Self {
        Self::InvalidFieldDeclaration { name: name.to_string(), reason }
    }

    /// True for failures that mean "this attribute does not exist".
    pub fn is_unknown_attribute(&self) -> bool {
        matches!(self, Self::UnknownAttribute { .. })
    }
}

/// Why a type or field name was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationFault {
    #[error("names must be valid identifiers")]
    NotIdentifier,
    #[error("names cannot be a keyword")]
    Keyword,
    #[error("field names cannot shadow tuple methods")]
    Reserved,
    #[error("duplicate field name")]
    Duplicate,
}

/// Strategy-level reason a compound name could not be decomposed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("component '{0}' does not name a field")]
    UnknownComponent(String),

    #[error("component '{0}' is not in the swizzle whitelist")]
    NotWhitelisted(String),

    #[error("no known field covers '{0}'")]
    UnknownSubsequence(String),

    #[error("no matching attribute found for substring '{0}'")]
    NoMatchingSubstring(String),
}
