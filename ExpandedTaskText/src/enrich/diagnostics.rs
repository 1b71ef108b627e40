//! Recoverable problems found while building descriptions
//!
//! Resolvers never log. They push [`Diagnostic`] values into a
//! [`Diagnostics`] list and degrade to an empty contribution; the driver
//! decides when to emit them.

use std::fmt;

use crate::metadata::LOG_PREFIX;

/// A non-fatal lookup failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A locale key had no entry in the desired locale
    MissingLocale {
        /// The composite locale key, e.g. `"<id> Name"`
        key: String,
    },
    /// A quest from the reference list has no description to enrich
    MissingQuestDescription {
        /// The quest id
        quest_id: String,
    },
    /// The desired language has no locale table
    DesiredLocaleMissing {
        /// The requested language code
        language: String,
        /// The language used instead, if any
        fallback: Option<String>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLocale { key } => write!(f, "Could not find locale for `{key}`"),
            Self::MissingQuestDescription { quest_id } => {
                write!(f, "Could not find quest description for `{quest_id}`")
            }
            Self::DesiredLocaleMissing {
                language,
                fallback: Some(fallback),
            } => write!(
                f,
                "Locale `{language}` is not available, falling back to `{fallback}`"
            ),
            Self::DesiredLocaleMissing {
                language,
                fallback: None,
            } => write!(
                f,
                "Locale `{language}` is not available and has no fallback, no quest can be enriched"
            ),
        }
    }
}

impl Diagnostic {
    /// Log this diagnostic; a locale fallback is a warning, the rest are errors
    pub fn emit(&self) {
        match self {
            Self::DesiredLocaleMissing {
                fallback: Some(_), ..
            } => tracing::warn!("{LOG_PREFIX} {self}"),
            _ => tracing::error!("{LOG_PREFIX} {self}"),
        }
    }
}

/// Ordered list of diagnostics collected during a computation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn missing_locale(&mut self, key: impl Into<String>) {
        self.push(Diagnostic::MissingLocale { key: key.into() });
    }

    /// Move every diagnostic of `other` to the end of this list
    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Log every diagnostic, in the order they were recorded
    pub fn emit_all(&self) {
        for diagnostic in &self.items {
            diagnostic.emit();
        }
    }
}
