//! Cell value transformation
//!
//! The transformation is the one piece of business logic meant to be
//! swapped out. Handlers only see the [`Transform`] trait, so any
//! `Fn(&str) -> String` can be passed in place of the default.

/// Suffix appended by the default transformation
pub const PROCESSED_SUFFIX: &str = "_PROCESSED";

/// A pure text → text mapping applied to every selected cell.
///
/// Implementations must be total and deterministic and must not depend on
/// row position or other cells.
pub trait Transform {
    fn apply(&self, input: &str) -> String;
}

impl<F> Transform for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, input: &str) -> String {
        self(input)
    }
}

/// Default transformation: uppercase the text and append [`PROCESSED_SUFFIX`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkProcessed;

impl MarkProcessed {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for MarkProcessed {
    fn apply(&self, input: &str) -> String {
        let mut out = input.to_uppercase();
        out.push_str(PROCESSED_SUFFIX);
        out
    }
}

/// Apply the default transformation to a single value
pub fn process_string(input: &str) -> String {
    MarkProcessed::new().apply(input)
}
