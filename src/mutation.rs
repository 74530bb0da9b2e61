//! cDNA change descriptors (`c.<position><original>><changed>`).
//!
//! The parser is deliberately tolerant: the position digits and the `X>Y`
//! base pair may appear anywhere in the input, so `c.1345A>T`, `1345A>T` and
//! `c.1345 A>T` all describe the same substitution. Validation then checks
//! the descriptor against the transcript it will be applied to.

use core::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::DesignError;

fn position_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("valid pattern"))
}

fn change_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([ACGT])>([ACGT])").expect("valid pattern"))
}

/// A validated single-base substitution at a 1-based transcript coordinate.
///
/// Construction goes through [`Mutation::parse`], which guarantees that
/// `original` really is the transcript base at `position`. The changed base
/// is a single symbol; insertions and deletions are not representable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mutation {
    /// 1-based coordinate of the substituted base.
    pub position: usize,
    /// Base found on the transcript at `position`.
    pub original: u8,
    /// Base the primer will introduce.
    pub change: u8,
}

impl Mutation {
    /// Parse cDNA notation such as `c.1345A>T` and validate it against
    /// `transcript`.
    ///
    /// # Examples
    /// ```
    /// use quikprimer::Mutation;
    /// let m = Mutation::parse("c.3A>T", "GGATTT").unwrap();
    /// assert_eq!((m.position, m.original, m.change), (3, b'A', b'T'));
    /// assert!(Mutation::parse("c.3G>T", "GGATTT").is_err());
    /// ```
    pub fn parse(input: &str, transcript: &str) -> Result<Mutation, DesignError> {
        let invalid = |reason: &str| DesignError::InvalidChange {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let position = position_re()
            .find(input)
            .ok_or_else(|| invalid("expected a position, e.g. c.1345A>T"))?
            .as_str()
            .parse::<usize>()
            .map_err(|_| invalid("position out of range"))?;
        let change = change_re()
            .captures(input)
            .ok_or_else(|| invalid("expected a base change, e.g. c.1345A>T"))?;
        let original = change[1].as_bytes()[0];
        let changed = change[2].as_bytes()[0];

        if position == 0 || position > transcript.len() {
            return Err(invalid("position outside the transcript"));
        }
        let on_transcript = transcript.as_bytes()[position - 1];
        if on_transcript != original {
            return Err(invalid(&format!(
                "transcript has {} at position {}, not {}",
                on_transcript as char, position, original as char
            )));
        }
        Ok(Mutation { position, original, change: changed })
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c.{}{}>{}", self.position, self.original as char, self.change as char)
    }
}
