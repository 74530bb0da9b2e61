//! Failure kinds for primer design and sequence input.

/// Errors raised while parsing input or designing a primer.
///
/// Descriptor and range problems are recoverable (interactive callers
/// re-prompt); a flank window outside the transcript is fatal, since no
/// extension strategy can manufacture missing sequence.
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    /// The cDNA change descriptor could not be parsed, or does not match the
    /// transcript it was validated against.
    #[error("invalid cDNA change {input:?}: {reason}")]
    InvalidChange { input: String, reason: String },

    /// The flank window around the mutation runs outside the transcript.
    #[error("transcript sequence too short to make a primer at position {position}")]
    OutOfBounds { position: usize },

    /// The source file contains no run of A/C/G/T bases.
    #[error("no DNA sequence found in {path}")]
    EmptySequence { path: String },

    /// A 1-based slice range that falls outside the sequence.
    #[error("range {start}..{end} outside sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}
