#![forbid(unsafe_code)]
//! # quikprimer
//!
//! Design of **mutagenic primers** for QuikChange-style site-directed
//! mutagenesis PCR: given a coding transcript and a single cDNA base change,
//! grow an oligomer centred on the mutation until it satisfies the protocol's
//! acceptance rules.
//!
//! ## Highlights
//! - 🧬 **Deterministic**: the same transcript and change always produce the
//!   same primer.
//! - ❗ **No feature flags**: all capabilities are always enabled.
//! - 🧭 **Pure core**: the engine and metric calculators never touch IO.
//!
//! ## Acceptance rules
//! - GC content of at least **40%**,
//! - terminal **G or C** bases on both ends,
//! - estimated melting temperature of at least **78 °C**,
//! - at most **45 bases** overall (longer primers favour secondary-structure
//!   formation; past the ceiling the best candidate so far is reported).
//!
//! The extension loop is deterministic: a fresh candidate carries 11
//! transcript bases on each side of the changed base, and each iteration
//! grows one flank by a fixed imbalance rule until the rules hold or the
//! ceiling is passed. The reverse-strand primer is always the reverse
//! complement of the forward one.
//!
//! ## Examples
//! ```rust
//! // Design against an in-memory transcript:
//! let transcript = "G".repeat(50);
//! let design = quikprimer::design_from_change(&transcript, "c.25G>C").unwrap();
//! assert_eq!(design.outcome, quikprimer::Outcome::Satisfied);
//! assert_eq!(design.primer.len(), 23);
//! // The finished record prints as a report:
//! println!("{}", design.primer);
//! ```
//!
//! ## Version
//! This build is "0.2.0".

pub mod engine;
pub mod error;
pub mod metrics;
pub mod mutation;
pub mod primer;
pub mod seqio;

pub use engine::{design_primer, next_extension, Outcome, PrimerDesign};
pub use error::DesignError;
pub use mutation::Mutation;
pub use primer::{Extension, PrimerCandidate};

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse-and-design convenience: validate `change` (cDNA notation, e.g.
/// `c.1345A>T`) against `transcript`, then run the extension engine.
///
/// # Examples
/// ```
/// let transcript = "ATGC".repeat(20);
/// let design = quikprimer::design_from_change(&transcript, "c.40C>G").unwrap();
/// assert_eq!(design.primer.mutation().to_string(), "c.40C>G");
/// ```
pub fn design_from_change<'a>(
    transcript: &'a str,
    change: &str,
) -> Result<PrimerDesign<'a>, DesignError> {
    let mutation = Mutation::parse(change, transcript)?;
    engine::design_primer(transcript, &mutation)
}

#[cfg(test)]
mod end_to_end_tests {
    use super::*;

    #[test]
    fn all_g_transcript_designs_in_one_pass() {
        let transcript = "G".repeat(50);
        let design = design_from_change(&transcript, "c.25G>C").unwrap();
        assert_eq!(design.outcome, Outcome::Satisfied);
        assert_eq!(design.iterations, 1);
        assert_eq!(design.primer.len(), 23);
        assert_eq!(design.primer.gc_percent(), 100.0);
        assert_eq!(
            design.primer.sequence(),
            format!("{}C{}", "G".repeat(11), "G".repeat(11))
        );
        assert_eq!(
            design.primer.reverse_complement(),
            format!("{}G{}", "C".repeat(11), "C".repeat(11))
        );
    }

    #[test]
    fn mutation_near_the_transcript_edge_is_fatal() {
        let transcript = "G".repeat(30);
        let err = design_from_change(&transcript, "c.5G>C").unwrap_err();
        assert!(matches!(err, DesignError::OutOfBounds { position: 5 }));
        let err = design_from_change(&transcript, "c.25G>C").unwrap_err();
        assert!(matches!(err, DesignError::OutOfBounds { position: 25 }));
    }

    #[test]
    fn invalid_descriptor_is_not_fatal_to_the_caller() {
        let transcript = "G".repeat(50);
        // Parse failures come back as a recoverable error value, never a
        // truncated primer.
        assert!(matches!(
            design_from_change(&transcript, "c.25A>C"),
            Err(DesignError::InvalidChange { .. })
        ));
        assert!(matches!(
            design_from_change(&transcript, "not a change"),
            Err(DesignError::InvalidChange { .. })
        ));
    }
}
