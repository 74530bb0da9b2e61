//! The iterative primer-extension engine.
//!
//! Starting from a centred 23-mer, the engine alternates between evaluating
//! the candidate against the acceptance rules and growing one flank, until
//! every rule holds or the length ceiling is passed. Each non-terminal
//! iteration grows the sequence by exactly one base, so the loop always
//! terminates.
//!
//! Growth direction is a pure function of the two flank lengths
//! ([`next_extension`]): an over-long left flank triggers the
//! shrink-left/grow-right move that recentres the mutation while pushing
//! growth rightward; otherwise the left flank grows, which also settles the
//! equal-flank case (the tie-break favors left).

use crate::error::DesignError;
use crate::mutation::Mutation;
use crate::primer::{Extension, PrimerCandidate, MAX_PRIMER_LEN};

/// Why the engine stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Every acceptance rule holds.
    Satisfied,
    /// The candidate passed [`MAX_PRIMER_LEN`]; it is returned best-effort
    /// even though some rule is still unmet.
    MaxLength,
}

/// A finished design: the terminal candidate plus how the loop ended.
#[derive(Debug)]
pub struct PrimerDesign<'a> {
    /// The candidate in its terminal state.
    pub primer: PrimerCandidate<'a>,
    /// Whether the rules were satisfied or the length ceiling was hit.
    pub outcome: Outcome,
    /// Number of evaluation passes, counting the terminal one.
    pub iterations: usize,
}

/// Pick the next growth move from the flank imbalance. Equal flanks grow
/// left, the deterministic tie-break.
pub fn next_extension(left_flank: usize, right_flank: usize) -> Extension {
    if left_flank > right_flank {
        Extension::ShrinkLeftGrowRight
    } else {
        Extension::GrowLeft
    }
}

/// Design a mutagenic primer for `mutation` on `transcript`.
///
/// Fails with [`DesignError::OutOfBounds`] when the transcript cannot supply
/// the flank window, either around the initial 23-mer or during a growth
/// move.
///
/// # Examples
/// ```
/// use quikprimer::{design_primer, Mutation, Outcome};
/// let transcript = "G".repeat(50);
/// let mutation = Mutation::parse("c.25G>C", &transcript).unwrap();
/// let design = design_primer(&transcript, &mutation).unwrap();
/// assert_eq!(design.outcome, Outcome::Satisfied);
/// assert_eq!(design.primer.len(), 23);
/// ```
pub fn design_primer<'a>(
    transcript: &'a str,
    mutation: &Mutation,
) -> Result<PrimerDesign<'a>, DesignError> {
    let mut primer = PrimerCandidate::new(transcript, mutation)?;
    let mut iterations = 0;
    loop {
        iterations += 1;
        if primer.satisfies_rules() {
            return Ok(PrimerDesign { primer, outcome: Outcome::Satisfied, iterations });
        }
        if primer.len() > MAX_PRIMER_LEN {
            return Ok(PrimerDesign { primer, outcome: Outcome::MaxLength, iterations });
        }
        let ext = next_extension(primer.left_flank(), primer.right_flank());
        primer.extend(ext)?;
    }
}

#[cfg(test)]
mod decision_tests {
    use super::*;

    #[test]
    fn imbalance_drives_the_move() {
        assert_eq!(next_extension(12, 11), Extension::ShrinkLeftGrowRight);
        assert_eq!(next_extension(20, 13), Extension::ShrinkLeftGrowRight);
        assert_eq!(next_extension(11, 12), Extension::GrowLeft);
        assert_eq!(next_extension(11, 13), Extension::GrowLeft);
    }

    #[test]
    fn equal_flanks_grow_left() {
        for n in [0, 1, 11, 13, 22] {
            assert_eq!(next_extension(n, n), Extension::GrowLeft);
        }
    }
}
