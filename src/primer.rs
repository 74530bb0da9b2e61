//! The primer candidate under construction.
//!
//! A [`PrimerCandidate`] is the single piece of mutable state in a design
//! run: the current oligomer, the flank bookkeeping that ties it back to the
//! transcript, and the mutation it introduces. Metrics are derived on demand
//! from the current sequence (see [`crate::metrics`]), never stored, so a
//! candidate that has just grown cannot report stale numbers.
//!
//! The sequence always equals `left_flank` transcript bases, the changed
//! base, then `right_flank` transcript bases, and the flank window stays
//! inside the transcript at every step.

use core::fmt;

use crate::error::DesignError;
use crate::metrics;
use crate::mutation::Mutation;

/// Transcript bases on each side of the mutation in a fresh candidate
/// (23-mer total).
pub const INITIAL_FLANK: usize = 11;

/// Primers past this length are not worth extending further; longer oligos
/// favour secondary-structure formation during the mutagenesis reaction.
pub const MAX_PRIMER_LEN: usize = 45;

/// Minimum acceptable GC content, in percent.
pub const MIN_GC_PERCENT: f64 = 40.0;

/// Minimum acceptable melting temperature, in degrees C.
pub const MIN_MELTING_TEMP: f64 = 78.0;

/// Growth move applied to a candidate for one extension step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Extension {
    /// Prepend the next transcript base on the 5' side.
    GrowLeft,
    /// Drop the leftmost base and append the next two transcript bases on
    /// the 3' side; net one base gained, recentring growth rightward.
    ShrinkLeftGrowRight,
}

/// A mutagenic primer being grown around a point mutation.
#[derive(Clone, Debug)]
pub struct PrimerCandidate<'a> {
    sequence: String,
    transcript: &'a str,
    mutation: Mutation,
    left_flank: usize,
    right_flank: usize,
}

impl<'a> PrimerCandidate<'a> {
    /// Build the initial candidate: [`INITIAL_FLANK`] transcript bases on
    /// each side of the changed base.
    ///
    /// Fails with [`DesignError::OutOfBounds`] when the window would start
    /// before the transcript or run past its end.
    pub fn new(transcript: &'a str, mutation: &Mutation) -> Result<Self, DesignError> {
        let position = mutation.position;
        if position == 0 || position + INITIAL_FLANK > transcript.len() {
            return Err(DesignError::OutOfBounds { position });
        }
        // 0-based index of the mutated base.
        let mid = position - 1;
        if mid < INITIAL_FLANK {
            return Err(DesignError::OutOfBounds { position });
        }
        let mut sequence = String::with_capacity(MAX_PRIMER_LEN + 1);
        sequence.push_str(&transcript[mid - INITIAL_FLANK..mid]);
        sequence.push(mutation.change as char);
        sequence.push_str(&transcript[position..position + INITIAL_FLANK]);
        Ok(PrimerCandidate {
            sequence,
            transcript,
            mutation: mutation.clone(),
            left_flank: INITIAL_FLANK,
            right_flank: INITIAL_FLANK,
        })
    }

    /// Apply one growth move.
    ///
    /// Fails with [`DesignError::OutOfBounds`] when the move would step
    /// outside the transcript; the flank window invariant must hold across
    /// every extension.
    pub fn extend(&mut self, ext: Extension) -> Result<(), DesignError> {
        let mid = self.mutation.position - 1;
        let bases = self.transcript.as_bytes();
        match ext {
            Extension::GrowLeft => {
                if self.left_flank + 1 > mid {
                    return Err(DesignError::OutOfBounds { position: self.mutation.position });
                }
                self.left_flank += 1;
                self.sequence.insert(0, bases[mid - self.left_flank] as char);
            }
            Extension::ShrinkLeftGrowRight => {
                debug_assert!(self.left_flank > 0);
                if mid + self.right_flank + 2 >= self.transcript.len() {
                    return Err(DesignError::OutOfBounds { position: self.mutation.position });
                }
                self.left_flank -= 1;
                self.sequence.remove(0);
                for _ in 0..2 {
                    self.right_flank += 1;
                    self.sequence.push(bases[mid + self.right_flank] as char);
                }
            }
        }
        Ok(())
    }

    /// Forward-strand sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Primer length in bases.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// A candidate is never empty; present for `len` symmetry.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Transcript bases included left of the mutation.
    pub fn left_flank(&self) -> usize {
        self.left_flank
    }

    /// Transcript bases included right of the mutation.
    pub fn right_flank(&self) -> usize {
        self.right_flank
    }

    /// The substitution this primer introduces.
    pub fn mutation(&self) -> &Mutation {
        &self.mutation
    }

    /// GC content of the current sequence, in percent.
    pub fn gc_percent(&self) -> f64 {
        metrics::gc_percent(&self.sequence)
    }

    /// Estimated melting temperature of the current sequence.
    pub fn melting_temp(&self) -> f64 {
        metrics::melting_temp(&self.sequence)
    }

    /// Whether the current sequence starts and ends on G or C.
    pub fn gc_terminal(&self) -> bool {
        metrics::gc_terminal(&self.sequence)
    }

    /// Reverse-strand primer: the reverse complement of the forward sequence.
    pub fn reverse_complement(&self) -> String {
        metrics::reverse_complement(&self.sequence)
    }

    /// True when the candidate meets every acceptance rule: GC content at
    /// least [`MIN_GC_PERCENT`], G/C terminal bases, melting temperature at
    /// least [`MIN_MELTING_TEMP`].
    pub fn satisfies_rules(&self) -> bool {
        self.gc_percent() >= MIN_GC_PERCENT
            && self.gc_terminal()
            && self.melting_temp() >= MIN_MELTING_TEMP
    }
}

impl fmt::Display for PrimerCandidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequence (f)  : {}", self.sequence)?;
        writeln!(f, "Sequence (r)  : {}", self.reverse_complement())?;
        writeln!(f, "Base change   : {}", self.mutation)?;
        writeln!(f, "GC content    : {} %", self.gc_percent().round())?;
        writeln!(f, "Melting temp  : {:.1} degrees C", self.melting_temp())?;
        write!(f, "Length base   : {}", self.sequence.len())
    }
}

#[cfg(test)]
mod candidate_tests {
    use super::*;

    fn mutation(position: usize, original: u8, change: u8) -> Mutation {
        Mutation { position, original, change }
    }

    #[test]
    fn initial_candidate_is_a_centred_23mer() {
        // 11 A bases either side of a central A changed to T.
        let transcript = "A".repeat(23);
        let primer = PrimerCandidate::new(&transcript, &mutation(12, b'A', b'T')).unwrap();
        assert_eq!(primer.len(), 23);
        assert_eq!(primer.left_flank(), 11);
        assert_eq!(primer.right_flank(), 11);
        assert_eq!(primer.sequence(), format!("{}T{}", "A".repeat(11), "A".repeat(11)));
    }

    #[test]
    fn initial_window_left_of_transcript_is_fatal() {
        let transcript = "A".repeat(60);
        for position in [1, 5, 11] {
            let err = PrimerCandidate::new(&transcript, &mutation(position, b'A', b'T'));
            assert!(matches!(err, Err(DesignError::OutOfBounds { .. })), "position {position}");
        }
        assert!(PrimerCandidate::new(&transcript, &mutation(12, b'A', b'T')).is_ok());
    }

    #[test]
    fn initial_window_right_of_transcript_is_fatal() {
        let transcript = "A".repeat(60);
        for position in [50, 55, 60] {
            let err = PrimerCandidate::new(&transcript, &mutation(position, b'A', b'T'));
            assert!(matches!(err, Err(DesignError::OutOfBounds { .. })), "position {position}");
        }
        assert!(PrimerCandidate::new(&transcript, &mutation(49, b'A', b'T')).is_ok());
    }

    #[test]
    fn grow_left_prepends_the_preceding_transcript_base() {
        // Mark the base just left of the initial window.
        let mut transcript = vec![b'A'; 40];
        transcript[8] = b'G'; // 0-based; position 21 has flank 11 covering 9..20
        let transcript = String::from_utf8(transcript).unwrap();
        let mut primer = PrimerCandidate::new(&transcript, &mutation(21, b'A', b'T')).unwrap();
        primer.extend(Extension::GrowLeft).unwrap();
        assert_eq!(primer.left_flank(), 12);
        assert_eq!(primer.len(), 24);
        assert!(primer.sequence().starts_with('G'));
    }

    #[test]
    fn shrink_left_grow_right_nets_one_base() {
        let mut transcript = vec![b'A'; 40];
        transcript[31] = b'G';
        transcript[32] = b'C'; // the two bases appended by the move
        let transcript = String::from_utf8(transcript).unwrap();
        let mut primer = PrimerCandidate::new(&transcript, &mutation(20, b'A', b'T')).unwrap();
        primer.extend(Extension::GrowLeft).unwrap();
        let before = primer.len();
        primer.extend(Extension::ShrinkLeftGrowRight).unwrap();
        assert_eq!(primer.len(), before + 1);
        assert_eq!(primer.left_flank(), 11);
        assert_eq!(primer.right_flank(), 13);
        assert!(primer.sequence().ends_with("GC"));
    }

    #[test]
    fn extension_past_the_transcript_end_is_fatal() {
        // Right flank has exactly no room to grow.
        let transcript = "A".repeat(23);
        let mut primer = PrimerCandidate::new(&transcript, &mutation(12, b'A', b'T')).unwrap();
        assert!(primer.extend(Extension::GrowLeft).is_err());
        let mut primer = PrimerCandidate::new(&transcript, &mutation(12, b'A', b'T')).unwrap();
        assert!(primer.extend(Extension::ShrinkLeftGrowRight).is_err());
    }

    #[test]
    fn reverse_complement_tracks_the_sequence() {
        let transcript = "ACGTACGTACGTACGTACGTACGTACGTACGTACGT".to_string();
        let mut primer = PrimerCandidate::new(&transcript, &mutation(15, b'G', b'C')).unwrap();
        let rc = primer.reverse_complement();
        assert_eq!(crate::metrics::reverse_complement(&rc), primer.sequence());
        primer.extend(Extension::GrowLeft).unwrap();
        let rc = primer.reverse_complement();
        assert_eq!(crate::metrics::reverse_complement(&rc), primer.sequence());
    }

    #[test]
    fn record_layout_matches_the_report_format() {
        let transcript = "G".repeat(50);
        let primer = PrimerCandidate::new(&transcript, &mutation(25, b'G', b'C')).unwrap();
        let record = primer.to_string();
        assert!(record.contains("Sequence (f)  : "));
        assert!(record.contains("Sequence (r)  : "));
        assert!(record.contains("Base change   : c.25G>C"));
        assert!(record.contains("GC content    : 100 %"));
        assert!(record.contains("Length base   : 23"));
    }
}
