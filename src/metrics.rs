//! Pure sequence metrics for primer evaluation.
//!
//! Every calculator is a full recomputation over the sequence it is handed;
//! nothing is cached, so a candidate that has just grown can never observe a
//! stale value.
//!
//! # Examples
//! ```
//! use quikprimer::metrics;
//! assert_eq!(metrics::gc_percent("GGCC"), 100.0);
//! assert!(metrics::gc_terminal("GATTC"));
//! assert_eq!(metrics::reverse_complement("AACGT"), "ACGTT");
//! ```

use bio::alphabets::dna;

/// Mismatch term of the melting-temperature formula. A single-base
/// substitution contributes one percent mismatch; insertion/deletion primers
/// use a different formula and are not supported by this crate.
const SNP_MISMATCH: f64 = 1.0;

/// Percentage of G/C bases among all A/T/G/C bases of `seq`.
pub fn gc_percent(seq: &str) -> f64 {
    let gc = seq.bytes().filter(|b| matches!(b, b'G' | b'C')).count();
    let at = seq.bytes().filter(|b| matches!(b, b'A' | b'T')).count();
    100.0 * gc as f64 / (gc + at) as f64
}

/// Estimated melting temperature of a substitution primer:
///
/// `Tm = 81.5 + 0.41 * round(%GC) - 675/N - %mismatch`
///
/// where `N` is the primer length and `%mismatch` is 1 for a single-base
/// change.
pub fn melting_temp(seq: &str) -> f64 {
    let n = seq.len() as f64;
    81.5 + 0.41 * gc_percent(seq).round() - 675.0 / n - SNP_MISMATCH
}

/// True iff `seq` both starts and ends on a G or C base.
pub fn gc_terminal(seq: &str) -> bool {
    let first = seq.as_bytes().first();
    let last = seq.as_bytes().last();
    matches!(first, Some(b'G' | b'C')) && matches!(last, Some(b'G' | b'C'))
}

/// Opposite-strand counterpart of `seq`: reversed and base-complemented.
pub fn reverse_complement(seq: &str) -> String {
    String::from_utf8(dna::revcomp(seq.as_bytes())).expect("complement of ASCII is ASCII")
}


#[cfg(test)]
mod revcomp_tests {
    use super::*;

    #[test]
    fn revcomp_is_an_involution() {
        for seq in ["A", "ACGT", "GGGTTTAACC", "ATGCGGTA", "CCCCCCCC"] {
            assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
        }
    }

    #[test]
    fn revcomp_pairs_watson_crick() {
        assert_eq!(reverse_complement("ATGC"), "GCAT");
        assert_eq!(reverse_complement("AAAA"), "TTTT");
        assert_eq!(reverse_complement("GATTACA"), "TGTAATC");
    }
}
