//! Sequence file input: transcript reading and CDS/ORF extraction.
//!
//! ### Design
//! - **FASTA** parsed with `needletail` (first record wins; multi-line
//!   sequences are flattened).
//! - Files missing the leading `>` marker are not rejected: every line is
//!   treated as sequence data, matching what wet-lab users actually paste
//!   into a text file.
//! - The transcript is the first contiguous run of `A/C/G/T` after
//!   normalization; a file without one is an error.
//!
//! ### Errors
//! IO and parse errors are bubbled via `anyhow::Result` to the caller.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Result;
use needletail::parse_fastx_file;
use regex::Regex;

use crate::error::DesignError;

fn base_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ACGT]+").expect("valid pattern"))
}

/// Load a sequence file as one whitespace-free string, tolerating a missing
/// FASTA header.
fn read_source(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)?;
    if raw.starts_with('>') {
        let mut reader = parse_fastx_file(path)?;
        match reader.next() {
            Some(record) => {
                let record = record?;
                Ok(String::from_utf8_lossy(&record.seq()).into_owned())
            }
            None => anyhow::bail!(DesignError::EmptySequence {
                path: path.display().to_string(),
            }),
        }
    } else {
        // No header marker: every line is sequence data.
        Ok(raw.split_whitespace().collect())
    }
}

/// Read the transcript from `path`: the first contiguous run of A/C/G/T
/// bases after header and whitespace stripping.
pub fn read_transcript<P: AsRef<Path>>(path: P) -> Result<String> {
    let p = path.as_ref();
    let flat = read_source(p)?;
    match base_run_re().find(&flat) {
        Some(run) => Ok(run.as_str().to_string()),
        None => anyhow::bail!(DesignError::EmptySequence { path: p.display().to_string() }),
    }
}

/// Slice the 1-based inclusive range `[start, end]` out of `seq`.
///
/// This is the CDS/ORF coordinate convention used by NCBI `NM_` reference
/// records.
pub fn extract_orf(seq: &str, start: usize, end: usize) -> std::result::Result<&str, DesignError> {
    if start == 0 || start > end || end > seq.len() {
        return Err(DesignError::InvalidRange { start, end, len: seq.len() });
    }
    Ok(&seq[start - 1..end])
}

/// Extract the CDS/ORF slice from `fasta` and write it to `output` as bare
/// sequence.
pub fn write_orf<P, Q>(fasta: P, start: usize, end: usize, output: Q) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let source = read_source(fasta.as_ref())?;
    let orf = extract_orf(&source, start, end)?;
    fs::write(output, orf)?;
    Ok(())
}
