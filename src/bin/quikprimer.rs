use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use quikprimer::primer::MAX_PRIMER_LEN;
use quikprimer::{design_primer, seqio, DesignError, Mutation, Outcome};

/// Quikprimer CLI
#[derive(Parser)]
#[command(name = "quikprimer")]
#[command(version)]
#[command(about = "Mutagenic primer design for site-directed mutagenesis PCR", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Design a mutagenic primer for a single cDNA base change
    Design {
        /// Transcript FASTA file (CDS/ORF sequence)
        fasta: PathBuf,
        /// cDNA change, e.g. "c.1345A>T"; prompted for on stdin when omitted
        #[arg(long)]
        change: Option<String>,
    },

    /// Extract the CDS/ORF slice from a FASTA file
    Orf {
        /// Source FASTA file
        fasta: PathBuf,
        /// 1-based start of the CDS (from the NCBI NM_ record)
        start: usize,
        /// 1-based inclusive end of the CDS
        end: usize,
        /// Output file
        #[arg(long, default_value = "orf.fasta")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Design { fasta, change } => cmd_design(fasta, change),
        Commands::Orf { fasta, start, end, output } => cmd_orf(fasta, start, end, output),
    }
}

fn cmd_design(fasta: PathBuf, change: Option<String>) -> anyhow::Result<()> {
    let transcript = seqio::read_transcript(&fasta)?;
    println!("transcript length: {}", transcript.len());

    let mutation = match change {
        // A descriptor given on the command line has nowhere to re-prompt;
        // treat a bad one as a hard error.
        Some(c) => Mutation::parse(&c, &transcript)?,
        None => prompt_mutation(&transcript)?,
    };

    let design = design_primer(&transcript, &mutation)?;
    if design.outcome == Outcome::MaxLength {
        eprintln!(
            "no primer within {} bases met every rule; reporting the closest candidate",
            MAX_PRIMER_LEN
        );
    }
    println!("{}", design.primer);
    Ok(())
}

/// Ask for the cDNA change on stdin until a descriptor validates against the
/// transcript.
fn prompt_mutation(transcript: &str) -> anyhow::Result<Mutation> {
    let stdin = io::stdin();
    loop {
        println!("Please enter the cDNA change you would like to make");
        println!("Example: c.1345A>T");
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("stdin closed before a valid cDNA change was entered");
        }
        match Mutation::parse(line.trim(), transcript) {
            Ok(m) => {
                println!("{m}");
                return Ok(m);
            }
            Err(e @ DesignError::InvalidChange { .. }) => {
                eprintln!("Invalid cDNA change entered: {e}");
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn cmd_orf(fasta: PathBuf, start: usize, end: usize, output: PathBuf) -> anyhow::Result<()> {
    seqio::write_orf(&fasta, start, end, &output)?;
    println!("orf file \"{}\" written", output.display());
    Ok(())
}
