// Command-line interface definition

use crate::orf::DEFAULT_MIN_ORF_LEN;
use crate::stats::gc_window::{DEFAULT_STEP, DEFAULT_WINDOW};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqtools",
    version,
    about = "FASTA sequence analysis toolkit",
    long_about = None,
    after_help = "Examples:\n  \
        seqtools stats      genome.fasta\n  \
        seqtools orf        genome.fasta --min 300\n  \
        seqtools orf        genome.fasta --all-frames\n  \
        seqtools gc-window  genome.fasta --window 200 --step 50\n  \
        seqtools codon      genome.fasta"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Basic sequence statistics
    Stats {
        /// Input FASTA file; defaults to the only .fasta file in the current directory
        #[arg(value_name = "FASTA")]
        file: Option<PathBuf>,
    },

    /// ORF finder over 6 reading frames
    Orf {
        /// Input FASTA file; defaults to the only .fasta file in the current directory
        #[arg(value_name = "FASTA")]
        file: Option<PathBuf>,

        /// Minimum ORF length in bp
        #[arg(long = "min", value_name = "BP", default_value_t = DEFAULT_MIN_ORF_LEN)]
        min_len: usize,

        /// Show all ORFs instead of the top 20 per sequence
        #[arg(long)]
        all_frames: bool,
    },

    /// Sliding window GC analysis
    #[command(alias = "gc_window")]
    GcWindow {
        /// Input FASTA file; defaults to the only .fasta file in the current directory
        #[arg(value_name = "FASTA")]
        file: Option<PathBuf>,

        /// Window size in bp
        #[arg(long, value_name = "BP", default_value_t = DEFAULT_WINDOW)]
        window: usize,

        /// Step size in bp
        #[arg(long, value_name = "BP", default_value_t = DEFAULT_STEP)]
        step: usize,

        /// Write per-window GC values to a tab-separated file
        #[arg(short = 'o', long, value_name = "TSV")]
        output: Option<PathBuf>,
    },

    /// Codon usage table, standard genetic code, frame +1
    Codon {
        /// Input FASTA file; defaults to the only .fasta file in the current directory
        #[arg(value_name = "FASTA")]
        file: Option<PathBuf>,
    },
}

impl Command {
    /// The explicitly requested input file, if any.
    pub fn file(&self) -> Option<&PathBuf> {
        match self {
            Command::Stats { file }
            | Command::Orf { file, .. }
            | Command::GcWindow { file, .. }
            | Command::Codon { file } => file.as_ref(),
        }
    }
}

/// Styled messages for stderr.
pub mod fmt {
    use console::style;
    use std::fmt::Display;

    pub fn header(title: impl Display) -> String {
        style(format!("== {title} ==")).bold().cyan().to_string()
    }

    /// A parameter name left-aligned to `width` columns.
    pub fn param_aligned(name: impl Display, width: usize) -> String {
        style(format!("{name:<width$}")).dim().to_string()
    }

    pub fn progress(message: impl Display) -> String {
        format!("{} {message}", style("->").cyan())
    }

    pub fn success(message: impl Display) -> String {
        format!("{} {message}", style("OK").green().bold())
    }

    pub fn warning(message: impl Display) -> String {
        format!("{} {message}", style("WARN").yellow().bold())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orf_defaults() {
        let cli = Cli::try_parse_from(["seqtools", "orf", "genome.fasta"]).unwrap();
        match cli.command {
            Some(Command::Orf {
                file,
                min_len,
                all_frames,
            }) => {
                assert_eq!(file, Some(PathBuf::from("genome.fasta")));
                assert_eq!(min_len, 100);
                assert!(!all_frames);
            }
            _ => panic!("expected orf subcommand"),
        }
    }

    #[test]
    fn test_gc_window_options() {
        let cli = Cli::try_parse_from([
            "seqtools", "gc-window", "--window", "200", "--step", "50", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Command::GcWindow {
                file, window, step, ..
            }) => {
                assert!(file.is_none());
                assert_eq!((window, step), (200, 50));
            }
            _ => panic!("expected gc-window subcommand"),
        }
    }

    #[test]
    fn test_gc_window_underscore_alias() {
        let cli = Cli::try_parse_from(["seqtools", "gc_window", "genome.fasta"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::GcWindow { window: 100, step: 10, .. })
        ));
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["seqtools"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_command_file() {
        let cli = Cli::try_parse_from(["seqtools", "codon", "x.fasta"]).unwrap();
        assert_eq!(
            cli.command.as_ref().and_then(Command::file),
            Some(&PathBuf::from("x.fasta"))
        );
    }
}
