use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use seqtools::cli::{fmt, Cli, Command};
use seqtools::io::resolve::has_fasta_extension;
use seqtools::io::{resolve_input, FastaReader};
use seqtools::orf::{OrfRanker, DEFAULT_DISPLAY_LIMIT};
use seqtools::report;
use seqtools::stats::WindowConfig;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Treats `seqtools genome.fasta ...` as `seqtools stats genome.fasta ...`.
fn expand_shorthand(mut args: Vec<OsString>) -> Vec<OsString> {
    if args.get(1).is_some_and(|arg| has_fasta_extension(Path::new(arg))) {
        args.insert(1, OsString::from("stats"));
    }
    args
}

fn main() -> Result<()> {
    let cli = Cli::parse_from(expand_shorthand(std::env::args_os().collect()));

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let input = resolve_input(command.file().map(|p| p.as_path()), &current_dir)?;

    if cli.verbose {
        eprintln!("{}", fmt::header("seqtools Configuration"));
        eprintln!("{}: {}", fmt::param_aligned("Input", 16), input.display());
        eprintln!();
        eprintln!("{}", fmt::progress("Reading FASTA records..."));
    }

    let records = FastaReader::read(&input)?;

    if cli.verbose {
        eprintln!(
            "{}",
            fmt::success(format!(
                "Loaded {} sequences ({} bp)",
                records.len(),
                FastaReader::total_length(&records)
            ))
        );
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_input_summary(&mut out, &input, &records)?;

    match command {
        Command::Stats { .. } => report::write_stats_report(&mut out, &records)?,
        Command::Orf {
            min_len,
            all_frames,
            ..
        } => {
            let limit = (!all_frames).then_some(DEFAULT_DISPLAY_LIMIT);
            let ranker = OrfRanker::new(Some(min_len), limit);

            if cli.verbose {
                eprintln!("{}: {} bp", fmt::param_aligned("Min ORF length", 16), ranker.min_len);
                eprintln!("{}", fmt::progress("Scanning 6 reading frames..."));
            }
            report::write_orf_report(&mut out, &records, &ranker)?;
        }
        Command::GcWindow {
            window,
            step,
            output,
            ..
        } => {
            let config = WindowConfig::new(Some(window), Some(step))?;
            let profiles = report::write_gc_window_report(&mut out, &records, config)?;

            if let Some(path) = output {
                let rows = report::export_gc_windows(&path, &profiles)?;

                if rows == 0 {
                    eprintln!(
                        "{}",
                        fmt::warning("No sequence is as long as the window; nothing to export")
                    );
                } else if cli.verbose {
                    eprintln!(
                        "{}",
                        fmt::success(format!("{rows} windows written to {}", path.display()))
                    );
                }
            }
        }
        Command::Codon { .. } => report::write_codon_report(&mut out, &records)?,
    }

    out.flush()?;
    Ok(())
}
