//! Plain-text reports for each analysis.

use crate::orf::{OrfRanker, RankedOrfs};
use crate::sequence::SequenceRecord;
use crate::stats::composition::DINUCLEOTIDES;
use crate::stats::{CodonUsage, Composition, GcProfile, WindowConfig};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const RULE_WIDTH: usize = 60;

fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "  {title}")?;
    writeln!(out, "{rule}")
}

fn record_header<W: Write>(out: &mut W, record: &SequenceRecord) -> io::Result<()> {
    writeln!(out, "\n>{}  [{} bp]", record.header(), record.len())
}

/// Writes the input summary printed before every report.
pub fn write_input_summary<W: Write>(
    out: &mut W,
    path: &Path,
    records: &[SequenceRecord],
) -> io::Result<()> {
    writeln!(out, "\nFile      : {}", path.display())?;
    writeln!(out, "Sequences : {}\n", records.len())
}

/// Writes the ranked ORFs of each record.
pub fn write_orf_report<W: Write>(
    out: &mut W,
    records: &[SequenceRecord],
    ranker: &OrfRanker,
) -> io::Result<()> {
    banner(
        out,
        &format!("ORF FINDER  (min length: {} bp, 6 frames)", ranker.min_len),
    )?;

    for record in records {
        record_header(out, record)?;
        write_ranked_orfs(out, &ranker.rank(&record.sequence))?;
    }

    Ok(())
}

fn write_ranked_orfs<W: Write>(out: &mut W, ranked: &RankedOrfs) -> io::Result<()> {
    let Some(longest) = ranked.longest() else {
        return writeln!(out, "  No ORFs found.\n");
    };

    writeln!(out, "  Total ORFs    : {}", ranked.total)?;
    writeln!(
        out,
        "  Longest ORF   : {} bp  (strand {}, frame {}, pos {}-{})",
        longest.length, longest.strand, longest.frame, longest.start, longest.end
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "  {:<4} {:<7} {:<6} {:<10} {:<8} Length",
        "#", "Strand", "Frame", "Start", "End"
    )?;
    writeln!(out, "  {}", "-".repeat(48))?;

    for (index, orf) in ranked.orfs.iter().enumerate() {
        writeln!(
            out,
            "  {:<4} {:<7} {:<6} {:<10} {:<8} {} bp",
            index + 1,
            orf.strand,
            orf.frame,
            orf.start,
            orf.end,
            orf.length
        )?;
    }

    if ranked.hidden() > 0 {
        writeln!(
            out,
            "  ... ({} more ORFs, use --all-frames to show all)",
            ranked.hidden()
        )?;
    }

    Ok(())
}

/// Writes composition statistics for each record.
pub fn write_stats_report<W: Write>(out: &mut W, records: &[SequenceRecord]) -> io::Result<()> {
    banner(out, "SEQUENCE STATISTICS")?;

    for record in records {
        let stats = Composition::from_sequence(&record.sequence);

        writeln!(out, "\n>{}", record.header())?;
        writeln!(out, "Total sequence length: {} bp", stats.total())?;
        writeln!(out, "GC content: {:.2}%", stats.gc_content() * 100.0)?;
        writeln!(out, "AT content: {:.2}%", stats.at_content() * 100.0)?;

        writeln!(out, "\nNucleotide Frequency")?;
        for base in [b'A', b'G', b'C', b'T'] {
            writeln!(
                out,
                "{} content: {:.2}% , {} bp",
                base as char,
                stats.fraction(base) * 100.0,
                stats.count(base)
            )?;
        }

        writeln!(out, "\nDinucleotide Frequency")?;
        for pair in DINUCLEOTIDES {
            writeln!(
                out,
                "{}{}: {:.6}",
                pair[0] as char,
                pair[1] as char,
                stats.pair_frequency(pair)
            )?;
        }

        writeln!(out, "\nGC skew: {:.6}", stats.gc_skew())?;
        writeln!(out, "AT skew: {:.6}", stats.at_skew())?;
        writeln!(
            out,
            "\nCpG Observed/Expected ratio: {:.6}",
            stats.cpg_observed_expected()
        )?;
    }

    Ok(())
}

/// Writes the sliding-window GC summary of each record.
///
/// Returns the profiles that were computed, paired with their record, so the
/// caller can export the windows.
pub fn write_gc_window_report<'a, W: Write>(
    out: &mut W,
    records: &'a [SequenceRecord],
    config: WindowConfig,
) -> io::Result<Vec<(&'a SequenceRecord, GcProfile)>> {
    banner(
        out,
        &format!(
            "SLIDING WINDOW GC  (window={} bp, step={} bp)",
            config.window, config.step
        ),
    )?;

    let mut profiles = Vec::new();
    for record in records {
        let Some(profile) = GcProfile::compute(&record.sequence, config) else {
            writeln!(
                out,
                "\n  SKIPPED >{}: sequence shorter than window ({} bp < {} bp)",
                record.header(),
                record.len(),
                config.window
            )?;
            continue;
        };

        writeln!(out, "\n  >{}", record.header())?;
        writeln!(out, "    Length       : {} bp", record.len())?;
        writeln!(out, "    Overall GC   : {:.2}%", profile.overall)?;
        writeln!(
            out,
            "    GC range     : {:.2}% - {:.2}%",
            profile.min, profile.max
        )?;
        profiles.push((record, profile));
    }

    Ok(profiles)
}

/// Writes GC windows as tab-separated `id`, `center`, `gc_percent` rows.
pub fn write_gc_windows_tsv<W: Write>(
    out: &mut W,
    profiles: &[(&SequenceRecord, GcProfile)],
) -> io::Result<()> {
    writeln!(out, "id\tcenter\tgc_percent")?;
    for (record, profile) in profiles {
        for window in &profile.windows {
            writeln!(out, "{}\t{}\t{:.4}", record.id, window.center, window.gc_percent)?;
        }
    }
    Ok(())
}

/// Exports GC windows to a TSV file at `path`.
///
/// Returns the number of window rows written; the header is always written.
pub fn export_gc_windows(path: &Path, profiles: &[(&SequenceRecord, GcProfile)]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create TSV file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_gc_windows_tsv(&mut writer, profiles)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write TSV file: {}", path.display()))?;

    Ok(profiles.iter().map(|(_, profile)| profile.windows.len()).sum())
}

/// Writes the codon usage table of each record.
pub fn write_codon_report<W: Write>(out: &mut W, records: &[SequenceRecord]) -> io::Result<()> {
    banner(out, "CODON USAGE TABLE")?;

    for record in records {
        record_header(out, record)?;
        let usage = CodonUsage::from_sequence(&record.sequence);

        if usage.is_empty() {
            writeln!(out, "  No valid codons found.\n")?;
            continue;
        }

        writeln!(out, "  {:<6} {:<6} {:<8} Freq/1000", "Codon", "AA", "Count")?;
        writeln!(out, "  {}", "-".repeat(35))?;
        for group in usage.by_amino_acid() {
            for (codon, count) in &group.codons {
                writeln!(
                    out,
                    "  {:<6} {:<6} {:<8} {:.2}",
                    String::from_utf8_lossy(codon),
                    group.amino_acid,
                    count,
                    usage.per_thousand(codon)
                )?;
            }
        }

        writeln!(out, "\n  Total codons analyzed: {}", usage.total())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_orf_report_lists_candidates() {
        let records = vec![SequenceRecord::new("toy", "ATGAAATAA")];
        let ranker = OrfRanker::new(Some(1), None);
        let text = render(|out| write_orf_report(out, &records, &ranker));

        assert!(text.contains("ORF FINDER  (min length: 1 bp, 6 frames)"));
        assert!(text.contains(">toy  [9 bp]"));
        assert!(text.contains("Total ORFs    : 1"));
        assert!(text.contains("Longest ORF   : 9 bp  (strand +, frame 1, pos 1-9)"));
        assert!(text.contains("  1    +       1      1          9        9 bp"));
        assert!(!text.contains("more ORFs"));
    }

    #[test]
    fn test_headers_include_description() {
        let records = vec![SequenceRecord::new("s1", "ATGAAATAA")
            .with_description(Some("desc text".to_string()))];

        let orf = render(|out| write_orf_report(out, &records, &OrfRanker::new(Some(1), None)));
        assert!(orf.contains(">s1 desc text  [9 bp]"));

        let stats = render(|out| write_stats_report(out, &records));
        assert!(stats.contains("\n>s1 desc text\n"));

        let codon = render(|out| write_codon_report(out, &records));
        assert!(codon.contains(">s1 desc text  [9 bp]"));

        let config = WindowConfig::new(Some(4), Some(2)).unwrap();
        let gc = render(|out| write_gc_window_report(out, &records, config).map(|_| ()));
        assert!(gc.contains("  >s1 desc text\n"));
    }

    #[test]
    fn test_orf_report_without_orfs() {
        let records = vec![SequenceRecord::new("open", "ATGAAA")];
        let text = render(|out| write_orf_report(out, &records, &OrfRanker::default()));
        assert!(text.contains("No ORFs found."));
    }

    #[test]
    fn test_orf_report_truncation_notice() {
        let records = vec![SequenceRecord::new("rep", "ATGAAATAAGGG".repeat(5))];
        let ranker = OrfRanker::new(Some(1), Some(2));
        let text = render(|out| write_orf_report(out, &records, &ranker));
        assert!(text.contains("Total ORFs    : 5"));
        assert!(text.contains("... (3 more ORFs, use --all-frames to show all)"));
    }

    #[test]
    fn test_stats_report() {
        let records = vec![SequenceRecord::new("s", "GGGCAT")];
        let text = render(|out| write_stats_report(out, &records));
        assert!(text.contains("Total sequence length: 6 bp"));
        assert!(text.contains("GC content: 66.67%"));
        assert!(text.contains("G content: 50.00% , 3 bp"));
        assert!(text.contains("GC skew: 0.500000"));
    }

    #[test]
    fn test_gc_window_report_and_tsv() {
        let records = vec![
            SequenceRecord::new("long", "GGGGAAAATT"),
            SequenceRecord::new("short", "GC"),
        ];
        let config = WindowConfig::new(Some(4), Some(2)).unwrap();

        let mut buffer = Vec::new();
        let profiles = write_gc_window_report(&mut buffer, &records, config).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Overall GC   : 40.00%"));
        assert!(text.contains("GC range     : 0.00% - 100.00%"));
        assert!(text.contains("SKIPPED >short"));
        assert_eq!(profiles.len(), 1);

        let tsv = render(|out| write_gc_windows_tsv(out, &profiles));
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines[0], "id\tcenter\tgc_percent");
        assert_eq!(lines[1], "long\t2\t100.0000");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_export_gc_windows() {
        let records = vec![SequenceRecord::new("long", "GGGGAAAATT")];
        let config = WindowConfig::new(Some(4), Some(2)).unwrap();
        let profiles = write_gc_window_report(&mut io::sink(), &records, config).unwrap();

        let path = std::env::temp_dir().join("seqtools_test_windows.tsv");
        assert_eq!(export_gc_windows(&path, &profiles).unwrap(), 4);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 5);

        // nothing long enough: only the header is written
        assert_eq!(export_gc_windows(&path, &[]).unwrap(), 0);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "id\tcenter\tgc_percent\n");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_codon_report() {
        let records = vec![
            SequenceRecord::new("c", "ATGAAATAA"),
            SequenceRecord::new("n", "NN"),
        ];
        let text = render(|out| write_codon_report(out, &records));
        assert!(text.contains("  ATG    Met    1        333.33"));
        assert!(text.contains("Total codons analyzed: 3"));
        assert!(text.contains("No valid codons found."));
    }
}
