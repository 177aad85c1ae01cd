//! FASTA file reading.

use crate::error::InputError;
use crate::sequence::SequenceRecord;
use flate2::read::MultiGzDecoder;
use noodles::fasta;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for FASTA files
pub struct FastaReader;

impl FastaReader {
    /// Read every record of a FASTA file, uppercasing sequences.
    ///
    /// Gzip- and BGZF-compressed files are detected from their magic bytes and
    /// decompressed transparently.
    ///
    /// # Example
    /// ```no_run
    /// use seqtools::io::FastaReader;
    /// use std::path::Path;
    ///
    /// let records = FastaReader::read(Path::new("genome.fasta"))?;
    /// for record in &records {
    ///     println!("{}: {} bp", record.id, record.len());
    /// }
    /// # Ok::<(), seqtools::error::InputError>(())
    /// ```
    ///
    /// # Errors
    /// Returns an [`InputError`] if the file cannot be opened or parsed, or if
    /// it contains no records.
    pub fn read(path: &Path) -> Result<Vec<SequenceRecord>, InputError> {
        let open_error = |source| InputError::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_error)?;
        let mut buffered = BufReader::new(file);
        let is_compressed = is_gzip_compressed(&mut buffered).map_err(open_error)?;

        let mut inner: Box<dyn BufRead> = if is_compressed {
            Box::new(BufReader::new(MultiGzDecoder::new(buffered)))
        } else {
            Box::new(buffered)
        };

        skip_leading_whitespace(&mut inner).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = fasta::io::Reader::new(inner);
        let mut records = Vec::new();

        for result in reader.records() {
            let record = result.map_err(|source| InputError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

            let id = String::from_utf8_lossy(record.name()).to_string();
            let description = record
                .description()
                .map(|d| String::from_utf8_lossy(d).to_string());
            records.push(SequenceRecord::new(id, record.sequence()).with_description(description));
        }

        if records.is_empty() {
            return Err(InputError::NoSequences(path.to_path_buf()));
        }

        Ok(records)
    }

    /// Calculate the total length of all sequences
    pub fn total_length(records: &[SequenceRecord]) -> usize {
        records.iter().map(|r| r.len()).sum()
    }
}

/// Helper function to check if a file is gzip-compressed
fn is_gzip_compressed<R: std::io::Read>(reader: &mut BufReader<R>) -> std::io::Result<bool> {
    let buffer = reader.fill_buf()?;

    // Check for gzip magic bytes (0x1f 0x8b)
    Ok(buffer.len() >= 2 && buffer[0] == 0x1f && buffer[1] == 0x8b)
}

/// Consumes blank lines and other whitespace ahead of the first header
fn skip_leading_whitespace<R: BufRead + ?Sized>(reader: &mut R) -> std::io::Result<()> {
    loop {
        let buffer = reader.fill_buf()?;
        if buffer.is_empty() {
            return Ok(());
        }

        let blank = buffer.iter().take_while(|b| b.is_ascii_whitespace()).count();
        let reached_content = blank < buffer.len();
        reader.consume(blank);

        if reached_content {
            return Ok(());
        }
    }
}
