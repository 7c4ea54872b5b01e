use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use crate::models::{ContactRecord, ParseFormat};

/// Delimiters in preference order
pub const DELIMITERS: [u8; 3] = [b';', b',', b'\t'];

/// Header offsets tried for each delimiter: direct export, then export with
/// leading metadata rows
pub const SKIP_ROWS: [usize; 2] = [0, 3];

/// Errors that can occur while ingesting a contacts export
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("Could not parse the file. Please ensure it's a valid CSV/TSV format and try again.")]
    ParseFailure,

    #[error("Expected {expected} columns in the contacts export, found {found}")]
    ColumnMismatch { expected: usize, found: usize },
}

/// Raw table accepted by one delimiter/skip candidate
#[derive(Debug, Clone)]
pub struct IngestedTable {
    pub format: ParseFormat,
    pub width: usize,
    pub rows: Vec<Vec<String>>,
}

/// Contacts read from an export, with the format that produced them
#[derive(Debug, Clone)]
pub struct Ingestion {
    pub format: ParseFormat,
    pub contacts: Vec<ContactRecord>,
}

/// Lenient reader for contact exports of unknown delimiter and header offset
///
/// Each `(delimiter, skip)` candidate is tried in a fixed order and the first
/// one producing more than one column wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ingestor;

impl Ingestor {
    pub fn new() -> Self {
        Self
    }

    /// Candidate formats in the order they are attempted
    pub fn candidates() -> impl Iterator<Item = ParseFormat> {
        DELIMITERS.into_iter().flat_map(|delimiter| {
            SKIP_ROWS.into_iter().map(move |skip_rows| ParseFormat {
                delimiter: delimiter as char,
                skip_rows,
            })
        })
    }

    /// Parse `raw` into contacts, assigning canonical columns positionally
    pub fn ingest(&self, raw: &[u8]) -> Result<Ingestion, IngestError> {
        let table = self.parse_table(raw)?;
        let format = table.format;
        let contacts = table.into_contacts()?;

        tracing::debug!(
            "Ingested {} contacts (delimiter {:?}, skipped {} rows)",
            contacts.len(),
            format.delimiter,
            format.skip_rows
        );

        Ok(Ingestion { format, contacts })
    }

    /// Find the first candidate format that yields a multi-column table
    pub fn parse_table(&self, raw: &[u8]) -> Result<IngestedTable, IngestError> {
        let text = String::from_utf8_lossy(raw);

        Self::candidates()
            .find_map(|format| {
                let table = try_format(&text, format);
                if table.is_none() {
                    tracing::trace!(
                        "Rejected format: delimiter {:?}, skip {}",
                        format.delimiter,
                        format.skip_rows
                    );
                }
                table
            })
            .ok_or(IngestError::ParseFailure)
    }
}

impl IngestedTable {
    /// Map every row onto a `ContactRecord`
    ///
    /// The table must have exactly the seven canonical columns.
    pub fn into_contacts(self) -> Result<Vec<ContactRecord>, IngestError> {
        let expected = ContactRecord::COLUMNS.len();
        if self.width != expected {
            return Err(IngestError::ColumnMismatch {
                expected,
                found: self.width,
            });
        }

        Ok(self.rows.into_iter().map(assign_columns).collect())
    }
}

/// Positional mapping from an export row to a contact
///
/// Header text is ignored; the export's column order is assumed stable.
pub fn assign_columns(row: Vec<String>) -> ContactRecord {
    let mut fields = row.into_iter();
    let mut next = || fields.next().unwrap_or_default();

    ContactRecord {
        first_name: next(),
        last_name: next(),
        url: next(),
        email_address: next(),
        company: next(),
        position: next(),
        connected_on: next(),
    }
}

fn try_format(text: &str, format: ParseFormat) -> Option<IngestedTable> {
    let body = skip_lines(text, format.skip_rows);

    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(body.as_bytes());

    let width = reader.headers().ok()?.len();
    if width <= 1 {
        return None;
    }

    // Bad lines are dropped rather than failing the whole parse
    let rows = reader
        .records()
        .filter_map(Result::ok)
        .filter(|record| record.len() <= width)
        .map(|record| pad_record(&record, width))
        .collect();

    Some(IngestedTable { format, width, rows })
}

fn pad_record(record: &StringRecord, width: usize) -> Vec<String> {
    let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
    fields.resize(width, String::new());
    fields
}

fn skip_lines(text: &str, count: usize) -> &str {
    let mut rest = text;
    for _ in 0..count {
        match rest.find('\n') {
            Some(idx) => rest = &rest[idx + 1..],
            None => return "",
        }
    }
    rest
}
