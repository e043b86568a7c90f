use crate::flatten::error::FlattenResult;
use crate::flatten::sink::PairSink;
use crate::flatten::types::{FlatPair, OUTPUT_COLUMNS};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Line format for written pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `key: value`, with the same escaping as `Tsv` so one row is one line
    #[default]
    Text,
    /// `key<TAB>value`, with tabs, newlines and backslashes escaped
    Tsv,
    /// `{"key":...,"value":...}` per line
    Jsonl,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "tsv" => Ok(OutputFormat::Tsv),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            other => Err(format!("unknown format '{}' (expected text, tsv or jsonl)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Writes flattened pairs to any output, one per line
pub struct PairWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    written: usize,
}

impl<W: Write> PairWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        PairWriter {
            writer,
            format,
            written: 0,
        }
    }

    /// Write the column names as a header line (TSV only)
    pub fn write_header(&mut self) -> FlattenResult<()> {
        if self.format == OutputFormat::Tsv {
            writeln!(self.writer, "{}", OUTPUT_COLUMNS.join("\t"))?;
        }
        Ok(())
    }

    /// Write one document's rows with a single write, so a failing output
    /// never receives part of the batch.
    pub fn write_pairs(&mut self, pairs: Vec<FlatPair>) -> FlattenResult<()> {
        let mut buffer = Vec::new();
        for pair in &pairs {
            self.render(pair, &mut buffer)?;
        }
        self.writer.write_all(&buffer)?;
        self.written += pairs.len();
        Ok(())
    }

    pub fn write_pair(&mut self, pair: &FlatPair) -> FlattenResult<()> {
        let mut buffer = Vec::new();
        self.render(pair, &mut buffer)?;
        self.writer.write_all(&buffer)?;
        self.written += 1;
        Ok(())
    }

    fn render(&self, pair: &FlatPair, out: &mut Vec<u8>) -> FlattenResult<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{}: {}", escape_field(&pair.key), escape_field(&pair.value))?;
            }
            OutputFormat::Tsv => {
                writeln!(out, "{}\t{}", escape_field(&pair.key), escape_field(&pair.value))?;
            }
            OutputFormat::Jsonl => {
                serde_json::to_writer(&mut *out, pair).map_err(std::io::Error::from)?;
                out.push(b'\n');
            }
        }
        Ok(())
    }

    /// Number of pairs written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> FlattenResult<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PairSink for PairWriter<W> {
    fn emit(&mut self, pair: FlatPair) -> FlattenResult<()> {
        self.write_pair(&pair)
    }

    fn emit_batch(&mut self, pairs: Vec<FlatPair>) -> FlattenResult<()> {
        self.write_pairs(pairs)
    }
}

fn escape_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
