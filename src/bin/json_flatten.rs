//! json-flatten: Print every leaf of a JSON document as a key/value row
//!
//! Usage:
//!   # Read from file, output to stdout
//!   json-flatten data.json
//!
//!   # Read from stdin
//!   echo '{"name": "Alice", "hobbies": ["reading"]}' | json-flatten
//!
//!   # Process NDJSON as tab-separated rows with a header
//!   json-flatten --ndjson events.jsonl --format tsv --header
//!
//!   # SIMD parser, JSON Lines output
//!   json-flatten --parser simd --format jsonl large.json

// Use MiMalloc allocator for better performance (recommended by simd-json)
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use json_flatten::{flatten_ndjson, FlattenConfig, JsonFlattener, JsonParser, OutputFormat, PairWriter};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};

#[derive(Parser, Debug)]
#[command(name = "json-flatten")]
#[command(about = "Flatten nested JSON into key/value rows", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Process newline-delimited JSON (one document per line)
    #[arg(long)]
    ndjson: bool,

    /// Output format: text, tsv or jsonl
    #[arg(long, short = 'f', default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the column names before the rows (tsv only)
    #[arg(long)]
    header: bool,

    /// Path prefix for the document root
    #[arg(long)]
    prefix: Option<String>,

    /// Maximum nesting depth (default: 100)
    #[arg(long)]
    max_depth: Option<usize>,

    /// JSON parser backend: serde or simd
    #[arg(long, default_value_t = JsonParser::Serde)]
    parser: JsonParser,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Build config
    let mut config = FlattenConfig::default();
    if let Some(depth) = args.max_depth {
        config.max_depth = depth;
    }
    if let Some(prefix) = args.prefix {
        config.root_prefix = prefix;
    }
    config.parser = args.parser;

    let reader: Box<dyn BufRead> = if let Some(file_path) = &args.input {
        let file = File::open(file_path).with_context(|| format!("Failed to open {}", file_path))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(BufReader::new(std::io::stdin()))
    };

    let stdout = std::io::stdout();
    let mut writer = PairWriter::new(stdout.lock(), args.format);
    if args.header {
        writer.write_header()?;
    }

    let count = if args.ndjson {
        flatten_ndjson(reader, &mut writer, config)?
    } else {
        process_document(reader, &mut writer, config)?
    };

    writer.flush()?;
    log::info!("wrote {} pairs", count);

    Ok(())
}

/// Flatten a single document read in full from `reader`
fn process_document<R: Read, W: Write>(
    mut reader: R,
    writer: &mut PairWriter<W>,
    config: FlattenConfig,
) -> Result<usize> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read input")?;

    // Whitespace-only input is an absent document
    let trimmed = content.trim();
    let input = if trimmed.is_empty() {
        log::warn!("no JSON document found in input");
        None
    } else {
        Some(trimmed)
    };

    let flattener = JsonFlattener::new(config);
    let count = flattener
        .process(input, writer)
        .context("Failed to flatten document")?;

    Ok(count)
}
