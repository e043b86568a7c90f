/// Quickstart example - flatten one document and print its rows
use json_flatten::{FlattenConfig, JsonFlattener, OutputFormat, PairWriter};

fn main() -> anyhow::Result<()> {
    println!("=== JSON Flatten Quick Start ===\n");

    // Step 1: Your JSON data
    let my_data = r#"{"name":"Alice","age":25,"city":"Beijing","hobbies":["reading","swimming"]}"#;
    println!("Original JSON:\n{}\n", my_data);

    // Step 2: Create a flattener
    let flattener = JsonFlattener::new(FlattenConfig::default());

    // Step 3: Collect the rows
    let pairs = flattener.flatten_str(Some(my_data))?;
    println!("Extracted {} rows:\n", pairs.len());

    // Step 4: Print them
    let stdout = std::io::stdout();
    let mut writer = PairWriter::new(stdout.lock(), OutputFormat::Text);
    writer.write_pairs(pairs)?;
    writer.flush()?;

    Ok(())
}
