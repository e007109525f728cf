use std::env;
use tbank_statement_rs::diagnostics::MemorySink;
use tbank_statement_rs::ExtractorBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        args[1].as_str()
    } else {
        println!("Using default statement file input.pdf\n");
        "input.pdf"
    };

    let sink = MemorySink::new();

    let transactions = ExtractorBuilder::new()
        .filepath(file_path)
        .diagnostics(Box::new(sink.clone()))
        .extract()?;

    println!("Found {} transactions", transactions.len());

    let skipped = sink.unparsed_lines();
    if skipped.is_empty() {
        println!("Every merged line matched the record grammar");
    } else {
        println!("Skipped {} lines:", skipped.len());
        for line in skipped {
            println!("  {line}");
        }
    }

    Ok(())
}
