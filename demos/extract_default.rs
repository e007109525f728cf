use std::env;
use tbank_statement_rs::ExtractorBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let file_path = if args.len() > 1 {
        args[1].as_str()
    } else {
        println!("Using default statement file input.pdf\n");
        "input.pdf"
    };

    let transactions = ExtractorBuilder::new().filepath(file_path).extract()?;

    println!("Found {} transactions\n", transactions.len());

    for (i, tx) in transactions.iter().enumerate() {
        println!("Transaction {}:", i + 1);
        println!("  Operation: {}", tx.operation_at);
        println!("  Settled: {}", tx.settlement_at);
        println!("  Amount: {}", tx.operation_amount);
        println!("  Card amount: {}", tx.card_amount);
        println!("  Description: {}", tx.description);
        println!("  Card: {}", tx.card_number);
        println!();
    }

    Ok(())
}
