//! Example showing strict and best-effort bidirectional maps
//!
//! Maps row labels to row indexes and back, then shows what a rejected pair
//! list reports. Run with `RUST_LOG=debug` to see construction logs.

use biject::{biject, biject_onto, BidirectionalMap, InvalidBijectionError, Value};

fn main() -> Result<(), InvalidBijectionError<String, u32>> {
    env_logger::init();

    // Row labels <-> row indexes
    let labels = ["gene_A", "gene_B", "gene_C"];
    let rows = biject(
        labels
            .iter()
            .zip(0u32..)
            .map(|(label, row)| (label.to_string(), row)),
    )?;

    println!("Rows: {}", rows.len());
    for label in labels {
        if let Some(row) = rows.map(label) {
            println!("  {label} -> row {row}");
        }
    }
    if let Some(label) = rows.invert(&1) {
        println!("Row 1 label: {label}");
    }
    println!("gene_D known: {}", rows.is_in_domain("gene_D"));

    // Every column must be labelled
    let columns = biject_onto(
        vec![
            (String::from("sample_1"), 0u32),
            (String::from("sample_2"), 1),
        ],
        0..3,
    );
    match columns {
        Ok(_) => println!("Columns fully labelled"),
        Err(err) => {
            println!("Rejected column labels: {err}");

            // Fall back to whatever the labels do cover
            let partial = err.into_best_effort();
            println!("  Best-effort map covers {} columns", partial.len());
        }
    }

    // Empty markers are ordinary values
    let markers = BidirectionalMap::new(vec![
        (Value::from(1), Value::Undefined),
        (Value::Undefined, Value::from(2)),
        (Value::from(4), Value::Null),
    ]);
    match markers.map(&Value::from(4)) {
        Some(value) => println!("4 maps to {value}"),
        None => println!("4 is not mapped"),
    }
    println!(
        "undefined in domain: {}, null in domain: {}",
        markers.is_in_domain(&Value::Undefined),
        markers.is_in_domain(&Value::Null)
    );

    Ok(())
}
