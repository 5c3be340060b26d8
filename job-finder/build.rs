use std::env;
use std::fs;
use std::path::Path;

const FALLBACK_INDUSTRIES: &str = "\
label,businesses,color
\"Rental, hiring & real estate\",951,#81B29A
Construction,636,#F2CC8F
\"Agriculture, forestry & fishing\",606,#E07A5F
Financial & insurance services,522,#3D405B
Retail trade,414,#F4F1DE
\"Professional, scientific & technical\",384,#B0A8B9
Health care & social assistance,258,#8E8D8A
";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("industries.csv");

    // Copy industries.csv to OUT_DIR for include_str
    let src = Path::new("../fixtures/industries.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, FALLBACK_INDUSTRIES).unwrap();
    }

    // Catch malformed rows at build time; the app still falls back to its
    // built-in dataset at runtime if parsing fails.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&dest)
        .expect("Failed to open industries.csv");
    for (i, record) in rdr.records().enumerate() {
        match record {
            Ok(record) if record.len() == 3 && record[1].parse::<u32>().is_ok() => {}
            Ok(record) => println!(
                "cargo:warning=industries.csv row {} is malformed: {:?}",
                i + 1,
                record
            ),
            Err(e) => println!("cargo:warning=industries.csv row {}: {}", i + 1, e),
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/industries.csv");
}
