use std::fs::File;
use std::io::BufReader;

use clap::Parser;
use mindmatrix::{band_of, compute_score, read_bulk, Error, QUESTIONS};

/// Score questionnaire answers in bulk from a CSV of `id,a1,..,a10` rows.
#[derive(Parser)]
struct Args {
    path: String,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();
    let reader = BufReader::new(File::open(&args.path)?);
    for row in read_bulk(reader, QUESTIONS.len()) {
        match row {
            Ok((id, responses)) => {
                let score = compute_score(&responses);
                println!("id = {}, score = {}, band = {:?}", id, score, band_of(score));
            }
            Err(e) => {
                eprintln!("skipping row: {e}");
            }
        }
    }
    Ok(())
}
