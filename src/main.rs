use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use csv_query::ingestion::CsvOptions;
use csv_query::observability::LogObserver;
use csv_query::pipeline::{run, QueryOptions};

#[derive(Parser, Debug)]
#[command(
    name = "csv-query",
    version,
    about = "CSV file reader: filter rows, aggregate a column, print a table",
    after_help = "Examples:\n  \
      csv-query -f phones.csv                              # Print the whole file\n  \
      csv-query -f phones.csv -w brand=apple               # Rows where brand equals apple\n  \
      csv-query -f phones.csv -w \"price>500\" -a price=avg  # Mean price of rows above 500\n\n\
      Set RUST_LOG=info to log each stage to stderr."
)]
struct Cli {
    /// Path to the CSV file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: PathBuf,

    /// Filter rows: "column<op>value" with <, > or =
    #[arg(short = 'w', long = "where", value_name = "EXPR")]
    where_expr: Option<String>,

    /// Aggregate a column: "column=min", "column=avg" or "column=max"
    #[arg(short = 'a', long = "aggregate", value_name = "EXPR")]
    aggregate: Option<String>,

    /// Field delimiter (single ASCII character)
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", default_value_t = ',', value_parser = parse_delimiter)]
    delimiter: char,
}

fn parse_delimiter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!("expected a single ASCII character, got '{s}'")),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let opts = QueryOptions {
        where_expr: cli.where_expr,
        aggregate_expr: cli.aggregate,
        csv: CsvOptions {
            delimiter: cli.delimiter as u8,
        },
        observer: Some(Arc::new(LogObserver)),
        ..QueryOptions::new(cli.file)
    };

    match run(&opts) {
        Ok(table) => {
            println!("{table}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
