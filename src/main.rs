use clap::{ArgAction, Parser};
use env_logger::Builder;
use log::LevelFilter;

mod bench_log;
mod list;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "sortbench-csv")]
#[command(about = "Tabulate sorting benchmark timings as CSV", long_about = None)]
struct Cli {
    /// Benchmark log written by the sorting driver.
    #[arg(long, default_value = "prolog_output.txt")]
    input: String,

    #[arg(short = 'o', long, default_value = "sorting_results.csv")]
    out: String,

    /// Also dump the parsed cases as JSON.
    #[arg(long)]
    json: Option<String>,

    /// Log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 1) Parse the whole log; any malformed case aborts before output.
    let cases = bench_log::parse_log_file(&cli.input)?;

    // 2) Pivot + write all outputs, or none.
    match render::save_report(&cases, &cli.out, cli.json.as_deref())? {
        render::SaveOutcome::Empty => {
            println!("No results to save.");
            return Ok(());
        }
        render::SaveOutcome::Written { rows } => {
            log::debug!("{} row(s) written", rows);
        }
    }

    println!("Results have been saved to {}", cli.out);
    Ok(())
}
