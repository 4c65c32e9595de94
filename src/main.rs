mod classify;
mod extract;
mod fetch;
mod pipeline;
mod record;
mod sources;
mod store;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pb_scraper", about = "Powerball draw scraper with multi-source fallback")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Try every source in order and write results.json
    Run {
        /// Directory to write results.json (and debug.txt on fallback)
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Print the last stored draw record
    Show {
        /// Directory holding results.json
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// List candidate sources in trial order
    Sources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { out } => {
            let fetcher = fetch::HttpFetcher::new()?;
            let registry = sources::registry();
            let outcome = pipeline::run(&fetcher, &registry).await?;

            store::write_record(&out, &outcome.record)?;
            if outcome.is_fallback() {
                store::write_debug(&out, &outcome.attempts)?;
                println!(
                    "No source yielded a draw; wrote fallback {} and {}.",
                    store::RESULTS_FILE,
                    store::DEBUG_FILE
                );
            } else {
                println!(
                    "Draw {} from {} -> {}",
                    outcome.record.numbers.join(" "),
                    outcome.record.source,
                    store::RESULTS_FILE
                );
            }
            Ok(())
        }
        Commands::Show { out } => {
            let record = store::read_record(&out)?;
            println!("Draw date:  {}", record.draw_date);
            println!("Numbers:    {}", record.numbers[..5].join(" "));
            println!("Powerball:  {}", record.numbers[5]);
            println!("Power Play: {}", record.power_play);
            println!("Source:     {}", record.source);
            println!("Updated:    {}", record.updated);
            Ok(())
        }
        Commands::Sources => {
            for (i, s) in sources::registry().iter().enumerate() {
                println!("{}. {:<22} {:?}  {}", i + 1, s.id, s.hint, s.url);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}
