//! `ila` — categorical rule induction (ILA) for tabular records.
//!
//! ```bash
//! ila classify training.csv unlabelled.csv output.csv 1,3
//! ila slice data.csv slice.csv remainder.csv 10 50
//! ila strip labelled.csv unlabelled.csv
//! ila compare baseline.csv results.csv mismatches.csv
//! ```

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use ila::config::Config;
use ila::{commands, error::IlaError};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::load().unwrap_or_else(|_| Config::default());
    init_tracing(&config);

    let cli = Cli::parse();
    if let Err(err) = run(cli.command, &config) {
        // Every error this binary can produce is an `IlaError`; wrapping it
        // in `anyhow` here gets us `{:#}` source-chain formatting for free
        // while the taxonomy tag (for scripting) is recovered by downcast.
        let tag = err
            .downcast_ref::<IlaError>()
            .map_or("output", IlaError::taxonomy_tag);
        eprintln!("error[{tag}]: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Classify { training_file, to_classify_file, output_file, ignore_fields } => {
            let ignore_fields = ignore_fields.unwrap_or_default();
            let rendered = commands::classify(
                &training_file,
                &to_classify_file,
                &output_file,
                &ignore_fields,
                &config.performance,
            )?;
            eprintln!("learned rule set:\n{rendered}");
            Ok(())
        }
        Command::Slice { input_file, slice_out, remainder_out, first_line, line_count } => {
            commands::slice(&input_file, &slice_out, &remainder_out, first_line, line_count)?;
            Ok(())
        }
        Command::Strip { input_file, output_file } => {
            commands::strip(&input_file, &output_file)?;
            Ok(())
        }
        Command::Compare { baseline_file, results_file, mismatches_file } => {
            let count = commands::compare(&baseline_file, &results_file, &mismatches_file)?;
            eprintln!("{count} mismatch(es) written");
            Ok(())
        }
    }
}
