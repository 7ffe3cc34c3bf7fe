use anyhow::Context;
use anyhow::Result;
use clap::Parser;

use faultline_cli::FaultlineOptions;
use faultline_cli::Layer;
use faultline_cli::run_main;

#[derive(Parser, Debug)]
#[command(
    name = "faultline",
    about = "faultline: build a failure chain and see what each inspection finds",
    version
)]
pub struct Cli {
    /// Chain layers, innermost first (e.g. 'plain:no rows', 'annotate:ctx', 'boundary:404')
    #[arg(
        short = 'l',
        long = "layer",
        value_name = "LAYER",
        num_args = 1..,
        action = clap::ArgAction::Append,
        required = true
    )]
    layers: Vec<String>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Leave the backtrace out of the report
    #[arg(long = "no-backtrace", default_value_t = false)]
    no_backtrace: bool,
}

pub fn run(args: Cli) -> Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let layers = args
        .layers
        .iter()
        .map(|raw| {
            raw.parse::<Layer>()
                .with_context(|| format!("parsing layer '{}'", raw))
        })
        .collect::<Result<Vec<_>>>()?;

    let opts = FaultlineOptions {
        layers,
        json: args.json,
        backtrace: !args.no_backtrace,
    };

    match run_main(&opts)? {
        Some(output) => println!("{output}"),
        None => {
            tracing::info!("layers describe no failure");
            println!("no failure");
        }
    }
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
