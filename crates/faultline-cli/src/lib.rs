//! faultline command-line interface.
//!
pub mod layer;
pub mod report;

pub use layer::{Layer, build_chain};
pub use report::Report;

/// Options for running faultline.
pub struct FaultlineOptions {
    pub layers: Vec<Layer>,
    pub json: bool,
    pub backtrace: bool,
}

/// Main entry point. Returns `None` when the layers describe no failure.
pub fn run_main(opts: &FaultlineOptions) -> anyhow::Result<Option<String>> {
    let Some(chain) = build_chain(&opts.layers) else {
        return Ok(None);
    };

    let report = Report::inspect(&*chain, opts.backtrace);
    let output = if opts.json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.to_string()
    };
    Ok(Some(output))
}
