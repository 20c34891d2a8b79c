use anyhow::Result;
use clap::Parser;
use latency_cdf::{
    cli::{Cli, TableFormat},
    csv_output::CsvOutput,
    json_output::JsonOutput,
    plot::CdfPlot,
    stats::CdfSummary,
    Cdf,
};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; --debug forces TRACE, otherwise RUST_LOG or warn
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print the CDF table to stdout in the requested format
fn print_table(cdf: &Cdf, format: TableFormat) -> Result<()> {
    match format {
        TableFormat::Csv => print!("{}", CsvOutput::new(cdf).to_csv()),
        TableFormat::Json => println!("{}", JsonOutput::new(cdf).to_json()?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let cdf = Cdf::load(&args.input)?;

    if args.summary {
        CdfSummary::from_cdf(&cdf).print();
    }

    if let Some(format) = args.table {
        print_table(&cdf, format)?;
    }

    // Viewer target blocks until closed; keep it last
    if let Some(target) = args.render_target() {
        let plot = CdfPlot::default().with_size(args.width, args.height);
        target.render(&plot, &cdf)?;
    }

    Ok(())
}
