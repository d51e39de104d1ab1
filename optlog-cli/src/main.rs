//! Command-line interface for optlog
//! Converts the optimization log written by one MOCOM calibration run into a
//! comma-separated table for downstream analysis (pandas, plotting, pareto
//! selection).
//!
//! Usage:
//!   optlog `<mocomrun>` `<configfile>` `<optimdir>` `<optimfile>`
//!
//! The run's working directory is `<optimdir>/runs/<mocomrun>`; the converted
//! table is written next to the input log as `optim_fixed.log`.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use optlog_config::Loader;
use optlog_parser::mocom::{convert_to_writer, ObjectiveFunctionCatalog};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let matches = Command::new("optlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a MOCOM optimization logfile into a comma-separated table")
        .arg(Arg::new("mocomrun").help("MOCOM run id").required(true).index(1))
        .arg(
            Arg::new("configfile")
                .help("Basin configuration file")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("optimdir")
                .help("Optimization log directory for the calibration")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::new("optimfile")
                .help("Optimization log filename")
                .required(true)
                .index(4),
        )
        .get_matches();

    let runid = matches.get_one::<String>("mocomrun").expect("required arg");
    let configfile = matches.get_one::<String>("configfile").expect("required arg");
    let optimdir = matches.get_one::<String>("optimdir").expect("required arg");
    let optimfile = matches.get_one::<String>("optimfile").expect("required arg");

    let workdir = PathBuf::from(optimdir).join("runs").join(runid);
    let opt_file = workdir.join(optimfile);
    let opt_out = workdir.join("optim_fixed.log");

    let config = Loader::new()
        .with_file(configfile)
        .build()
        .with_context(|| format!("loading basin configuration {}", configfile))?;
    let catalog = ObjectiveFunctionCatalog::from_descriptors(config.objective_descriptors());
    info!(links = catalog.len(), "objective-function catalog loaded");

    let raw = fs::read_to_string(&opt_file)
        .with_context(|| format!("reading optimization log {}", opt_file.display()))?;
    let lines: Vec<&str> = raw.lines().collect();

    let out = File::create(&opt_out)
        .with_context(|| format!("creating output table {}", opt_out.display()))?;
    let summary = convert_to_writer(&lines, &catalog, BufWriter::new(out))
        .with_context(|| format!("converting {}", opt_file.display()))?;

    info!(
        rows = summary.rows_written,
        excluded = summary.excluded_rows,
        out = %opt_out.display(),
        "conversion finished"
    );
    println!("\tTotal generations: {}", summary.total_generations);
    if summary.excluded_rows > 0 {
        println!("\tExcluded rows: {}", summary.excluded_rows);
    }

    Ok(())
}
