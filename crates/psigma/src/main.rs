use std::io::stdin;

use anyhow::{Context, bail};
use clap::Parser;
use psigma::{Calculator, Config, Report, driver::Session, report};
use rayon::prelude::*;
use serde::Serialize;

/// compute the pyramidalization parameter P_sigma of a trivalent nitrogen from
/// XYZ geometries. With no files, prompt for them interactively
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// XYZ files to process
    files: Vec<String>,

    /// TOML configuration file with bonding tolerances and radius overrides
    #[arg(short, long)]
    config: Option<String>,

    /// Symbol of the central atom, overriding the configuration. Defaults to
    /// N.
    #[arg(short, long)]
    element: Option<String>,

    /// Print the full results as JSON instead of one line per file. Defaults
    /// to false.
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print the bonds and angles found for each file in addition to
    /// P_sigma. Defaults to false.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Set the maximum number of threads to use. Defaults to 0, which means to
    /// use as many threads as there are CPUS.
    #[arg(short, long, default_value_t = 0)]
    threads: usize,
}

#[derive(Serialize)]
struct Entry<'a> {
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load {path}"))?,
        None => Config::default(),
    };
    if let Some(element) = args.element {
        config.element = element;
    }
    let calc = Calculator::new(&config);

    if args.files.is_empty() {
        Session::new(&calc, stdin().lock(), std::io::stdout()).run()?;
        return Ok(());
    }

    let _ = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global();

    let results: Vec<_> =
        args.files.par_iter().map(|f| calc.process(f)).collect();

    if args.json {
        let entries: Vec<_> = args
            .files
            .iter()
            .zip(&results)
            .map(|(file, res)| Entry {
                file,
                report: res.as_ref().ok(),
                error: res.as_ref().err().map(ToString::to_string),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (file, res) in args.files.iter().zip(&results) {
            match res {
                Ok(r) if args.verbose => {
                    println!("{file}:\n{}\n", r.summary())
                }
                Ok(r) => println!(
                    "{file}: P_Sigma = {}",
                    report::sig_figs(r.p_sigma, report::DIGITS)
                ),
                Err(e) => println!("{file}: error: {e}"),
            }
        }
    }

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        bail!("{failed} of {} files failed", results.len());
    }
    Ok(())
}
