// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the code search.

use std::collections::BTreeMap;
use std::process;

use clap::Parser;
use serde::Serialize;

use codeword_search::search::{brute_force, find_optimal_code, find_optimal_code_parallel};
use codeword_search::{
    Codeword, CodeSearchError, Metric, SearchConfig, SearchOutcome, SearchParams,
    StartSymbolThresholds,
};

/// Find a largest set of q-ary codewords of length n at pairwise distance at least d.
#[derive(Parser, Debug)]
#[command(name = "codesearch", version, about)]
struct Args {
    /// Codeword length n
    #[arg(short = 'n', long)]
    length: i64,

    /// Alphabet size q (at most 36)
    #[arg(short = 'q', long)]
    alphabet: i64,

    /// Minimum pairwise distance d
    #[arg(short = 'd', long)]
    distance: i64,

    /// Stop at the first code of exactly this size
    #[arg(short = 'm', long)]
    target: Option<i64>,

    /// Distance metric: edit, hamming or combined
    #[arg(long, default_value_t = Metric::Edit)]
    metric: Metric,

    /// Leading-symbol thresholds, e.g. "3,5,7"
    #[arg(long, conflicts_with = "no_pruning")]
    thresholds: Option<StartSymbolThresholds>,

    /// Disable leading-symbol pruning
    #[arg(long)]
    no_pruning: bool,

    /// Explore top-level branches in parallel
    #[arg(long, conflicts_with = "brute_force")]
    parallel: bool,

    /// Enumerate every subset instead of backtracking (small universes only)
    #[arg(long)]
    brute_force: bool,

    /// Keep searching after the target size is reached
    #[arg(long)]
    no_halt: bool,

    /// Report progress on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn thresholds(&self) -> StartSymbolThresholds {
        if self.no_pruning {
            return StartSymbolThresholds::none();
        }
        match (&self.thresholds, self.target) {
            (Some(thresholds), _) => thresholds.clone(),
            (None, Some(_)) => StartSymbolThresholds::reference(),
            (None, None) => StartSymbolThresholds::none(),
        }
    }

    fn config(&self) -> SearchConfig {
        SearchConfig {
            thresholds: self.thresholds(),
            halt_on_target: !self.no_halt,
            verbose: self.verbose,
            ..SearchConfig::with_metric(self.metric)
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    length: usize,
    alphabet: usize,
    min_distance: usize,
    target: Option<usize>,
    metric: Metric,
    size: usize,
    code: &'a [Codeword],
    elapsed_seconds: f64,
    exhausted: bool,
    statistics: BTreeMap<&'static str, u64>,
}

fn run(args: &Args) -> Result<(), CodeSearchError> {
    let params = SearchParams::new(args.length, args.alphabet, args.distance, args.target)?;
    let config = args.config();

    let outcome: SearchOutcome = if args.brute_force {
        brute_force(&params, config.metric)?
    } else if args.parallel {
        find_optimal_code_parallel(&params, &config)?
    } else {
        find_optimal_code(&params, &config)?
    };

    if args.json {
        let report = Report {
            length: params.length,
            alphabet: params.alphabet,
            min_distance: params.min_distance,
            target: params.target,
            metric: config.metric,
            size: outcome.len(),
            code: &outcome.code,
            elapsed_seconds: outcome.elapsed.as_secs_f64(),
            exhausted: outcome.exhausted,
            statistics: outcome.statistics.entries().collect(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("Size: {}", outcome.len());
        let members: Vec<String> = outcome.code.iter().map(|c| c.to_string()).collect();
        println!("Code: [{}]", members.join(", "));
        println!("Elapsed: {:.3?}", outcome.elapsed);
        if args.verbose {
            for (name, value) in outcome.statistics.entries() {
                eprintln!("[Search] {}: {}", name, value);
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
