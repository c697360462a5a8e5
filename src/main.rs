// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: per-base reports of all self-power numbers.
//!
//! For each selected base, iterates digit counts 1 through `base + 1`,
//! extending the pruning levels and searching each length, then prints the
//! merged all-lengths report. Numbers are rendered in the base they were
//! found in.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use munchausen_search::constants::{max_digits, MAX_BASE, MIN_BASE, PARALLEL_THRESHOLD};
use munchausen_search::{merge, Int96, SearchContext};

#[derive(Parser, Debug)]
#[command(author, version, about = "Search for Münchausen (self-power) numbers")]
struct Cli {
    /// Base to search; searches every base 2..=16 when omitted.
    base: Option<usize>,

    /// Digit count at which the search fans out across the thread pool.
    #[arg(long, default_value_t = PARALLEL_THRESHOLD)]
    threshold: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.base {
        Some(base) => {
            anyhow::ensure!(
                (MIN_BASE..=MAX_BASE).contains(&base),
                "base must be in {}..={}",
                MIN_BASE,
                MAX_BASE
            );
            report(base, cli.threshold);
        }
        None => {
            for base in MIN_BASE..=MAX_BASE {
                report(base, cli.threshold);
            }
        }
    }
    Ok(())
}

/// Search every digit count for one base and print the results.
fn report(base: usize, threshold: usize) {
    println!("Münchausen numbers for base {}", base);
    let mut ctx = SearchContext::new(base).with_parallel_threshold(threshold);
    let mut all = Vec::new();
    for n in 1..=max_digits(base) {
        let build_start = Instant::now();
        ctx.extend_level();
        let build_ms = build_start.elapsed().as_millis();
        let search_start = Instant::now();
        let answers = ctx.search(n);
        let search_ms = search_start.elapsed().as_millis();
        let par = if n >= ctx.parallel_threshold() { " (par)" } else { "" };
        println!(
            "  = answers with {} digits: {:?} in {}+{} ms{}, {}",
            n,
            render(&answers, base),
            build_ms,
            search_ms,
            par,
            ctx.level(n).reachable()
        );
        all = merge(all, answers);
    }
    println!("  All numbers in base {}: {:?}", base, render(&all, base));
    println!();
}

fn render(answers: &[Int96], base: usize) -> Vec<String> {
    answers
        .iter()
        .map(|a| a.to_string_radix(base as u32))
        .collect()
}
