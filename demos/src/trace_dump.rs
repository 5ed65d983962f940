//! Solve catalog levels with both algorithms and dump the step traces.
//!
//! Usage: `trace-dump [level-id]` — without an argument, every catalog
//! level is solved and summarized; with one, the full trace is printed.

use mazeway_core::catalog;
use mazeway_search::{AlgorithmResult, Playback, SearchStats, solve_astar, solve_backtracking};

fn main() {
    let arg = std::env::args().nth(1);

    match arg.as_deref() {
        Some(id) => match catalog::by_id(id) {
            Some(spec) => dump_level(spec),
            None => {
                eprintln!("unknown level {id:?}; available:");
                for spec in catalog::all() {
                    eprintln!("  {} - {} ({})", spec.id, spec.name, spec.difficulty);
                }
                std::process::exit(1);
            }
        },
        None => {
            for spec in catalog::all() {
                let level = spec.level();
                println!("{} - {} ({})", spec.id, spec.name, spec.difficulty);
                summarize("A*          ", solve_astar(&level));
                summarize("backtracking", solve_backtracking(&level));
                println!();
            }
        }
    }
}

fn summarize(name: &str, result: AlgorithmResult) {
    let stats = SearchStats::of(&result);
    println!(
        "  {name}  success={} cost={} path={} explored={} steps={}",
        result.success, stats.total_cost, stats.path_len, stats.explored, stats.steps
    );
}

fn dump_level(spec: &catalog::LevelSpec) {
    let level = spec.level();
    println!("{} - {}: {}", spec.id, spec.name, spec.description);
    println!("{}\n", spec.template.trim());

    for (name, result) in [
        ("A*", solve_astar(&level)),
        ("backtracking", solve_backtracking(&level)),
    ] {
        println!("--- {name} ---");
        let mut playback = Playback::new(result);
        let mut i = 0;
        while let Some(step) = playback.advance() {
            i += 1;
            println!("[{i:>4}] {}", step.message);
        }
        let result = playback.result();
        println!(
            "state: {:?}, cost: {}, path length: {}\n",
            playback.state(),
            result.total_cost,
            result.path.len()
        );
    }
}
