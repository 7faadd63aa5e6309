//! Demo application driving a shared incrementor from many threads.
//!
//! Run with:
//! ```bash
//! cargo run --example demo --features demo -- --help
//! ```

use clap::{Parser, ValueEnum};
use incrementor::counters::bounded::Bounded;
use incrementor::counters::locked::Locked;
use incrementor::counters::{Handle, Incrementor, MAX_INT};
use incrementor::error::IncrementorError;
use incrementor::observers::json::JsonObserver;
use incrementor::observers::ObserverError;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Output format for the final counter state.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// `name:number` line followed by a summary
    Text,
    /// JSON snapshot
    Json,
}

/// Counter implementation to exercise.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ImplChoice {
    /// AtomicCell compare-exchange
    #[default]
    Bounded,
    /// Mutex-guarded pair
    Locked,
}

/// Demo application for incrementor - bounded wrapping counters.
///
/// Spawns `threads` workers that each increment one shared counter
/// `increments` times, then prints the final state.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Counter implementation
    #[arg(long, value_enum, default_value = "bounded")]
    implementation: ImplChoice,

    /// Number of worker threads
    #[arg(short, long, default_value = "50")]
    threads: usize,

    /// Increments performed by each thread
    #[arg(short, long, default_value = "100")]
    increments: usize,

    /// Inclusive maximum before wrapping to zero
    #[arg(short, long, default_value_t = MAX_INT, allow_negative_numbers = true)]
    maximum: i64,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,
}

/// Builds the shared counter described by the arguments.
fn create_counter(args: &Args) -> Result<Handle, IncrementorError> {
    let handle: Handle = match args.implementation {
        ImplChoice::Bounded => Arc::new(Bounded::new().with_name("demo_sequence")),
        ImplChoice::Locked => Arc::new(Locked::new().with_name("demo_sequence")),
    };
    handle.set_maximum(args.maximum)?;
    Ok(handle)
}

/// Runs the workers against `counter` and waits for all of them.
fn simulate(counter: &Handle, num_threads: usize, increments: usize) {
    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let counter = Arc::clone(counter);
            thread::spawn(move || {
                for _ in 0..increments {
                    counter.increment();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

/// Renders the final counter state in the requested format.
fn render_output(
    args: &Args,
    counter: &Handle,
    elapsed_ms: f64,
) -> Result<String, ObserverError> {
    match args.format {
        OutputFormat::Text => {
            let total = (args.threads as u128) * (args.increments as u128);
            let expected = total % (counter.maximum() as u128 + 1);
            Ok(format!(
                "{}\nmaximum: {}\nincrements: {}\nexpected: {}\nelapsed: {:.3} ms",
                counter.as_ref() as &dyn Incrementor,
                counter.maximum(),
                total,
                expected,
                elapsed_ms
            ))
        }
        OutputFormat::Json => {
            let counters: Vec<&dyn Incrementor> = vec![counter.as_ref()];
            JsonObserver::new()
                .pretty(args.pretty)
                .to_json(counters.into_iter())
        }
    }
}

fn main() {
    let args = Args::parse();

    let counter = match create_counter(&args) {
        Ok(counter) => counter,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    eprintln!(
        "Simulating {} threads x {} increments...",
        args.threads, args.increments
    );
    let start = Instant::now();
    simulate(&counter, args.threads, args.increments);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    eprintln!("Simulation complete.\n");

    match render_output(&args, &counter, elapsed_ms) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
