//! Build a table from command-line weights, print its buckets and compare the
//! exact probabilities with an empirical histogram.
//!
//! cargo run --example histogram -- 0.5 0.3333 0.0833 0.0833 --draws 50000

use clap::{Arg, ArgAction, Command};
use rand::SeedableRng;
use rand_xoshiro::Xoroshiro128Plus;

use walker_alias::{AliasBuilder, Worklist};

const DEFAULT_WEIGHTS: [f64; 4] = [1.0 / 2.0, 1.0 / 3.0, 1.0 / 12.0, 1.0 / 12.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = Command::new("histogram")
        .arg(
            Arg::new("weights")
                .action(ArgAction::Append)
                .num_args(1..)
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true)
                .help("non-negative weights, one per outcome"),
        )
        .arg(
            Arg::new("draws")
                .long("draws")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .default_value("50000"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(u64))
                .default_value("0"),
        )
        .arg(
            Arg::new("queue")
                .long("queue")
                .action(ArgAction::SetTrue)
                .help("pair buckets first-in-first-out instead of last-in-first-out"),
        )
        .get_matches();

    let weights: Vec<f64> = match matches.get_many::<f64>("weights") {
        Some(values) => values.copied().collect(),
        None => DEFAULT_WEIGHTS.to_vec(),
    };
    let draws = matches.get_one::<usize>("draws").copied().unwrap_or_default();
    let seed = matches.get_one::<u64>("seed").copied().unwrap_or_default();
    let worklist = if matches.get_flag("queue") {
        Worklist::Queue
    } else {
        Worklist::Stack
    };

    let table = AliasBuilder::new().worklist(worklist).build(&weights)?;
    log::info!("built table over {} outcomes with {worklist:?} worklists", table.len());

    println!("buckets:");
    for (i, bucket) in table.buckets().iter().enumerate() {
        match bucket.alias() {
            Some(alias) => println!(
                "  [{i}] own {:.3}  alias [{alias}] {:.3}",
                bucket.height(),
                1.0 - bucket.height()
            ),
            None => println!("  [{i}] own {:.3}", bucket.height()),
        }
    }

    let mut rng = Xoroshiro128Plus::seed_from_u64(seed);
    let counts = table.histogram(&mut rng, draws);

    println!("\n{:>5} {:>9} {:>9}", "index", "expected", "observed");
    for (i, &count) in counts.iter().enumerate() {
        let observed = count as f64 / draws.max(1) as f64;
        println!("{i:>5} {:>9.3} {observed:>9.3}", table.probability(i)?);
    }

    Ok(())
}
