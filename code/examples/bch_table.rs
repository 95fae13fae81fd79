use clap::Parser;
use ctk_code::{BchFamily, ConstructionConfig};
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Order of the base field.
    #[arg(short, long, default_value_t = 2)]
    q: u64,

    /// Code length, coprime to q.
    #[arg(short, long, default_value_t = 31)]
    n: usize,

    /// First exponent of the consecutive zeros.
    #[arg(short, long, default_value_t = 1)]
    offset: usize,

    /// Also try the Hartmann-Tzeng refinement of the BCH bound.
    #[arg(long)]
    hartmann_tzeng: bool,
}

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let args = Args::parse();
    let mut config = ConstructionConfig::default();
    config.bound.hartmann_tzeng = args.hartmann_tzeng;

    let family = match BchFamily::with_config(args.q, args.n, args.offset, 2..=args.n, config) {
        Ok(family) => family,
        Err(err) => {
            eprintln!("cannot build BCH codes over GF({}) of length {}: {err}", args.q, args.n);
            std::process::exit(1);
        }
    };

    println!("{:>4} {:>6} {:>6} {:>6}  generator", "k", "delta", "lower", "upper");
    for code in family.iter() {
        println!(
            "{:>4} {:>6} {:>6} {:>6}  {}",
            code.dimension(),
            code.design_distance(),
            code.lower_bound(),
            code.upper_bound(),
            code.base_generator_polynomial()
        );
    }
}
