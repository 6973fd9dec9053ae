use log::{error, LevelFilter};
use polars_transform_bench::{run_benchmark, BenchOptions};

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    match run_benchmark(&BenchOptions::default()) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            error!("benchmark failed: {e}");
            std::process::exit(1);
        }
    }
}
