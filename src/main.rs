use asciify::cli::Args;
use asciify::pipeline;
use clap::Parser;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let config = match args.to_pipeline_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match pipeline::run(&config) {
        Ok(report) => {
            log::info!(
                "Done: {} rows of {} glyphs, {} files written",
                report.grid_size.1,
                report.grid_size.0,
                report.written.len()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
