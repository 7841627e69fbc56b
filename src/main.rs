use clap::Parser;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::process::ExitCode;
use wsl_route_config::cli::Args;
use wsl_route_config::AppError;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging();
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let args = Args::parse();
    match wsl_route_config::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Cancelled) => {
            println!("\nOperation cancelled by user.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize log4rs from `log4rs.yml`, or fall back to stderr at info level
/// when the file is not present next to the binary.
fn init_logging() {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return;
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Info))
        .expect("Error building default log config");
    log4rs::init_config(config).expect("Error initializing log4rs");
}
