use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use wiki_random::DEFAULT_LANGUAGE;

mod display;

/// Print the summary of a random Wikipedia page.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Language edition of Wikipedia
    #[arg(short, long, value_name = "LANG", default_value = DEFAULT_LANGUAGE)]
    language: String,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    match wiki_random::random_page(&args.language) {
        Ok(page) => {
            print!("{}", display::render(&page));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
