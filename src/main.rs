use clap::Parser;
use estoque_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {error:#}");
        process::exit(1);
    }
}
