use clap::Parser;
use console::style;
use std::process;

use projdoc::cli::{run, Args};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", style("error:").red().bold(), e);
        process::exit(1);
    }
}
