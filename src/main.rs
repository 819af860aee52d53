use atavic_pagegen::{run, CommandArgs};
use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = CommandArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("AP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Generating HTML pages from template...");

    match run(args) {
        Ok(summary) => {
            println!(
                "\nSuccessfully generated {} pages in {}",
                summary.count.to_string().green(),
                summary.output_dir.display()
            );
        }
        Err(err) => {
            eprintln!("{} [Error: {}]", "Could not generate pages".red(), err);
            process::exit(1);
        }
    }
}
