//! Numera demonstration CLI.

use numerac::commands::{run_demo, run_phases};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "demo" => print_lines(&run_demo()),
        "phases" => print_lines(&run_phases()),
        other => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn print_usage() {
    eprintln!("Usage: numera <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  demo      Mixed int/double arithmetic with change notifications");
    eprintln!("  phases    Division by zero with before/after listener phases");
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
