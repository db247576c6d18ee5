//! Fortytwo CLI — run programs and drive the stack-diff test harness.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/parse error
//! - 2: Test case failure
//! - 3: Runtime error
//!
//! A running program otherwise ends only through its own `exit`
//! intrinsic, which sets the process status itself.

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "test" => commands::test(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: f42 <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <input.f42> [--start N] [--push N]...  Run a program until it exits");
    eprintln!("  test <program.f42> <cases.f42t>            Run stack-diff test cases");
}
