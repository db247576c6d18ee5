//! CLI command implementations.

use std::fs;

use fortytwo_harness::{parse_cases, run_cases, CaseOutcome};
use fortytwo_loader::load_str;
use fortytwo_vm::{opcode, Cell, Runtime};

/// Run a .f42 program until its `exit` intrinsic ends the process.
pub fn run(args: &[String]) -> Result<(), i32> {
    let mut start = opcode::FIRST_USER;
    let mut pushes: Vec<Cell> = Vec::new();
    let mut input: Option<&String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--start" => start = cell_arg(args, &mut i, "--start")?,
            "--push" => pushes.push(cell_arg(args, &mut i, "--push")?),
            other if other.starts_with('-') => {
                eprintln!("error: unknown option '{other}'");
                return Err(1);
            }
            _ => {
                if input.is_some() {
                    eprintln!("error: more than one input file");
                    return Err(1);
                }
                input = Some(&args[i]);
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: f42 run <input.f42> [--start N] [--push N]...");
        return Err(1);
    };

    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        1
    })?;

    let mut forth = Runtime::new();
    forth.set_file_name(input.as_str());
    load_str(&text, input, &mut forth).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    for &value in &pushes {
        forth.push_data_no_exec(value);
    }
    forth.reset_ip(start);

    // The stepping loop ends only through the program's own `exit`
    // intrinsic or a runtime error.
    loop {
        if let Err(e) = forth.step() {
            eprintln!("runtime error: {e}");
            return Err(3);
        }
    }
}

/// Run a case file against a program, printing one line per case.
pub fn test(args: &[String]) -> Result<(), i32> {
    if args.len() < 2 {
        eprintln!("error: test requires a program file and a case file");
        eprintln!("Usage: f42 test <program.f42> <cases.f42t>");
        return Err(1);
    }

    let program_path = &args[0];
    let cases_path = &args[1];

    let program_text = fs::read_to_string(program_path).map_err(|e| {
        eprintln!("error: cannot read '{program_path}': {e}");
        1
    })?;
    let cases_text = fs::read_to_string(cases_path).map_err(|e| {
        eprintln!("error: cannot read '{cases_path}': {e}");
        1
    })?;

    let cases = parse_cases(&cases_text, cases_path).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let mut forth = Runtime::new();
    forth.set_file_name(program_path.as_str());
    load_str(&program_text, program_path, &mut forth).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let results = run_cases(&forth, &cases);
    let mut failed = 0usize;
    for result in &results {
        match &result.outcome {
            CaseOutcome::Pass => println!("PASS {}", result.name),
            CaseOutcome::Mismatch { expected, actual } => {
                failed += 1;
                println!(
                    "FAIL {}: expected {expected:?}, got {actual:?}",
                    result.name
                );
            }
            CaseOutcome::Runtime(e) => {
                failed += 1;
                println!("FAIL {}: runtime error: {e}", result.name);
            }
            CaseOutcome::StepLimit => {
                failed += 1;
                println!("FAIL {}: step limit exceeded", result.name);
            }
        }
    }
    println!("{} passed, {failed} failed", results.len() - failed);

    if failed > 0 {
        Err(2)
    } else {
        Ok(())
    }
}

/// Consume the integer argument following a flag.
fn cell_arg(args: &[String], i: &mut usize, flag: &str) -> Result<Cell, i32> {
    *i += 1;
    let Some(raw) = args.get(*i) else {
        eprintln!("error: missing argument after {flag}");
        return Err(1);
    };
    raw.parse().map_err(|_| {
        eprintln!("error: {flag} expects an integer, got '{raw}'");
        1
    })
}
