use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use raii_reader::{ReaderSource, hex_dump};

fn print_usage_and_exit() -> ! {
    eprintln!("Usage:");
    eprintln!("  raii_reader_dump <source> [<source> ...]");
    eprintln!();
    eprintln!("Use - to read standard input.");
    std::process::exit(1);
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => print_usage_and_exit(),
        [only] if only == "-h" || only == "--help" => print_usage_and_exit(),
        _ => {}
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for arg in &args {
        let source = ReaderSource::from_arg(arg);
        if args.len() > 1 && writeln!(out, "==> {source} <==").is_err() {
            return ExitCode::from(2);
        }

        match source.with_reader(|reader| hex_dump(reader, &mut out)) {
            Ok(Ok(count)) => log::debug!("{source}: {count} bytes"),
            Ok(Err(e)) => {
                eprintln!("{source}: write failed: {e}");
                return ExitCode::from(2);
            }
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}
