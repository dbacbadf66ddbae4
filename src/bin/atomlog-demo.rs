#![deny(unsafe_code)]

#[path = "demo.rs"]
mod demo;

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    demo::run_with(env::args_os(), &mut stdout, &mut stderr)
}
