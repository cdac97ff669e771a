use std::io;
use std::process;

use clap::Parser;
use cygpkg::cli::args::Args;
use cygpkg::logger::Logger;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let code = match cygpkg::run(&args, &mut io::stdout().lock()) {
        Ok(code) => code,
        Err(err) => {
            Logger::new(false, false).error(&err.to_string());
            err.exit_code()
        }
    };

    process::exit(code);
}
