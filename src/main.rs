//! morphodict CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use morphodict::cli::args::MorphodictArgs;
use morphodict::cli::commands::execute_command;

fn main() {
    let args = MorphodictArgs::parse();

    // RUST_LOG, when set, refines the level chosen by -v/-q.
    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "morphodict {} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("morphodict: {e}");
        process::exit(if e.is_parse() { 2 } else { 1 });
    }
}
