use std::{fs, process::ExitCode};

use clap::Parser;
use pasquale::{
    analyze, execute,
    interpreter::evaluator::core::{Config, FrameLookup},
    parse, tokenize,
};

/// pasquale runs programs written in a small subset of Pascal and prints
/// the variables of the program frame.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pasquale to read the program from a file instead of taking it
    /// verbatim.
    #[arg(short, long)]
    file: bool,

    /// Lets procedures read and write the variables of enclosing blocks by
    /// following static links instead of using only the top frame.
    #[arg(long)]
    static_links: bool,

    /// Print the token stream and exit.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed syntax tree and exit.
    #[arg(long)]
    ast: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    match execute_args(&args, &source) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the pipeline as far as the flags ask for and renders the output.
fn execute_args(args: &Args, source: &str) -> Result<String, pasquale::error::Error> {
    if args.tokens {
        let tokens = tokenize(source)?;
        return Ok(tokens.iter()
                        .map(|t| format!("{}:{}\t{:?}\t{}\n", t.line, t.column, t.kind, t))
                        .collect());
    }

    let program = parse(source)?;
    if args.ast {
        return Ok(format!("{program:#?}\n"));
    }

    let resolutions = analyze(&program)?;
    let frame_lookup = if args.static_links {
        FrameLookup::StaticChain
    } else {
        FrameLookup::TopFrame
    };
    let bindings = execute(&program, &resolutions, Config { frame_lookup })?;
    Ok(bindings.to_string())
}
