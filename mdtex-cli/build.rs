use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the views from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_VIEWS: &[&str] = &["events", "events-json", "tag"];

const FORMATS: &[&str] = &["latex", "tag", "events", "events-json"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdtex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a constrained markdown dialect to LaTeX")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect views")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdtex.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser and renderer decisions to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document (default command)")
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parser's event stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the document, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to print")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("check-bib")
                .about("Report redundant entries in BibTeX files")
                .arg(
                    Arg::new("files")
                        .help("BibTeX files to check")
                        .num_args(0..)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdtex", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdtex", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdtex", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
