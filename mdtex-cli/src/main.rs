// Command-line interface for mdtex
//
// This binary converts documents written in the mdtex markdown dialect to LaTeX, and offers a
// couple of helpers around that.
//
// The core capabilities use the mdtex-babel crate; this binary only deals with arguments,
// configuration, files and the terminal.
//
// Usage:
//  mdtex <input> [--to <format>] [--output <file>]          - Convert (default)
//  mdtex convert <input> [--to <format>] [--output <file>]  - Same as above (explicit)
//  mdtex inspect <input> [<view>]                           - Print the parser events
//  mdtex check-bib [<file>...]                              - Report duplicate BibTeX keys
//  mdtex --list-formats                                     - List formats and views
//
// An input of `-` (or no input for `convert`) reads from stdin.
//
// Extra Parameters:
//
// Render options and format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Render options are applied on top of the loaded
// configuration; anything else is handed to the selected format.
// Example:
//  mdtex paper.md --extra-top-level section --extra-float tbp

mod transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use mdtex_babel::bib::BibChecker;
use mdtex_babel::formats::latex::parse_bool;
use mdtex_babel::{FormatRegistry, TopLevel};
use mdtex_config::{ConfigError, Loader, MdtexConfig, PROJECT_CONFIG};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};

const STDIN: &str = "-";

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "check-bib", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key {
            // the next arg is a value unless it is another flag (a lone "-" is stdin, not a value)
            let value = args
                .get(i + 1)
                .filter(|next| !next.starts_with('-'))
                .cloned();

            match value {
                Some(value) => {
                    extra_params.insert(key.to_string(), value);
                    i += 2;
                }
                None => {
                    extra_params.insert(key.to_string(), "true".to_string());
                    i += 1;
                }
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Insert the implicit `convert` subcommand when the first argument is an input path.
fn inject_convert(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    let is_input = first == STDIN || !first.starts_with('-');
    if !is_input || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }
    let mut injected = vec![args[0].clone(), "convert".to_string()];
    injected.extend_from_slice(&args[1..]);
    Some(injected)
}

fn build_cli() -> Command {
    Command::new("mdtex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a constrained markdown dialect to LaTeX")
        .long_about(
            "mdtex turns markdown documents (titles, lists, tables, images, equations,\n\
            code blocks, includes and comment directives) into LaTeX source.\n\n\
            Commands:\n  \
            - convert:   Convert a document (default command)\n  \
            - inspect:   View the parser's event stream\n  \
            - check-bib: Report redundant BibTeX entries\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override render options or pass\n  \
            format-specific options. Boolean flags can omit the value.\n\n\
            Examples:\n  \
            mdtex paper.md                          # LaTeX on stdout\n  \
            mdtex paper.md -o paper.tex             # LaTeX to a file\n  \
            mdtex paper.md --extra-top-level section\n  \
            cat paper.md | mdtex - > paper.tex      # Read stdin\n  \
            mdtex inspect paper.md tag              # Event stream as tags"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .long_about(
                    "Convert a markdown document.\n\n\
                    The target format is taken from --to, then from the extension of\n\
                    the output file, then from the configuration (latex by default).\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdtex convert paper.md -o paper.tex      # Write LaTeX\n  \
                    mdtex convert paper.md --to events-json  # Dump events as JSON\n  \
                    mdtex paper.md                           # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .default_value(STDIN)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: latex, tag, events, events-json\n\
                            Use the format name, not the file extension."
                        )
                        .value_hint(ValueHint::Other),
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
                .long_about(
                    "View the events the parser produces for a document.\n\n\
                    Views:\n  \
                    - events:      One line per event (default)\n  \
                    - events-json: Events as a JSON array\n  \
                    - tag:         XML-like tags nested by begin/end events\n\n\
                    Examples:\n  \
                    mdtex inspect paper.md\n  \
                    mdtex inspect paper.md tag --extra-skip-blank"
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the document, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to print. Defaults to 'events'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_VIEWS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("check-bib")
                .about("Report redundant entries in BibTeX files")
                .long_about(
                    "Scan BibTeX files for entries whose key was already used.\n\n\
                    Each file is checked on its own. Reads stdin when no file is given.\n\n\
                    Examples:\n  \
                    mdtex check-bib refs.bib\n  \
                    cat *.bib | mdtex check-bib"
                )
                .arg(
                    Arg::new("files")
                        .help("BibTeX files to check")
                        .num_args(0..)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => match inject_convert(&cleaned_args) {
            // Try parsing again with "convert" injected
            Some(new_args) => match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        &mut extra_params,
    );

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input has a default");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let to = resolve_target_format(
                sub_matches.get_one::<String>("to").map(|s| s.as_str()),
                output,
                &config,
            );
            handle_convert_command(input, &to, output, &extra_params, &config);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_VIEW);
            handle_inspect_command(path, view, &extra_params);
        }
        Some(("check-bib", sub_matches)) => {
            let files: Vec<&String> = sub_matches
                .get_many::<String>("files")
                .map(|files| files.collect())
                .unwrap_or_default();
            handle_check_bib_command(&files);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_env("RUST_LOG");
    builder.init();
}

/// Read a whole input, `-` meaning stdin.
fn read_input(path: &str) -> String {
    if path == STDIN {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {e}");
                std::process::exit(1);
            });
        return source;
    }
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// `--to`, else the output extension, else the configured default.
fn resolve_target_format(explicit: Option<&str>, output: Option<&str>, config: &MdtexConfig) -> String {
    if let Some(to) = explicit {
        return to.to_string();
    }
    output
        .and_then(|path| FormatRegistry::default().detect_format_from_filename(path))
        .unwrap_or_else(|| config.convert.format.clone())
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MdtexConfig,
) {
    let registry = FormatRegistry::with_render_options((&config.render).into());

    // Validate the format before reading any input
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);
    log::debug!("converting {input} to {to}");

    let result = registry
        .convert_with_options(&source, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, view: &str, extra_params: &HashMap<String, String>) {
    let source = read_input(path);

    let output = transforms::execute_view(&source, view, extra_params).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the check-bib command
fn handle_check_bib_command(files: &[&String]) {
    if files.is_empty() {
        check_bib_source(&read_input(STDIN));
        println!("finish checking stdin");
        return;
    }
    for file in files {
        check_bib_source(&read_input(file));
        println!("finish checking file {file}");
    }
}

fn check_bib_source(source: &str) {
    let mut checker = BibChecker::new();
    for line in source.lines() {
        if let Some(key) = checker.check_line(line) {
            println!("redundant entry: {key}");
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Conversion formats:");
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description())
            .unwrap_or_default();
        println!("  {format_name:<12} {description}");
    }

    println!("\nInspect views:");
    for view in transforms::AVAILABLE_VIEWS {
        println!("  {view}");
    }
}

/// Render and convert settings accepted as `--extra-*`, with their configuration keys.
const CONFIG_EXTRAS: &[(&[&str], &str)] = &[
    (&["top-level", "toplevel"], "render.top_level"),
    (&["float"], "render.float"),
    (&["image-width", "width"], "render.image_width"),
    (&["table-columns", "columns"], "render.table_columns"),
    (&["include-extension"], "render.include_extension"),
    (&["keep-comments"], "render.keep_comments"),
    (&["format"], "convert.format"),
];

fn load_cli_config(
    explicit_path: Option<&str>,
    extra_params: &mut HashMap<String, String>,
) -> MdtexConfig {
    let loader = Loader::new().with_optional_file(PROJECT_CONFIG);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    apply_config_overrides(loader, extra_params)
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Move settings given as `--extra-*` into the configuration as overrides. Whatever is left
/// is passed on to the selected format.
fn apply_config_overrides(
    mut loader: Loader,
    extra_params: &mut HashMap<String, String>,
) -> Result<Loader, ConfigError> {
    for (aliases, key) in CONFIG_EXTRAS {
        let Some(raw) = take_override(extra_params, aliases) else {
            continue;
        };
        loader = match *key {
            "render.top_level" => {
                if let Err(e) = raw.parse::<TopLevel>() {
                    eprintln!("Error: {e} (expected chapter or section)");
                    std::process::exit(1);
                }
                loader.set_override(key, raw.to_lowercase())?
            }
            "render.keep_comments" => loader.set_override(key, parse_bool_arg("keep-comments", &raw))?,
            _ => loader.set_override(key, raw)?,
        };
    }
    Ok(loader)
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    parse_bool(flag, raw).unwrap_or_else(|_| {
        eprintln!("Invalid boolean value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
