// Command-line interface for puki2hugo
//
// This binary moves a PukiWiki installation over to a Hugo site. The conversion itself lives in
// the puki-babel crate; this crate only wires configuration, file paths and logging around it.
//
// Usage:
//  pukiwiki2hugo convert [-i <wiki root>] [-o <site root>] [-g]  - Convert a whole site
//  pukiwiki2hugo render <page file> [-o <file>]                  - Convert one page file
//  pukiwiki2hugo inspect <page file> [<stage>] [--json]          - Show a page after a stage
//  pukiwiki2hugo --list-stages                                   - List the conversion stages
//
// Configuration:
//
// Defaults come from puki-config. A `puki.toml` in the working directory is layered on top when
// present, then the file given with --config, then the convert flags.
//
// Logging goes to stderr. The level is info, debug with --verbose; RUST_LOG takes precedence.

use puki_cli::inspect;

use clap::{Arg, ArgAction, Command, ValueHint};
use puki_babel::pipeline::{convert, stage_names};
use puki_babel::{default_page, publish_site, read_pages, SiteLayout, SourceLayout};
use puki_config::{Loader, PukiConfig};
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("pukiwiki2hugo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a PukiWiki site into a Hugo site")
        .long_about(
            "pukiwiki2hugo converts PukiWiki pages into Hugo Markdown documents.\n\n\
            Commands:\n  \
            - convert: Convert a whole PukiWiki installation into a Hugo content tree\n  \
            - render:  Convert a single page file\n  \
            - inspect: Show a page after any conversion stage\n\n\
            Examples:\n  \
            pukiwiki2hugo convert -i /var/www/wiki -o site     # Convert a site\n  \
            pukiwiki2hugo convert -g                           # Also write gone-redirects.yaml\n  \
            pukiwiki2hugo render wiki/46726F6E7450616765.txt   # One page to stdout\n  \
            pukiwiki2hugo inspect page.txt tables --json       # Debug a page",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-stages")
                .long("list-stages")
                .help("List the conversion stages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a puki.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every page read and written")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a whole PukiWiki site")
                .long_about(
                    "Reads every page under <input>/wiki, converts it and writes a Hugo content tree.\n\n\
                    The front page (from pukiwiki.ini.php, FrontPage if unset) becomes\n\
                    content/_index.md; every other page becomes content/docs/<slug>/_index.md.",
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_name("DIR")
                        .help("PukiWiki root directory (overrides source.root)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("DIR")
                        .help("Hugo site directory (overrides output.root)")
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("gone")
                        .long("gone")
                        .short('g')
                        .help("Write a gone redirect mapping for the old wiki URLs")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Convert a single page file")
                .arg(
                    Arg::new("path")
                        .help("Raw PukiWiki page file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
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
                .about("Show a page after a conversion stage")
                .arg(
                    Arg::new("path")
                        .help("Raw PukiWiki page file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("stage")
                        .help("Stage to stop after. Defaults to the last one")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(stage_names()))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print every stage snapshot up to the stage as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let matches = build_cli().get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-stages") {
        print!("{}", inspect::describe_stages());
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            if let Some(input) = sub_matches.get_one::<String>("input") {
                config.source.root = PathBuf::from(input);
            }
            if let Some(output) = sub_matches.get_one::<String>("output") {
                config.output.root = PathBuf::from(output);
            }
            if sub_matches.get_flag("gone") {
                config.redirects.enabled = true;
            }
            handle_convert_command(&config);
        }
        Some(("render", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_render_command(path, output);
        }
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let stage = sub_matches.get_one::<String>("stage").map(|s| s.as_str());
            handle_inspect_command(path, stage, sub_matches.get_flag("json"));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(config: &PukiConfig) {
    let root = &config.source.root;
    let source_layout = SourceLayout::from(&config.source);

    log::info!("Reading pages from {}", root.display());
    let pages = read_pages(root, &source_layout).unwrap_or_else(|e| {
        eprintln!("Error reading pages: {e}");
        std::process::exit(1);
    });
    log::info!("Found {} pages", pages.len());

    let front_page = default_page(root, &source_layout);
    log::debug!("Front page is '{front_page}'");

    let site_layout = SiteLayout::from(config);
    let report = publish_site(&pages, &front_page, &config.output.root, &site_layout)
        .unwrap_or_else(|e| {
            eprintln!("Error writing site: {e}");
            std::process::exit(1);
        });

    log::info!(
        "Wrote {} pages to {}",
        report.pages.len(),
        config.output.root.display()
    );
    if let Some(path) = report.redirects {
        log::info!("Wrote redirect mapping to {}", path.display());
    }
}

/// Handle the render command
fn handle_render_command(path: &str, output: Option<&str>) {
    let converted = convert(&read_page_file(path));
    match output {
        Some(out) => {
            fs::write(out, converted).unwrap_or_else(|e| {
                eprintln!("Error writing file '{out}': {e}");
                std::process::exit(1);
            });
            log::info!("Wrote {out}");
        }
        None => print!("{converted}"),
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, stage: Option<&str>, json: bool) {
    let source = read_page_file(path);
    let output = inspect::execute_inspect(&source, stage, json).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });
    print!("{output}");
}

fn read_page_file(path: &str) -> String {
    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("'{path}' is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> PukiConfig {
    let loader = Loader::new().with_optional_file("puki.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
