use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the stage names from puki-babel/src/pipeline.rs
// We need to duplicate this here since build scripts can't access the library
const AVAILABLE_STAGES: &[&str] = &[
    "directives",
    "headings",
    "links",
    "recent",
    "timestamps",
    "counters",
    "inline-styles",
    "emphasis",
    "ordered-lists",
    "unordered-lists",
    "blockquotes",
    "tables",
    "row-tails",
    "alignment",
    "row-tails-final",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("pukiwiki2hugo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a PukiWiki site into a Hugo site")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-stages")
                .long("list-stages")
                .help("List the conversion stages")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a whole PukiWiki site")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::DirPath),
                )
                .arg(
                    Arg::new("gone")
                        .long("gone")
                        .short('g')
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Convert a single page file")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show a page after a conversion stage")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("stage")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_STAGES,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "pukiwiki2hugo", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "pukiwiki2hugo", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "pukiwiki2hugo", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
