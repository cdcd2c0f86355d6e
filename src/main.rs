//! Generates, shows and checks elementary-bitboard slider tables.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::fs::{File, read_to_string, write};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use clap::{App, Arg, ArgMatches, SubCommand, crate_version};
use log::{error, info};
use simplelog::{WriteLogger, LevelFilter, Config};
use chess::bitboard::relevant_mask;
use elementary_tables::config::Settings;
use elementary_tables::search::TargetSpace;
use elementary_tables::selector::Selector;
use elementary_tables::table::{generate_record, TableSet};

fn main() -> Result<(), Error> {
    let matches =
        App::new("Elementary Tables")
            .version(crate_version!())
            .author("Mike Leany")
            .about("Generates the masks and multipliers for elementary-bitboard slider attacks.")
            .arg(Arg::with_name("config")
                .long("config")
                .short("c")
                .global(true)
                .value_name("FILE")
                .takes_value(true)
                .help("Reads settings from a YAML file"))
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .global(true)
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .global(true)
                .value_name("LOG_FILE")
                .takes_value(true)
                .default_value("elementary-tables.log")
                .help("Sets the log file if logging is turned on"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .takes_value(true)
                .default_value("info")
                .help("Sets the log level if logging is turned on"))
            .subcommand(SubCommand::with_name("generate")
                .about("Generates the tables and writes them out (default)")
                .arg(Arg::with_name("piece")
                    .long("piece")
                    .short("p")
                    .value_name("SLIDER")
                    .takes_value(true)
                    .possible_values(&["bishop", "rook"])
                    .help("Generates the tables of one slider only"))
                .arg(Arg::with_name("format")
                    .long("format")
                    .short("f")
                    .value_name("FORMAT")
                    .takes_value(true)
                    .possible_values(&["cpp", "rust", "yaml"])
                    .help("Sets the output format"))
                .arg(Arg::with_name("output")
                    .long("output")
                    .short("o")
                    .value_name("FILE")
                    .takes_value(true)
                    .help("Writes the tables to a file instead of standard output"))
                .arg(Arg::with_name("name-prefix")
                    .long("name-prefix")
                    .value_name("PREFIX")
                    .takes_value(true)
                    .help("Sets the prefix of constant names in Rust output"))
                .arg(Arg::with_name("no-header")
                    .long("no-header")
                    .help("Leaves out the header line with the generation date")))
            .subcommand(SubCommand::with_name("show")
                .about("Shows the mask and layers of one square as board diagrams")
                .arg(Arg::with_name("selector")
                    .value_name("SELECTOR")
                    .required(true)
                    .help("A slider and a square, such as rook:d4 or b@e5")))
            .subcommand(SubCommand::with_name("check")
                .about("Reads tables written in YAML and checks every record")
                .arg(Arg::with_name("file")
                    .value_name("FILE")
                    .required(true)
                    .help("The YAML file to check")))
            .get_matches();

    let log_file = PathBuf::from(matches.value_of_os("log-file").expect("INFALLIBLE"));
    let log_level = match matches.value_of("log-level") {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some(level) => return Err(Error(format!("{}: invalid log level", level))),
        None => unreachable!(),
    };

    let _logger = if matches.is_present("log") {
        WriteLogger::init(
            log_level,
            Config::default(),
            File::create(&log_file).map_err(|err| {
                Error(format!("{}: {}", log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, Config::default(), io::sink())
    };

    let result = match matches.subcommand() {
        ("show", Some(sub)) => show(sub.value_of("selector").expect("INFALLIBLE")),
        ("check", Some(sub)) => check(Path::new(sub.value_of_os("file").expect("INFALLIBLE"))),
        ("generate", Some(sub)) => generate(&matches, sub),
        _ => generate(&matches, &ArgMatches::default()),
    };

    if let Err(err) = &result {
        error!("{}", err);
    }
    result
}

fn settings(matches: &ArgMatches<'_>, sub: &ArgMatches<'_>) -> Result<Settings, Error> {
    let mut settings = match sub.value_of_os("config").or_else(|| matches.value_of_os("config")) {
        Some(path) => {
            let path = Path::new(path);
            Settings::load(path).map_err(|err| Error(format!("{}: {}", path.display(), err)))?
        },
        None => Settings::default(),
    };

    if let Some(piece) = sub.value_of("piece") {
        settings.sliders = vec![piece.parse()?];
    }
    if let Some(format) = sub.value_of("format") {
        settings.format = format.parse()?;
    }
    if let Some(output) = sub.value_of_os("output") {
        settings.output = Some(PathBuf::from(output));
    }
    if let Some(prefix) = sub.value_of("name-prefix") {
        settings.name_prefix = prefix.to_owned();
    }
    if sub.is_present("no-header") {
        settings.header = false;
    }

    Ok(settings)
}

fn generate(matches: &ArgMatches<'_>, sub: &ArgMatches<'_>) -> Result<(), Error> {
    let settings = settings(matches, sub)?;
    let set = TableSet::generate(&settings.sliders()?)?;

    // nothing is written until every table has been generated and emitted
    let mut buf = Vec::new();
    settings.emitter().emit(&set, &mut buf)?;

    match &settings.output {
        Some(path) => {
            write(path, &buf).map_err(|err| Error(format!("{}: {}", path.display(), err)))?;
            info!("tables written to {}", path.display());
        },
        None => io::stdout().write_all(&buf)?,
    }
    eprintln!("table size: {}", set.total_size());

    Ok(())
}

fn show(selector: &str) -> Result<(), Error> {
    let Selector { slider, square } = selector.parse()?;
    let mask = relevant_mask(square, slider);
    let space = TargetSpace::for_mask(mask);
    let record = generate_record(square, slider)?;

    println!("{} on {}: {} squares, shift {}", slider, square, mask.len(), record.shift);
    println!("{}", mask.diagram());
    for (i, layer) in record.layers().enumerate().filter(|(_, layer)| !layer.is_unused()) {
        println!();
        println!("layer {}: multiplier {:016x}, target bits {:016x}",
            i, layer.multiplier, layer.claimed(space.mask()));
        println!("{}", layer.mask.diagram());
    }
    println!();
    println!("masked product: {:016x}", record.product(mask) & space.mask());

    Ok(())
}

fn check(path: &Path) -> Result<(), Error> {
    let s = read_to_string(path).map_err(|err| Error(format!("{}: {}", path.display(), err)))?;
    let set: TableSet = serde_yaml::from_str(&s)
        .map_err(|err| Error(format!("{}: {}", path.display(), err)))?;

    set.check()?;
    for tables in &set.tables {
        println!("{}: {} records, table size {}", tables.slider(), tables.records().len(), tables.size());
    }
    println!("{}: ok, table size {}", path.display(), set.total_size());

    Ok(())
}

struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Error { }

impl From<elementary_tables::Error> for Error {
    fn from(err: elementary_tables::Error) -> Self {
        Error(err.to_string())
    }
}

impl From<chess::Error> for Error {
    fn from(err: chess::Error) -> Self {
        Error(err.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error(err.to_string())
    }
}
