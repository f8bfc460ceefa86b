use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use numvec::io::LoadOptions;
use numvec_cli::commands::{self, parse_list, resolve_load_options};

fn file_arg() -> Arg {
    Arg::new("file")
        .help("Whitespace or tab delimited numeric text file")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn skip_arg() -> Arg {
    Arg::new("skip")
        .short('s')
        .long("skip")
        .help("Number of leading lines to ignore. Overrides the configuration file.")
        .value_parser(clap::value_parser!(usize))
}

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("JSON configuration file with `loader` and `remote` sections")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("NUMVEC_LOG", "error,numvec=info"))
        .init();

    let matches = Command::new("numvec")
        .version(clap::crate_version!())
        .about("Numeric array kernel: statistics, interpolation, integration and fitting")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("describe")
                .about("Print length, sum, mean, extremes and norm of each column")
                .arg(file_arg())
                .arg(skip_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("unpack")
                        .short('u')
                        .long("unpack")
                        .help("Treat each field position as its own column")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the summary as JSON instead of TSV")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("interp")
                .about("Linearly interpolate the first column over control points")
                .arg(file_arg())
                .arg(skip_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("xp")
                        .long("xp")
                        .help("Comma separated, increasing control point positions")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("fp")
                        .long("fp")
                        .help("Comma separated control point values")
                        .required(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("cumtrapz")
                .about("Cumulative trapezoidal integral of column 1 over column 0")
                .arg(file_arg())
                .arg(skip_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("unwrap")
                .about("Remove 2*pi jumps from the phase in the first column")
                .arg(file_arg())
                .arg(skip_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("polyfit")
                .about("Least-squares line through columns 0 (x) and 1 (y)")
                .arg(file_arg())
                .arg(skip_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the fit as JSON instead of TSV")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("remote")
                .about("Forward a JSON payload to the remote compute service")
                .arg(
                    Arg::new("operation")
                        .help("Service operation, e.g. interpolate or curve_fit")
                        .required(true),
                )
                .arg(
                    Arg::new("payload")
                        .short('p')
                        .long("payload")
                        .help("JSON request body")
                        .required(true),
                )
                .arg(config_arg()),
        )
        .get_matches();

    if let Err(e) = dispatch(&matches) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn dispatch(matches: &ArgMatches) -> Result<()> {
    let stdout = std::io::stdout();
    let out = stdout.lock();

    match matches.subcommand() {
        Some(("describe", sub_m)) => {
            let path = file_of(sub_m)?;
            let mut options = load_options(sub_m)?;
            options.unpack |= sub_m.get_flag("unpack");
            commands::describe::run(path, &options, sub_m.get_flag("json"), out)
        }
        Some(("interp", sub_m)) => {
            let path = file_of(sub_m)?;
            let xp = parse_list(required_str(sub_m, "xp")?).context("Invalid --xp")?;
            let fp = parse_list(required_str(sub_m, "fp")?).context("Invalid --fp")?;
            let skip = load_options(sub_m)?.skip_lines;
            commands::interp::run(path, skip, &xp, &fp, out)
        }
        Some(("cumtrapz", sub_m)) => {
            let skip = load_options(sub_m)?.skip_lines;
            commands::cumtrapz::run(file_of(sub_m)?, skip, out)
        }
        Some(("unwrap", sub_m)) => {
            let skip = load_options(sub_m)?.skip_lines;
            commands::unwrap::run(file_of(sub_m)?, skip, out)
        }
        Some(("polyfit", sub_m)) => {
            let skip = load_options(sub_m)?.skip_lines;
            commands::polyfit::run(file_of(sub_m)?, skip, sub_m.get_flag("json"), out)
        }
        Some(("remote", sub_m)) => {
            let operation = required_str(sub_m, "operation")?;
            let payload = required_str(sub_m, "payload")?;
            let config = sub_m.get_one::<PathBuf>("config").map(PathBuf::as_path);
            commands::remote::run(operation, payload, config, out)
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn file_of(matches: &ArgMatches) -> Result<&PathBuf> {
    matches
        .get_one::<PathBuf>("file")
        .context("Missing input file")
}

fn load_options(matches: &ArgMatches) -> Result<LoadOptions> {
    resolve_load_options(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
        matches.get_one::<usize>("skip").copied(),
    )
}

fn required_str<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .with_context(|| format!("Missing --{}", name))
}
