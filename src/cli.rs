use clap::{Arg, ArgAction, Command};
use std::path::Path;

use crate::internal::config::{AppConfig, OutputFormat, TraceChannels};
use crate::internal::severity::Severity;

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str =
        Box::leak(crate::internal::config::get_version_info().into_boxed_str());

    Command::new("vacme-log")
        .version(version)
        .about("Preview channel colors and emit sample log lines")
        .subcommand_required(true)
        .arg(
            Arg::new("config-file")
                .long("config")
                .global(true)
                .help("Path to config file (default: ./vacme-log.yaml, /etc/vacme-log/config.yaml)"),
        )
        .arg(
            Arg::new("min-severity")
                .long("min-severity")
                .global(true)
                .help("Minimum severity (trace|debug|info|warn|error); unknown values mean debug"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .global(true)
                .action(ArgAction::Append)
                .help("Channels that always emit, comma separated; '*' for all"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Disable ANSI colors"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .global(true)
                .value_parser(["pretty", "json"])
                .help("Output format for emitted lines"),
        )
        .subcommand(
            Command::new("colors")
                .about("Show the colors derived for channel names")
                .arg(
                    Arg::new("names")
                        .required(true)
                        .num_args(1..)
                        .help("Channel names"),
                ),
        )
        .subcommand(
            Command::new("emit")
                .about("Emit one line through a channel")
                .arg(
                    Arg::new("channel")
                        .long("channel")
                        .short('c')
                        .required(true)
                        .help("Channel name"),
                )
                .arg(
                    Arg::new("severity")
                        .long("severity")
                        .short('s')
                        .default_value("info")
                        .help("Severity of the message"),
                )
                .arg(Arg::new("message").required(true).help("Message text"))
                .arg(
                    Arg::new("args")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .help("Extra arguments appended after the message"),
                ),
        )
        .subcommand(Command::new("config").about("Print the effective configuration as YAML"))
}

/// Load the layered configuration, then apply command line overrides.
pub fn parse_config(matches: &clap::ArgMatches) -> anyhow::Result<AppConfig> {
    let config_file = matches.get_one::<String>("config-file").map(Path::new);
    let mut config = AppConfig::load(config_file)?;

    if let Some(raw) = matches.get_one::<String>("min-severity") {
        config.console.min_severity = Severity::from_raw(raw);
    }

    if let Some(lists) = matches.get_many::<String>("trace") {
        for list in lists {
            config.console.trace_channels.extend(TraceChannels::parse(list));
        }
    }

    if matches.get_flag("no-color") {
        config.console.color = false;
        config.logging.color = false;
    }

    if let Some(format) = matches.get_one::<String>("format") {
        config.console.format = format.parse::<OutputFormat>()?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_emit_arguments() {
        let matches = build_cli()
            .try_get_matches_from([
                "vacme-log", "emit", "-c", "Search", "-s", "warn", "slow", "12", "ms",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "emit");
        assert_eq!(sub.get_one::<String>("channel").unwrap(), "Search");
        let args: Vec<&String> = sub.get_many::<String>("args").unwrap().collect();
        assert_eq!(args, vec!["12", "ms"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["vacme-log", "colors", "A", "--trace", "A,B", "--no-color"])
            .unwrap();
        assert!(matches.get_flag("no-color"));
        let traces: Vec<&String> = matches.get_many::<String>("trace").unwrap().collect();
        assert_eq!(traces, vec!["A,B"]);
    }
}
