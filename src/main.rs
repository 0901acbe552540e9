use crossterm::style::Stylize;
use std::fmt;
use tracing::{debug, error};
use vacme_log::cli::{build_cli, parse_config};
use vacme_log::internal::color::{color_for, relative_luminance};
use vacme_log::internal::config::{AppConfig, SharedConfig};
use vacme_log::internal::logger::init_tracing;
use vacme_log::internal::sink::terminal::to_color;
use vacme_log::{Bare, Logger, Severity, TerminalSink};

fn main() -> anyhow::Result<()> {
    // Parse command line arguments first
    let matches = build_cli().get_matches();
    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize diagnostics
    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("Failed to initialize diagnostics: {}", e);
        std::process::exit(1);
    }

    debug!("Effective configuration: {:?}", config);

    match matches.subcommand() {
        Some(("colors", sub)) => {
            for name in sub.get_many::<String>("names").into_iter().flatten() {
                print_colors(name, config.console.color);
            }
        }
        Some(("emit", sub)) => {
            let channel = sub
                .get_one::<String>("channel")
                .map(String::as_str)
                .unwrap_or_default();
            let severity = sub
                .get_one::<String>("severity")
                .map(|raw| Severity::from_raw(raw))
                .unwrap_or_default();
            let message = sub
                .get_one::<String>("message")
                .map(String::as_str)
                .unwrap_or_default();
            // Arguments are appended as typed, without Debug quoting
            let extra: Vec<Bare<&str>> = sub
                .get_many::<String>("args")
                .into_iter()
                .flatten()
                .map(|arg| Bare(arg.as_str()))
                .collect();
            let args: Vec<&dyn fmt::Debug> = extra.iter().map(|a| a as &dyn fmt::Debug).collect();

            emit(&config, channel, severity, message, &args);
        }
        Some(("config", _)) => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
        other => {
            error!("Unknown command: {:?}", other.map(|(name, _)| name));
            std::process::exit(2);
        }
    }

    Ok(())
}

fn emit(config: &AppConfig, channel: &str, severity: Severity, message: &str, args: &[&dyn fmt::Debug]) {
    let logger = Logger::with_config(
        SharedConfig::new(config.console.log_config()),
        TerminalSink::from_config(&config.console),
    );
    let channel = logger.create_channel(channel);
    if !channel.enabled(severity) {
        debug!(
            "{} suppressed for channel '{}' (min severity {})",
            severity,
            channel.name(),
            logger.min_severity()
        );
    }
    channel.emit(severity, message, args);
}

fn print_colors(name: &str, color: bool) {
    let style = color_for(name);
    let swatch = if color {
        format!(" {} ", name)
            .with(to_color(style.foreground))
            .on(to_color(style.background))
            .to_string()
    } else {
        name.to_string()
    };
    println!(
        "{}  background={} foreground={} luminance={:.4}",
        swatch,
        style.background,
        style.foreground,
        relative_luminance(style.background)
    );
}
