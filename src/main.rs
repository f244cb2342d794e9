#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use wafimporter::app::waf_importer::{
    categorize_error, create_aws_config, write_resources_to, ImportError, ImporterConfig,
    OutputFormat, WafGenerator, WafService,
};
use wafimporter::{trace_debug, trace_error, trace_info, trace_warn};

const DEFAULT_FILTER: &str =
    "wafimporter=info,aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn";

/// List AWS WAF Classic resources as importable resource descriptors
#[derive(Parser, Debug)]
#[command(name = "wafimporter", version, about, long_about = None)]
struct Args {
    /// AWS region (WAF Classic is always queried in us-east-1)
    #[arg(short, long)]
    region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(short, long)]
    profile: Option<String>,

    /// Override the WAF endpoint, e.g. for a local emulator
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Config file (defaults to <config_dir>/wafimporter.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write resources to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Log level; RUST_LOG takes precedence when set
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "", "wafimporter")
        .map(|dirs| dirs.data_dir().join("logs"))
}

fn build_filter(level: LogLevel) -> tracing_subscriber::EnvFilter {
    if let Ok(filter) = tracing_subscriber::EnvFilter::try_from_default_env() {
        return filter;
    }
    let directives = DEFAULT_FILTER.replacen("wafimporter=info", &format!("wafimporter={}", level.directive()), 1);
    tracing_subscriber::EnvFilter::builder()
        .parse(directives)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER))
}

fn init_logging(level: LogLevel) {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Append to <data_dir>/logs/wafimporter.log when the file can be opened
    let mut file_error = None;
    let file_layer = log_dir().and_then(|dir| {
        if let Err(e) = std::fs::create_dir_all(&dir) {
            file_error = Some(format!("Failed to create log directory {:?}: {}", dir, e));
            return None;
        }
        let log_path = dir.join("wafimporter.log");
        match std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&log_path)
        {
            Ok(file) => Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            ),
            Err(e) => {
                file_error = Some(format!("Failed to open log file {:?}: {}", log_path, e));
                None
            }
        }
    });

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(message) = file_error {
        trace_warn!("{}", message);
    }
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "wafimporter crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(dir) = log_dir() {
            let _ = std::fs::create_dir_all(&dir);
            let crash_log_path = dir.join("crash.log");
            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }
            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}

async fn run(args: Args) -> Result<()> {
    let config = ImporterConfig::load(args.config.as_deref())?.with_overrides(
        args.region,
        args.profile,
        args.endpoint_url,
    );
    trace_debug!("Resolved importer config: {:?}", config);

    let aws_config = create_aws_config(&config).await;
    let generator = WafGenerator::new(WafService::from_config(&aws_config));

    let resources = generator.init_resources().await?;

    write_resources_to(&resources, args.format, args.output.as_deref())
        .context("Failed to write resources")?;

    trace_info!(
        "Wrote {} resources to {}",
        resources.len(),
        args.output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string())
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_panic_handler();

    let args = Args::parse();
    init_logging(args.log_level);
    trace_info!(
        "wafimporter {} starting ({}@{})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_BRANCH"),
        env!("GIT_COMMIT")
    );

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(import_error) = e.downcast_ref::<ImportError>() {
                let category = categorize_error(import_error);
                trace_error!("{}", import_error.detail());
                eprintln!(
                    "Error: {} [{}]{}",
                    category.user_message(),
                    category.short_label(),
                    if category.is_retryable() {
                        " - retrying later may succeed"
                    } else {
                        ""
                    }
                );
            } else {
                trace_error!("{:#}", e);
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
