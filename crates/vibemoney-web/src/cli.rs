use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about = "Stock data HTTP API", long_about = None)]
pub struct Cli {
    /// Interface to bind; overrides HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind; overrides PORT
    #[arg(long)]
    pub port: Option<u16>,

    /// Number of HTTP workers (defaults to the number of physical cores)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Sets the level of logging, unless RUST_LOG is set
    #[arg(long, value_enum, ignore_case = true, default_value_t = TraceLevel::Info)]
    pub trace: TraceLevel,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl TraceLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            TraceLevel::Trace => "trace",
            TraceLevel::Debug => "debug",
            TraceLevel::Info => "info",
            TraceLevel::Warn => "warn",
            TraceLevel::Error => "error",
        }
    }
}
