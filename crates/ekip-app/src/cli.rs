use clap::Parser;

/// ekip: ask the company knowledge base from the terminal.
#[derive(Parser, Debug)]
#[command(name = "ekip", version, about)]
pub struct Args {
    /// Log in with this email on startup.
    #[arg(short = 'u', long)]
    pub email: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Knowledge service base URL, e.g. `http://localhost:8000/api`.
    #[arg(long)]
    pub api_url: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
