use clap::Parser;

/// Sol: a car-dealership chat assistant backed by Gemini.
#[derive(Parser, Debug)]
#[command(name = "sol", version, about)]
pub struct Args {
    /// Display language code (en, es). Unsupported codes fall back to English.
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::parse_from([
            "sol",
            "--language",
            "es",
            "--config",
            "/tmp/sol.toml",
            "--log-level",
            "sol=debug",
        ]);
        assert_eq!(args.language.as_deref(), Some("es"));
        assert_eq!(args.config.as_deref(), Some("/tmp/sol.toml"));
        assert_eq!(args.log_level.as_deref(), Some("sol=debug"));
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::parse_from(["sol", "-l", "en"]);
        assert_eq!(args.language.as_deref(), Some("en"));
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }
}
