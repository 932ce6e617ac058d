use clap::Parser;
use std::path::PathBuf;

/// Runtime options for the board.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard")]
#[command(about = "Spreadsheet-style task board for the terminal")]
#[command(version)]
pub struct Config {
    /// File that receives diagnostic traces (the terminal is owned by the UI)
    #[arg(long, env = "TASKBOARD_LOG_FILE", default_value = "taskboard.log")]
    pub log_file: PathBuf,

    /// Trace filter directives, e.g. `info` or `taskboard=debug`
    #[arg(long, env = "TASKBOARD_LOG", default_value = "info")]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_arguments() {
        let config = Config::try_parse_from(["taskboard"]).unwrap();
        assert_eq!(config.log_file, PathBuf::from("taskboard.log"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "taskboard",
            "--log-file",
            "/tmp/board.log",
            "--log-filter",
            "taskboard=debug",
        ])
        .unwrap();
        assert_eq!(config.log_file, PathBuf::from("/tmp/board.log"));
        assert_eq!(config.log_filter, "taskboard=debug");
    }
}
