use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SkinKind {
    Minimal,
    Rich,
}

/// Terminal todo list.
#[derive(Debug, Parser)]
#[command(name = "todolist", version, about = "Terminal todo list")]
pub struct Cli {
    /// Directory holding the saved tasks, settings and logs
    #[arg(long, default_value = ".todolist")]
    pub data_dir: PathBuf,

    /// Which rendering to use
    #[arg(long, value_enum, default_value_t = SkinKind::Rich)]
    pub skin: SkinKind,

    /// Log level written to <data-dir>/logs
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Keep everything in memory; nothing is saved
    #[arg(long)]
    pub ephemeral: bool,
}

impl Cli {
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["todolist"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from(".todolist"));
        assert_eq!(cli.skin, SkinKind::Rich);
        assert_eq!(cli.log_level, "info");
        assert!(!cli.ephemeral);
        assert_eq!(cli.log_dir(), PathBuf::from(".todolist").join("logs"));
    }

    #[test]
    fn parses_skin_and_flags() {
        let cli = Cli::try_parse_from([
            "todolist",
            "--skin",
            "minimal",
            "--data-dir",
            "/tmp/todos",
            "--ephemeral",
        ])
        .unwrap();
        assert_eq!(cli.skin, SkinKind::Minimal);
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/todos"));
        assert!(cli.ephemeral);
    }

    #[test]
    fn rejects_unknown_skin() {
        assert!(Cli::try_parse_from(["todolist", "--skin", "fancy"]).is_err());
    }
}
