//! Command-line interface definition for Chatshelf
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands to serve the HTTP API and to inspect the store.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chatshelf - file-backed chat transcript store
///
/// Keeps each chat as a JSON file and serves them over a small HTTP API.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Override the storage directory
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Chatshelf
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List stored chats, newest first
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one chat
    Show {
        /// Chat ID (UUID)
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Store a chat read from a JSON file
    Import {
        /// Path to the chat JSON file
        file: PathBuf,
    },

    /// Delete a chat
    Delete {
        /// Chat ID (UUID)
        id: String,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            storage_dir: None,
            verbose: false,
            command: Commands::List { json: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::default();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
        assert!(cli.storage_dir.is_none());
        assert!(matches!(cli.command, Commands::List { json: false }));
    }

    #[test]
    fn test_cli_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["chatshelf", "serve"]).unwrap();
        if let Commands::Serve { host, port } = cli.command {
            assert!(host.is_none());
            assert!(port.is_none());
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cli_parse_serve_with_overrides() {
        let cli =
            Cli::try_parse_from(["chatshelf", "serve", "--host", "127.0.0.1", "-p", "9000"])
                .unwrap();
        if let Commands::Serve { host, port } = cli.command {
            assert_eq!(host, Some("127.0.0.1".to_string()));
            assert_eq!(port, Some(9000));
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cli_parse_list_json() {
        let cli = Cli::try_parse_from(["chatshelf", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::List { json: true }));
    }

    #[test]
    fn test_cli_parse_show() {
        let cli = Cli::try_parse_from([
            "chatshelf",
            "show",
            "6f1c2a7e-8d0b-4c5e-9a3f-1b2c3d4e5f60",
        ])
        .unwrap();
        if let Commands::Show { id, json } = cli.command {
            assert_eq!(id, "6f1c2a7e-8d0b-4c5e-9a3f-1b2c3d4e5f60");
            assert!(!json);
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn test_cli_parse_import() {
        let cli = Cli::try_parse_from(["chatshelf", "import", "chat.json"]).unwrap();
        if let Commands::Import { file } = cli.command {
            assert_eq!(file, PathBuf::from("chat.json"));
        } else {
            panic!("Expected Import command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "chatshelf",
            "delete",
            "abc",
            "--storage-dir",
            "/tmp/chats",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.storage_dir, Some(PathBuf::from("/tmp/chats")));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Delete { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["chatshelf"]).is_err());
    }

    #[test]
    fn test_cli_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["chatshelf", "serve", "--port", "99999"]).is_err());
    }
}
