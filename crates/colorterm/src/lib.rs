//! The `colorterm` command-line tool.
//!
//! Reads a generate request (JSON, from a file or stdin) and either writes
//! the packaged zip archive (`generate`) or prints the bare theme file
//! (`render`). Settings come from an optional YAML file overridden by flags.
//!
//! ```text
//! echo '{"generateMode":"warp","colors":{...}}' | colorterm generate -o theme.zip
//! colorterm render --request req.json --mode kitty > colorterm.conf
//! ```

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::{build_dispatcher, execute, Cli, Command};
pub use config::{ConfigError, Settings};
pub use logging::{init_logging, LogConfig, LogError, LogFormat};
