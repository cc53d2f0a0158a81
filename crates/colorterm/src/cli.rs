//! Command-line interface.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colorterm_dispatch::{Dispatcher, GenerateRequest, InstallGuides, Mode};
use colorterm_render::{Renderer, TemplateRegistry};

use crate::config::Settings;
use crate::logging::LogFormat;

/// Generate terminal emulator color themes from an RGBA palette.
#[derive(Debug, Parser)]
#[command(name = "colorterm", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Settings file (YAML)
    #[arg(long, global = true, env = "COLORTERM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory of template overrides
    #[arg(long, global = true)]
    pub template_dir: Option<PathBuf>,

    /// Directory of install guide overrides (<mode>.txt)
    #[arg(long, global = true)]
    pub guide_dir: Option<PathBuf>,

    /// Log filter, e.g. `info` or `colorterm_dispatch=debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a zip archive holding a theme file and its install guide
    Generate {
        #[command(flatten)]
        input: RequestArgs,

        /// Archive path [default: <output_dir>/<archive_name>]
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Render the theme file alone, without packaging
    Render {
        #[command(flatten)]
        input: RequestArgs,

        /// Output file [default: stdout]
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List supported modes
    Modes,
}

#[derive(Debug, Args)]
pub struct RequestArgs {
    /// JSON request body (`-` for stdin)
    #[arg(short, long, default_value = "-")]
    pub request: PathBuf,

    /// Override the request's generateMode
    #[arg(short, long)]
    pub mode: Option<String>,
}

impl Cli {
    /// Loads the settings file, then applies flag overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.global.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        if let Some(dir) = &self.global.template_dir {
            settings.template_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.global.guide_dir {
            settings.guide_dir = Some(dir.clone());
        }
        if let Some(level) = &self.global.log_level {
            settings.log.level = level.clone();
        }
        if let Some(format) = self.global.log_format {
            settings.log.format = format;
        }
        Ok(settings)
    }
}

/// Builds a dispatcher from bundled assets plus the configured overrides.
pub fn build_dispatcher(settings: &Settings) -> Result<Dispatcher> {
    let mut registry = TemplateRegistry::embedded();
    if let Some(dir) = &settings.template_dir {
        let loaded = registry
            .add_template_dir(dir)
            .with_context(|| format!("failed to load templates from {}", dir.display()))?;
        tracing::info!(dir = %dir.display(), loaded, "template overrides loaded");
    }
    let renderer = Renderer::from_registry(&registry).context("failed to compile templates")?;

    let mut guides = InstallGuides::embedded();
    if let Some(dir) = &settings.guide_dir {
        let loaded = guides
            .add_dir(dir)
            .with_context(|| format!("failed to load install guides from {}", dir.display()))?;
        tracing::info!(dir = %dir.display(), loaded, "install guide overrides loaded");
    }

    Ok(Dispatcher::new(renderer, guides).with_archive_name(settings.archive_name.clone()))
}

/// Runs one command. `stdin` feeds `--request -`, results go to `stdout`.
pub fn execute(
    cli: &Cli,
    settings: &Settings,
    stdin: &mut dyn Read,
    stdout: &mut dyn Write,
) -> Result<()> {
    match &cli.command {
        Command::Modes => {
            for mode in Mode::ALL {
                writeln!(
                    stdout,
                    "{:<10} {:<10} {}",
                    mode.as_str(),
                    mode.display_name(),
                    mode.document_name()
                )?;
            }
            Ok(())
        }
        Command::Generate { input, out } => {
            let request = read_request(input, stdin)?;
            let dispatcher = build_dispatcher(settings)?;
            let download = dispatcher
                .handle(&request)
                .with_context(|| format!("cannot generate {:?} theme", request.generate_mode))?;

            let path = out.clone().unwrap_or_else(|| settings.archive_path());
            write_file(&path, download.bytes())?;
            writeln!(
                stdout,
                "wrote {} ({} bytes)",
                path.display(),
                download.content_length()
            )?;
            Ok(())
        }
        Command::Render { input, out } => {
            let request = read_request(input, stdin)?;
            let dispatcher = build_dispatcher(settings)?;
            let document = dispatcher
                .render(&request.generate_mode, &request.colors)
                .with_context(|| format!("cannot render {:?} theme", request.generate_mode))?;

            match out {
                Some(path) => write_file(path, document.as_bytes()),
                None => {
                    stdout.write_all(document.as_bytes())?;
                    Ok(())
                }
            }
        }
    }
}

fn read_request(args: &RequestArgs, stdin: &mut dyn Read) -> Result<GenerateRequest> {
    let raw = if args.request == Path::new("-") {
        let mut buf = Vec::new();
        stdin
            .read_to_end(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        fs::read(&args.request)
            .with_context(|| format!("failed to read {}", args.request.display()))?
    };
    if raw.iter().all(u8::is_ascii_whitespace) {
        bail!("request body is empty");
    }

    let mut request = GenerateRequest::from_slice(&raw).context("invalid request JSON")?;
    if let Some(mode) = &args.mode {
        request.generate_mode = mode.clone();
    }
    Ok(request)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "colorterm",
            "generate",
            "--request",
            "req.json",
            "--mode",
            "warp",
            "-o",
            "out.zip",
        ])
        .unwrap();
        match cli.command {
            Command::Generate { input, out } => {
                assert_eq!(input.request, PathBuf::from("req.json"));
                assert_eq!(input.mode.as_deref(), Some("warp"));
                assert_eq!(out, Some(PathBuf::from("out.zip")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_request_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["colorterm", "render"]).unwrap();
        match cli.command {
            Command::Render { input, out } => {
                assert_eq!(input.request, PathBuf::from("-"));
                assert!(out.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_settings() {
        let cli = Cli::try_parse_from([
            "colorterm",
            "modes",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--template-dir",
            "tpl",
        ])
        .unwrap();
        let settings = cli.settings().unwrap();
        assert_eq!(settings.log.level, "debug");
        assert_eq!(settings.log.format, LogFormat::Json);
        assert_eq!(settings.template_dir, Some(PathBuf::from("tpl")));
        assert_eq!(settings.archive_name, "colorterm.zip");
    }

    #[test]
    fn test_mode_flag_overrides_body() {
        let args = RequestArgs {
            request: PathBuf::from("-"),
            mode: Some("kitty".into()),
        };
        let mut body: &[u8] = br#"{"generateMode":"iterm","colors":{}}"#;
        let request = read_request(&args, &mut body).unwrap();
        assert_eq!(request.generate_mode, "kitty");
    }

    #[test]
    fn test_empty_body_rejected() {
        let args = RequestArgs {
            request: PathBuf::from("-"),
            mode: None,
        };
        let mut body: &[u8] = b"  \n";
        let err = read_request(&args, &mut body).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
