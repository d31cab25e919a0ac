//! Lilak dictionary generator CLI
//!
//! Runs the batch pipeline: tagged lexicon in, Hunspell dictionary and
//! affix files out. Without a mode flag it performs the full production
//! run over the configured default paths; with one it only converts the
//! given lexicon into a dictionary file.

mod config;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lilak_core::{Generation, Generator};

use config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "lilak", version, about = "Persian spell-checking dictionary generator")]
struct Cli {
    /// Rule generation; selects a reduced lexicon-to-dictionary run
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Input lexicon file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output dictionary file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Rule generations selectable from the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Mode {
    /// Current rules: separator-stripped tooth count, threshold 5
    Standard,
    /// Historical rules: whole-word tooth count, threshold 10
    Legacy,
    /// Non-joined variant spellings disabled
    Strict,
}

impl From<Mode> for Generation {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Standard => Generation::Standard,
            Mode::Legacy => Generation::Legacy,
            Mode::Strict => Generation::Strict,
        }
    }
}

fn parse_generation(name: &str) -> Result<Generation> {
    match name {
        "standard" => Ok(Generation::Standard),
        "legacy" => Ok(Generation::Legacy),
        "strict" => Ok(Generation::Strict),
        other => anyhow::bail!("unknown rule generation in config: {other}"),
    }
}

fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    log::info!("starting dictionary generation");
    run(cli)?;
    log::info!("done");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;

    let lexicon = cli.input.unwrap_or_else(|| config.paths.lexicon.clone());

    match cli.mode {
        Some(mode) => {
            // reduced run: lexicon in, dictionary out
            let dictionary = cli
                .output
                .unwrap_or_else(|| dictionary_path(&config, "dic"));

            if let Some(parent) = dictionary.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }

            let mut generator = Generator::new(mode.into());
            generator.load_lexicon(&lexicon)?;
            generator.generate();
            generator.write_dictionary(&dictionary)?;
        }
        None => {
            let generation = parse_generation(&config.dictionary.generation)?;
            let dictionary = cli
                .output
                .unwrap_or_else(|| dictionary_path(&config, "dic"));
            let affix = dictionary_path(&config, "aff");
            let delta = dictionary_path(&config, "dic_delta");

            fs::create_dir_all(&config.paths.build_dir).with_context(|| {
                format!(
                    "Failed to create build directory: {}",
                    config.paths.build_dir.display()
                )
            })?;

            let mut generator = Generator::new(generation);
            generator.load_lexicon(&lexicon)?;
            generator.generate();
            generator.merge_user_words(&config.paths.user_words)?;

            let date = chrono::Local::now().format("%Y-%m-%d").to_string();
            generator.write_affix(
                &config.paths.affix_template,
                &affix,
                &config.dictionary.version,
                &date,
            )?;
            generator.write_delta(&config.paths.delta_words, &delta)?;
            generator.write_dictionary(&dictionary)?;
        }
    }

    Ok(())
}

fn dictionary_path(config: &CliConfig, extension: &str) -> PathBuf {
    config
        .paths
        .build_dir
        .join(format!("{}.{extension}", config.dictionary.locale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_maps_to_generation() {
        assert_eq!(Generation::from(Mode::Standard), Generation::Standard);
        assert_eq!(Generation::from(Mode::Legacy), Generation::Legacy);
        assert_eq!(Generation::from(Mode::Strict), Generation::Strict);
    }

    #[test]
    fn test_parse_generation_rejects_unknown() {
        assert!(parse_generation("standard").is_ok());
        assert!(parse_generation("modern").is_err());
    }

    #[test]
    fn test_default_artifact_paths() {
        let config = CliConfig::default();
        assert_eq!(
            dictionary_path(&config, "dic"),
            PathBuf::from("build/fa_IR.dic")
        );
        assert_eq!(
            dictionary_path(&config, "aff"),
            PathBuf::from("build/fa_IR.aff")
        );
    }

    #[test]
    fn test_cli_parses_reduced_run_flags() {
        let cli = Cli::parse_from(["lilak", "-m", "legacy", "-i", "lex", "-o", "out.dic"]);
        assert!(matches!(cli.mode, Some(Mode::Legacy)));
        assert_eq!(cli.input.as_deref(), Some(std::path::Path::new("lex")));
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("out.dic")));
    }
}
