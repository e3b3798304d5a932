use std::env;

use anyhow::{anyhow, Context, Result};
use replybase::composer::Tone;
use replybase::config::{config_file_path, load_or_default, save};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let mut changed = false;

    if let Some(tone) = args.tone.as_deref() {
        let resolved = Tone::parse_or_default(tone);
        if config.default_tone != resolved {
            config.default_tone = resolved;
            changed = true;
        }
    }
    if let Some(enabled) = args.clipboard {
        if config.clipboard.enabled != enabled {
            config.clipboard.enabled = enabled;
            changed = true;
        }
    }
    if let Some(notice_ms) = args.notice_ms {
        if config.shell.copied_notice_ms != notice_ms {
            config.shell.copied_notice_ms = notice_ms;
            changed = true;
        }
    }

    if changed {
        save(&config)?;
        println!("Shell preferences recorded at {}", config_path.display());
    } else {
        println!("Shell preferences already configured.");
    }

    Ok(())
}

struct CliArgs {
    tone: Option<String>,
    clipboard: Option<bool>,
    notice_ms: Option<u64>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut tone = None;
        let mut clipboard = None;
        let mut notice_ms = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tone" => {
                    let value = args.next().context("Expected a tone value after --tone")?;
                    tone = Some(value);
                }
                "--clipboard" => clipboard = Some(true),
                "--no-clipboard" => clipboard = Some(false),
                "--notice-ms" => {
                    let value = args
                        .next()
                        .context("Expected a duration in milliseconds after --notice-ms")?;
                    notice_ms = Some(value.parse::<u64>().with_context(|| {
                        format!("'{value}' is not a valid millisecond duration")
                    })?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            tone,
            clipboard,
            notice_ms,
        })
    }
}

fn print_usage() {
    println!("ReplyBase setup (shell preferences)");
    println!("Records form defaults and clipboard preferences in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --tone <value>       Tone preselected by the form (default: professional)");
    println!("  --clipboard          Offer the copy-to-clipboard action (default)");
    println!("  --no-clipboard       Never offer the copy-to-clipboard action");
    println!("  --notice-ms <ms>     Visibility window of the copied notice (default: 2000)");
}
