use std::io::{self, BufRead, Read, Write};
use std::thread;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use replybase::composer::{compose, ComposeRequest};
use replybase::config::load_or_default;
use replybase::shell::form::{render_tone_menu, select_tone};
use replybase::shell::ComposeSession;

fn main() -> Result<()> {
    init_tracing();
    let args = CliArgs::parse()?;
    if args.json {
        run_pipe_mode()
    } else {
        run_interactive()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

struct CliArgs {
    json: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut json = false;
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--json" => json = true,
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
        Ok(Self { json })
    }
}

fn print_usage() {
    println!("ReplyBase customer service response composer");
    println!("Collects the response form interactively and prints the generated reply.");
    println!("Usage: cargo run --bin compose -- [options]");
    println!("Options:");
    println!("  --json   Read one request object from stdin and print the reply (no prompts)");
}

/// Pipe mode: one camelCase request object on stdin, the generated reply on
/// stdout. Composition itself cannot fail; only malformed input errors out.
fn run_pipe_mode() -> Result<()> {
    let mut raw = String::new();
    io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read request from stdin")?;
    let request: ComposeRequest =
        serde_json::from_str(&raw).context("Request is not a valid JSON object")?;
    println!("{}", compose(&request));
    Ok(())
}

fn run_interactive() -> Result<()> {
    let config = load_or_default()?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("ReplyBase - customer service response composer");
    loop {
        let mut session = ComposeSession::new(config.clone());

        let company = prompt(&mut lines, "Company name: ")?;
        session.set_company_name(company);
        let product = prompt(&mut lines, "Product/service description: ")?;
        session.set_product_service(product);

        print!("{}", render_tone_menu());
        let tone_input = prompt(
            &mut lines,
            &format!("Tone [{}]: ", session.form().tone.as_str()),
        )?;
        let tone = select_tone(&tone_input, session.form().tone);
        session.set_tone(tone);

        let message = prompt(&mut lines, "Customer message: ")?;
        session.set_customer_message(message);

        let response = session.generate();
        println!("\n{response}\n");

        if session.clipboard_enabled() {
            let answer = prompt(&mut lines, "Copy to clipboard? [y/N]: ")?;
            if answer.trim().eq_ignore_ascii_case("y") {
                if let Some(notice) = session.copy(&response) {
                    println!("Copied!");
                    // Keep the acknowledgment on screen for its configured
                    // window before the next prompt.
                    thread::sleep(notice.remaining(Utc::now()));
                }
            }
        }

        let again = prompt(&mut lines, "Compose another response? [Y/n]: ")?;
        if again.trim().eq_ignore_ascii_case("n") {
            break;
        }
    }
    Ok(())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("Failed to flush prompt")?;
    match lines.next() {
        Some(line) => line.context("Failed to read form input"),
        None => Ok(String::new()),
    }
}
