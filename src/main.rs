//! Command-line front end for the reservation request parser.

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use bookaboo::config::{LogFormat, OutputFormat, Overrides, parse_reference_instant};
use bookaboo::{Config, ParsedRequest, parse_reservation_request};

#[derive(Parser, Debug)]
#[command(name = "bookaboo", version, about = "Parse free-form restaurant reservation requests")]
struct Cli {
    /// Log format on stderr: pretty or json
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn request_args(&self) -> &RequestArgs {
        match &self.command {
            Command::Parse(args) | Command::Check(args) => args,
        }
    }

    /// Settings given as flags. These take precedence over the environment.
    fn overrides(&self) -> Overrides {
        let args = self.request_args();
        Overrides {
            now: args.now,
            output: args.output,
            log_format: self.log_format,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a request and print the extracted fields
    Parse(RequestArgs),

    /// Parse a request and fail if the restaurant or date is missing
    Check(RequestArgs),
}

#[derive(Args, Debug)]
struct RequestArgs {
    /// Free-form request, e.g. "book 2 tonight 8pm at Prozdor"
    #[arg(required = true)]
    text: Vec<String>,

    /// Reference instant for relative dates (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = parse_reference_instant)]
    now: Option<NaiveDateTime>,

    /// Output format: text or json
    #[arg(short, long)]
    output: Option<OutputFormat>,
}

/// JSON shape printed by `check`.
#[derive(Serialize)]
struct CheckReport<'a> {
    ok: bool,
    error: Option<String>,
    request: &'a ParsedRequest,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env_with(&cli.overrides())?;
    init_tracing(config.log_format);

    let text = cli.request_args().text.join(" ");
    let request = parse_reservation_request(&text, config.now);

    match cli.command {
        Command::Parse(_) => print_request(&request, config.output)?,
        Command::Check(_) => {
            let result = request.validate();
            match config.output {
                OutputFormat::Json => {
                    let report = CheckReport {
                        ok: result.is_ok(),
                        error: result.as_ref().err().map(ToString::to_string),
                        request: &request,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Text => print_request(&request, config.output)?,
            }
            result?;
        }
    }

    Ok(())
}

fn print_request(request: &ParsedRequest, output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(request)?),
        OutputFormat::Text => {
            let restaurant = if request.restaurant_name().is_empty() {
                "(not found)".to_string()
            } else {
                request.restaurant_name().to_string()
            };
            let date = if request.date().is_some() {
                format!("{} ({})", request.display_date(), request.date_yyyymmdd())
            } else {
                "(not found)".to_string()
            };
            println!("Restaurant:  {}", restaurant);
            println!("Date:        {}", date);
            println!("Time:        {}", request.time_str());
            println!("Party size:  {}", request.party_size());
        }
    }
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bookaboo=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
