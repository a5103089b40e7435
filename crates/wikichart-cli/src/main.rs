use std::io::Read;

use wikichart::{ChartData, LocaleContext, assemble, decode_chart_attribute, resolve_formatters};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Chart(wikichart::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<wikichart::Error> for CliError {
    fn from(value: wikichart::Error) -> Self {
        Self::Chart(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    /// Emit the assembled rendering spec as JSON.
    #[default]
    Assemble,
    /// Emit each axis's data values through its resolved formatter.
    Labels,
}

#[derive(Debug)]
struct CliOptions {
    command: Command,
    input: String,
    language: String,
    width: Option<f64>,
    no_data: Option<String>,
}

const USAGE: &str = "\
Usage: wikichart-cli [COMMAND] [OPTIONS] <payload.json | ->

Commands:
  assemble   Print the assembled rendering spec as JSON (default)
  labels     Print each axis's data values through its resolved formatter

Options:
  --lang <tag>       Language tag for formatting and direction (default: en)
  --width <px>       Drawing surface width used for title wrapping
  --no-data <text>   Localized placeholder for missing data points
  -h, --help         Show this help
";

fn parse_args(args: &[String]) -> Result<CliOptions, CliError> {
    let mut command = None;
    let mut input = None;
    let mut language = "en".to_string();
    let mut width = None;
    let mut no_data = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(CliError::Usage(USAGE)),
            "--lang" => {
                language = iter
                    .next()
                    .ok_or(CliError::Usage("--lang requires a language tag"))?
                    .clone();
            }
            "--width" => {
                let raw = iter
                    .next()
                    .ok_or(CliError::Usage("--width requires a pixel value"))?;
                width = Some(
                    raw.parse::<f64>()
                        .map_err(|_| CliError::Usage("--width requires a pixel value"))?,
                );
            }
            "--no-data" => {
                no_data = Some(
                    iter.next()
                        .ok_or(CliError::Usage("--no-data requires a message"))?
                        .clone(),
                );
            }
            "assemble" if command.is_none() && input.is_none() => {
                command = Some(Command::Assemble);
            }
            "labels" if command.is_none() && input.is_none() => {
                command = Some(Command::Labels);
            }
            other if !other.starts_with("--") || other == "-" => {
                if input.replace(other.to_string()).is_some() {
                    return Err(CliError::Usage("more than one input file given"));
                }
            }
            _ => return Err(CliError::Usage("unrecognized option")),
        }
    }

    Ok(CliOptions {
        command: command.unwrap_or_default(),
        input: input.ok_or(CliError::Usage("no input file given (use - for stdin)"))?,
        language,
        width,
        no_data,
    })
}

fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn run(options: &CliOptions) -> Result<(), CliError> {
    let raw = read_input(&options.input)?;
    let value = decode_chart_attribute(&raw)?;
    let data = ChartData::from_value(value)?;

    let mut ctx = LocaleContext::new(&options.language);
    if let Some(text) = &options.no_data {
        ctx = ctx.with_no_data_text(text.clone());
    }

    match options.command {
        Command::Assemble => {
            let spec = assemble(data.spec, &data.plan, &ctx, options.width);
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
        Command::Labels => {
            let (x_formatter, y_formatter) = resolve_formatters(&data.spec, &data.plan, &ctx);
            let x_data = data
                .spec
                .x_axis
                .as_ref()
                .and_then(|axis| axis.data.as_deref())
                .unwrap_or(&[]);
            for value in x_data {
                println!("x\t{value}\t{}", x_formatter.format(value));
            }
            let y_data = data
                .spec
                .y_axis
                .as_ref()
                .and_then(|axis| axis.data.as_deref())
                .or_else(|| {
                    data.spec
                        .series
                        .as_ref()
                        .and_then(|series| series.first())
                        .and_then(|series| series.data.as_deref())
                })
                .unwrap_or(&[]);
            for value in y_data {
                println!("y\t{value}\t{}", y_formatter.format(value));
            }
        }
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args).and_then(|options| run(&options)) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
