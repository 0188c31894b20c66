// This example is a line-based calculator prompt. Each line is evaluated with `parcalc::calculate`
// and the result printed; typing `exit` (or sending end-of-input) quits.
//
// Run it with:
//
//     cargo run --example repl --features examples
//     cargo run --example repl --features examples -- --canonical --tree -vv
//     cargo run --example repl --features examples -- --expr "3(4+2)"

use std::error::Error;
use std::io::{stdin, stdout, Write};

use clap::Parser;
use termion::input::TermRead;
use termion::{color, style};
use tracing::level_filters::LevelFilter;
use tracing::warn;

use parcalc::{calculate, canonicalize, parse_expression, CalcError, EvaluationSettings, MathsError, OverflowPolicy};

/// The line which ends the session.
const EXIT_COMMAND: &str = "exit";

#[derive(Parser)]
#[command(name = "parcalc")]
#[command(about = "Evaluate arithmetic expressions, one per line")]
#[command(version)]
struct Cli {
    /// Evaluate this expression, print the result and exit
    #[arg(short, long)]
    expr: Option<String>,

    /// Prompt shown before each line of input
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Also print the canonical form of each expression
    #[arg(long)]
    canonical: bool,

    /// Also print the node tree each expression parses into
    #[arg(long)]
    tree: bool,

    /// Log more detail to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    // Overflow is reported rather than shown as "inf", so the user knows why there's no number
    let settings = EvaluationSettings { overflow: OverflowPolicy::Error };

    let stdin = stdin();
    let mut stdin = stdin.lock();
    let mut stdout = stdout();

    if let Some(expr) = &cli.expr {
        evaluate_line(&cli, &settings, expr, &mut stdout)?;
        return Ok(());
    }

    loop {
        write!(stdout, "{}", cli.prompt)?;
        stdout.flush()?;

        // `None` means end of input
        let line = match stdin.read_line()? {
            Some(line) => line,
            None => break,
        };

        let line = line.trim();
        if line == EXIT_COMMAND {
            break;
        }

        evaluate_line(&cli, &settings, line, &mut stdout)?;
    }

    Ok(())
}

fn evaluate_line(cli: &Cli, settings: &EvaluationSettings, line: &str, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    if cli.canonical {
        if let Some(canonical) = canonicalize(line) {
            writeln!(out, "   {}", canonical)?;
        }
    }
    if cli.tree {
        if let Ok(tree) = parse_expression(line) {
            write!(out, "{}", tree)?;
        }
    }

    match calculate(line, settings) {
        Ok(result) => writeln!(out, "{}", result_line(result))?,

        Err(CalcError::Maths(MathsError::Overflow)) => writeln!(
            out, "{}=> Result too large{}", color::Fg(color::Yellow), style::Reset,
        )?,

        Err(err) => {
            if err != CalcError::InvalidSyntax {
                warn!(input = line, error = %err, "expression passed validation but failed later");
            }
            writeln!(out, "{}=> Error{}", color::Fg(color::Red), style::Reset)?
        }
    }

    out.flush()?;
    Ok(())
}

/// Formats a successful result. Whole numbers keep their `.0`, so `18` prints as `=> 18.0`.
fn result_line(result: f64) -> String {
    format!("=> {:?}", result)
}
