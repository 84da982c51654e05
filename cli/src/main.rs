mod session;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use session::{Mode, Outcome, Session};
use std::io::BufRead;
use std::io::BufReader;
use uexpr::render_error;

/// uexpr - Evaluate arithmetic and boolean expressions
#[derive(Parser, Debug)]
#[command(name = "uexpr")]
#[command(about = "Evaluate calculator or boolean expressions", long_about = None)]
struct Args {
    /// Evaluate boolean expressions (TRUE, FALSE, !, &&, ||) instead of arithmetic
    #[arg(long = "bool")]
    boolean: bool,

    /// Expression to evaluate (if not provided, reads lines from stdin)
    expression: Option<String>,
}

/// Returns false when the session should end.
fn interpret_input(session: &mut Session, input: &str) -> bool {
    match session.handle_line(input) {
        Outcome::Skip => {}
        Outcome::Exit => return false,
        Outcome::Output(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Outcome::Error(diagnostic) => render_error(input, &diagnostic),
    }
    true
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use UEXPR_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("UEXPR_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mode = if args.boolean {
        Mode::Boolean
    } else {
        Mode::Calculator
    };
    let mut session = Session::new(mode);

    // A direct expression argument is evaluated as-is, never as a command.
    if let Some(expr) = args.expression {
        match session.evaluate(&expr) {
            Outcome::Output(lines) => lines.iter().for_each(|line| println!("{}", line)),
            Outcome::Error(diagnostic) => {
                render_error(&expr, &diagnostic);
                std::process::exit(1);
            }
            Outcome::Skip | Outcome::Exit => {}
        }
        return Ok(());
    }

    if atty::is(atty::Stream::Stdin) {
        // Interactive REPL mode
        let mut line_editor = Reedline::create();
        let prompt = DefaultPrompt::new(DefaultPromptSegment::Empty, DefaultPromptSegment::Empty);

        println!("Enter expressions (e.g., x = 5, 2 * x + sqrt(9), pi^2).");
        println!("Commands: vars, clear, exit (Ctrl+D or Ctrl+C also exit)");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    if !interpret_input(&mut session, &buffer) {
                        return Ok(());
                    }
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    }

    // Pipe/stdin mode
    let stdin = std::io::stdin();
    let reader = BufReader::new(stdin.lock());

    for line in reader.lines() {
        let line = line.into_diagnostic()?;
        if !interpret_input(&mut session, &line) {
            break;
        }
    }

    Ok(())
}
