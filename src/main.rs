use clap::Parser;
use forthwith::{
    ForthInterpreter, Interpreter, WordManagement,
    runtime::{
        error::{self, ScriptError},
        interpreter::forth_interpreter::DEFAULT_MAX_DEPTH,
    },
};
use std::{
    fs::read_to_string,
    io::{Stdout, Write, stdin, stdout},
    path::{Path, PathBuf},
};
use tracing::{Level, debug};

/// An interactive Forth-like interpreter that runs every word as soon as it is read.
#[derive(Parser, Debug)]
#[command(name = "forthwith", version, about)]
struct Args {
    /// Script to run.  Starts the interactive prompt when left out.
    script: Option<PathBuf>,

    /// Source file evaluated before the script or the prompt.
    #[arg(long, env = "FORTHWITH_PRELUDE")]
    prelude: Option<PathBuf>,

    /// How deeply word and loop bodies may nest.
    #[arg(long, env = "FORTHWITH_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print every known word with its stack signature and description, then exit.
    #[arg(long)]
    list_words: bool,

    /// Most detailed diagnostics written to stderr.
    #[arg(long, env = "FORTHWITH_LOG", default_value_t = Level::WARN)]
    log_level: Level,
}

/// Read a source file and run it as top level input.
fn process_source_file(
    interpreter: &mut ForthInterpreter<Stdout>,
    path: &Path,
) -> error::Result<()> {
    debug!(path = %path.display(), "Processing source file.");

    let source = read_to_string(path).map_err(|error| {
        ScriptError::Io(std::io::Error::new(
            error.kind(),
            format!("{}: {}", path.display(), error),
        ))
    })?;

    interpreter.evaluate_named(&path.display().to_string(), &source)?;
    interpreter.output().flush()?;

    Ok(())
}

/// Prompt on stdout and read the next line from stdin.  None at the end of input.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    let _ = stdout().flush();

    let mut line = String::new();

    match stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(error) => {
            debug!(%error, "Failed to read from stdin.");
            None
        }
    }
}

fn main() -> error::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    // Create the core instance of the interpreter with nothing to read yet.
    let mut interpreter = ForthInterpreter::new(stdout(), "");

    interpreter.set_max_depth(args.max_depth);

    if let Some(prelude) = &args.prelude {
        process_source_file(&mut interpreter, prelude)?;
    }

    if args.list_words {
        let listing = interpreter.dictionary().to_string();

        write!(interpreter.output(), "{}", listing)?;
        interpreter.output().flush()?;

        return Ok(());
    }

    if !interpreter.is_halted() {
        match &args.script {
            Some(script) => process_source_file(&mut interpreter, script)?,

            None => {
                interpreter.set_line_feed(read_line);
                interpreter.run()?;
            }
        }
    }

    interpreter.output().flush()?;
    Ok(())
}
