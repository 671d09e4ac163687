use super::*;

/// Prints the token stream of a source file, one token per line.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Arguments {
  /// Source file to scan; standard input when omitted or `-`
  input: Option<PathBuf>,
  /// Stop at the first lexical error
  #[arg(long)]
  fail_fast: bool,
  /// Log scanner decisions to standard error
  #[arg(short, long)]
  verbose: bool,
}

impl Arguments {
  /// Returns whether the input scanned without lexical errors.
  pub fn run(self) -> Result<bool, Error> {
    self.init_logging()?;

    let src = self.source()?;

    debug!(
      input = ?self.input,
      chars = src.chars().count(),
      "scanning"
    );

    let mut stdout = io::stdout().lock();
    let mut clean = true;

    for result in Lexer::new(&src) {
      match result {
        Ok(token) => writeln!(stdout, "{token}").map_err(Error::Write)?,
        Err(error) => {
          clean = false;

          eprintln!("error: {error}");

          if self.fail_fast {
            break;
          }
        }
      }
    }

    stdout.flush().map_err(Error::Write)?;

    Ok(clean)
  }

  fn init_logging(&self) -> Result<(), Error> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      EnvFilter::new(if self.verbose { "debug" } else { "warn" })
    });

    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(io::stderr)
      .with_target(false)
      .try_init()
      .map_err(|error| Error::Logging(error.to_string()))
  }

  fn source(&self) -> Result<String, Error> {
    match &self.input {
      Some(path) if path != Path::new("-") => {
        fs::read_to_string(path).map_err(|source| Error::Read {
          path: path.clone(),
          source,
        })
      }
      _ => {
        let mut src = String::new();

        io::stdin()
          .read_to_string(&mut src)
          .map_err(Error::Stdin)?;

        Ok(src)
      }
    }
  }
}
