use crate::config::Config;
use crate::errors::{CalcError, SessionError};
use crate::evaluator::Operation;
use crate::number::Number;
use crate::reader::{prompt_line, read_number};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const BANNER: &str = "\nInteractive Calculator\nAvailable operations:\n+  -  *  /\n\nPress q to quit";
pub const OPERATION_PROMPT: &str = "\nEnter operation: ";
pub const FIRST_NUMBER_PROMPT: &str = "Enter first number: ";
pub const SECOND_NUMBER_PROMPT: &str = "Enter second number: ";
pub const INVALID_OPERATION_MSG: &str =
    "ERROR: Invalid operation. Please choose +, -, *, /, or q.";
pub const DIVIDE_BY_ZERO_MSG: &str = "ERROR: Cannot divide by zero.";

const QUIT: &str = "q";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
    Running,
    Terminated,
}

/// One calculator session over a line-oriented input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    state: State,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Session {
            input,
            output,
            config,
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until the user quits or the input is exhausted. Only I/O
    /// failures are returned; calculator errors are reported inline.
    pub fn run(&mut self) -> Result<(), SessionError> {
        if self.config.show_banner {
            writeln!(self.output, "{BANNER}")?;
        }

        while self.state == State::Running {
            match self.step() {
                Ok(()) => (),
                Err(SessionError::EndOfInput) => {
                    debug!("end of input");
                    self.state = State::Terminated;
                }
                Err(err) => return Err(err),
            }
        }
        info!("session terminated");
        Ok(())
    }

    fn step(&mut self) -> Result<(), SessionError> {
        let symbol = prompt_line(&mut self.input, &mut self.output, OPERATION_PROMPT)?;

        if symbol.eq_ignore_ascii_case(QUIT) {
            self.state = State::Terminated;
            return Ok(());
        }

        let Ok(operation) = symbol.parse::<Operation>() else {
            debug!(symbol = %symbol, "rejected operation");
            writeln!(self.output, "{INVALID_OPERATION_MSG}")?;
            return Ok(());
        };

        let a = read_number(&mut self.input, &mut self.output, FIRST_NUMBER_PROMPT)?;
        let b = read_number(&mut self.input, &mut self.output, SECOND_NUMBER_PROMPT)?;
        debug!(%a, %operation, %b, "evaluating");

        self.report(operation.apply(a, b))
    }

    fn report(&mut self, res: Result<Number, CalcError>) -> Result<(), SessionError> {
        match res {
            Ok(n) => writeln!(self.output, "{n}")?,
            Err(CalcError::DivisionByZero) => {
                debug!("division by zero");
                writeln!(self.output, "{DIVIDE_BY_ZERO_MSG}")?
            }
            Err(err) => {
                debug!(error = ?err, "evaluation failed");
                writeln!(self.output, "ERROR: {err}")?
            }
        }
        Ok(())
    }
}

/// Runs a session on the process's standard streams.
pub fn run_stdio(config: Config) -> Result<(), SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()
}
