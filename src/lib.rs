pub mod config;
pub mod errors;
pub mod evaluator;
pub mod number;
pub mod reader;
pub mod session;

pub use config::Config;
pub use errors::{CalcError, SessionError};
pub use evaluator::{calculate, Operation};
pub use number::Number;
pub use reader::{parse_number, read_number};
pub use session::{run_stdio, Session, State};
