mod env;
mod parsed_args;
mod parser;


pub use env::{BASE_ENV, INTERVAL_ENV};
pub use parsed_args::{ParsedArgs, StartPosition};
pub use parser::parse_args;
