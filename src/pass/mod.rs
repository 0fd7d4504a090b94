//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
mod pair;
mod request;

pub use pair::{InputCollector, PasswordPair, Presenter, Slot, copy_password, create_pair};
pub use request::{GenerationRequest, MAX_LENGTH, Mode, check_length, parse_length};
