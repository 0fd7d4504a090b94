use crate::pass::Slot;
use crate::rng::SourceKind;

#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub saved: bool,
    pub save: bool,
    pub numeric: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub length: Option<usize>,
    pub board: Option<Slot>,
    pub rng: Option<SourceKind>,
}
