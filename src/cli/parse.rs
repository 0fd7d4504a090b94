use super::CliFlags;
use crate::error::{Error, Result};
use crate::pass::{Slot, parse_length};
use crate::rng::SourceKind;

/// Parse process arguments; `args[0]` is the program name.
pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-N" | "--numeric" => flags.numeric = true,
            "--no-numbers" => flags.no_numbers = true,
            "--no-symbols" => flags.no_symbols = true,
            "--secure" => flags.rng = Some(SourceKind::Secure),
            "--fast" => flags.rng = Some(SourceKind::Fast),
            "-l" | "--length" => {
                let value = iter.next().ok_or_else(|| Error::MissingValue(arg.clone()))?;
                flags.length = Some(parse_length(value)?);
            }
            "-b" | "--board" => {
                let value = iter.next().ok_or_else(|| Error::MissingValue(arg.clone()))?;
                let slot = Slot::from_number(value)
                    .ok_or_else(|| Error::UnknownArg(format!("{arg} {value} (expected 1 or 2)")))?;
                flags.board = Some(slot);
            }
            other => return Err(Error::UnknownArg(other.to_string())),
        }
    }

    Ok(flags)
}
