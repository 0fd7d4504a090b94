//! Password generation settings.

mod file;

use std::path::Path;

use crate::error::Result;
use crate::pass::{GenerationRequest, InputCollector, check_length};
use crate::rng::SourceKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub numeric_only: bool,
    pub allow_numbers: bool,
    pub allow_symbols: bool,
    pub rng: SourceKind,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.pass_length,
            self.numeric_only,
            self.allow_numbers,
            self.allow_symbols,
        )
    }
}

impl InputCollector for Settings {
    fn collect(&mut self) -> Result<GenerationRequest> {
        check_length(self.pass_length)?;
        Ok(self.request())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            numeric_only: false,
            allow_numbers: true,
            allow_symbols: true,
            rng: SourceKind::Fast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::pass::MAX_LENGTH;

    #[test]
    fn collect_rejects_oversized_length() {
        let mut settings = Settings {
            pass_length: MAX_LENGTH + 1,
            ..Default::default()
        };
        assert!(matches!(settings.collect(), Err(Error::Validation(_))));

        settings.pass_length = MAX_LENGTH;
        assert_eq!(settings.collect().unwrap().length, MAX_LENGTH);
    }
}
