//! Conversion profiles.
//!
//! The two report variants as data: each profile bundles its stage
//! configuration with the conventional file names it operates on.

use std::path::{Path, PathBuf};

use super::ConvertOptions;

/// A named conversion variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionProfile {
    /// Title-plus-body conversion of the short report
    #[default]
    Basic,
    /// Full-document conversion with section heading detection
    Full,
}

impl ConversionProfile {
    /// Profile name as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ConversionProfile::Basic => "basic",
            ConversionProfile::Full => "full",
        }
    }

    /// The stage configuration of this profile.
    pub fn options(&self) -> ConvertOptions {
        match self {
            ConversionProfile::Basic => ConvertOptions::basic(),
            ConversionProfile::Full => ConvertOptions::full(),
        }
    }

    /// Conventional input file name of this profile.
    pub fn input_name(&self) -> &'static str {
        match self {
            ConversionProfile::Basic => "report_a4.html",
            ConversionProfile::Full => "report_full_a4.html",
        }
    }

    /// Conventional input path under a documents directory.
    pub fn input_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.input_name())
    }
}

/// Derive the output path from an input path: same directory, same stem,
/// `.pdf` extension.
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_options() {
        assert!(ConversionProfile::Basic
            .options()
            .classify
            .heading_rules
            .is_none());
        assert!(ConversionProfile::Full
            .options()
            .classify
            .heading_rules
            .is_some());
    }

    #[test]
    fn test_conventional_paths() {
        let input = ConversionProfile::Full.input_path(Path::new("docs"));
        assert_eq!(input, PathBuf::from("docs/report_full_a4.html"));
        assert_eq!(
            derive_output_path(&input),
            PathBuf::from("docs/report_full_a4.pdf")
        );
    }

    #[test]
    fn test_derive_output_path_keeps_directory() {
        let out = derive_output_path(Path::new("/tmp/x/page.html"));
        assert_eq!(out, PathBuf::from("/tmp/x/page.pdf"));
    }
}
