//! Shared helpers for font-dependent tests.

#![allow(dead_code, unused_macros)]

use std::path::PathBuf;
use tempfile::TempDir;

const CANDIDATE_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A TrueType font to render with: `FA2PNG_TEST_FONT` if set, otherwise the
/// first common system font found. `None` means font tests should skip.
pub fn test_font() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("FA2PNG_TEST_FONT") {
        return Some(PathBuf::from(p));
    }
    CANDIDATE_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Skip the current test (early return) when no font is available.
macro_rules! require_font {
    () => {
        match common::test_font() {
            Some(p) => p,
            None => {
                eprintln!("No test font found; set FA2PNG_TEST_FONT to run. Skipping.");
                return;
            }
        }
    };
}

/// Fresh scratch directory, removed when the returned guard drops.
pub fn scratch_dir(name: &str) -> TempDir {
    tempfile::Builder::new()
        .prefix(&format!("fa2png-{}-", name))
        .tempdir()
        .expect("create scratch dir")
}
