// MIT License

/*Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.*/

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BlocksmithError, Result};
use crate::models::constants::{
    COMMENT_MARKER, KB_EXTENSION, KB_PREFIX, LR_DIVISOR, LR_OFFSET, MIN_LINE_LEN,
};

/// A regular file found in a knowledge-base directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeFile {
    pub path: PathBuf,
    pub file_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub digits: String,
    pub learning_rate: f64,
    pub destination: PathBuf,
}

impl KnowledgeFile {
    /// Lists the regular files of `dir`, sorted by file name.
    pub fn list(dir: &Path) -> Result<Vec<KnowledgeFile>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir).map_err(|e| BlocksmithError::io(dir, e))? {
            let entry = entry.map_err(|e| BlocksmithError::io(dir, e))?;
            let path = entry.path();

            if path.is_file() {
                files.push(KnowledgeFile {
                    file_name: entry.file_name().to_string_lossy().to_string(),
                    path,
                });
            }
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(files)
    }

    /// `None` when the name carries no digits and the file must be skipped.
    pub fn plan(&self) -> Option<RenamePlan> {
        let digits = extract_digits(&self.file_name)?;
        let learning_rate = learning_rate(&digits);
        let destination = self
            .path
            .with_file_name(destination_name(learning_rate));

        Some(RenamePlan {
            source: self.path.clone(),
            digits,
            learning_rate,
            destination,
        })
    }

    pub fn is_generated(&self) -> bool {
        self.file_name.starts_with(KB_PREFIX)
            && Path::new(&self.file_name)
                .extension()
                .map_or(false, |ext| ext == KB_EXTENSION)
    }
}

pub fn extract_digits(file_name: &str) -> Option<String> {
    let digits: String = file_name.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

pub fn learning_rate(digits: &str) -> f64 {
    // A digit-only string always parses; very long ones lose precision, not validity.
    let value: f64 = digits.parse().unwrap_or(0.0);
    value / LR_DIVISOR - LR_OFFSET
}

pub fn destination_name(learning_rate: f64) -> String {
    format!("{}{:.2}.{}", KB_PREFIX, learning_rate, KB_EXTENSION)
}

pub fn keep_line(line: &str) -> bool {
    line.chars().count() >= MIN_LINE_LEN && !line.contains(COMMENT_MARKER)
}

/// Drops near-empty and comment lines, newline-terminating the rest.
pub fn filter_content(content: &str) -> String {
    let mut filtered = String::with_capacity(content.len());
    for line in content.lines().filter(|line| keep_line(line)) {
        filtered.push_str(line);
        filtered.push('\n');
    }
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_keep_their_order() {
        assert_eq!(extract_digits("lr20.txt").as_deref(), Some("20"));
        assert_eq!(extract_digits("a1b0c5.kb").as_deref(), Some("105"));
        assert_eq!(extract_digits("nodigits.txt"), None);
    }

    #[test]
    fn learning_rate_from_digits() {
        assert!((learning_rate("20") - 0.95).abs() < 1e-9);
        assert!((learning_rate("1") - 0.0).abs() < 1e-9);
        assert!((learning_rate("007") - 0.30).abs() < 1e-9);
    }

    #[test]
    fn destination_has_two_decimals() {
        assert_eq!(destination_name(learning_rate("20")), "lr_0.95.kb");
        assert_eq!(destination_name(learning_rate("1")), "lr_0.00.kb");
        assert_eq!(destination_name(learning_rate("0")), "lr_-0.05.kb");
        assert_eq!(destination_name(learning_rate("41")), "lr_2.00.kb");
    }

    #[test]
    fn filters_short_and_comment_lines() {
        let content = "a\n;comment\n\nreal line\nb\n";
        assert_eq!(filter_content(content), "real line\n");
    }

    #[test]
    fn comment_marker_anywhere_drops_line() {
        let content = "(pred x) ; trailing\n(pred y)\r\n";
        assert_eq!(filter_content(content), "(pred y)\n");
    }

    #[test]
    fn last_line_without_newline_gets_terminated() {
        assert_eq!(filter_content("(first)\r\n(last)"), "(first)\n(last)\n");
        assert_eq!(filter_content("(only)"), "(only)\n");
        assert_eq!(filter_content(""), "");
    }

    #[test]
    fn plan_skips_names_without_digits() {
        let file = KnowledgeFile {
            path: PathBuf::from("kb/nodigits.txt"),
            file_name: "nodigits.txt".to_string(),
        };
        assert!(file.plan().is_none());
    }

    #[test]
    fn plan_targets_same_directory() {
        let file = KnowledgeFile {
            path: PathBuf::from("kb/lr20.txt"),
            file_name: "lr20.txt".to_string(),
        };
        let plan = file.plan().unwrap();
        assert_eq!(plan.digits, "20");
        assert_eq!(plan.destination, PathBuf::from("kb/lr_0.95.kb"));
    }

    #[test]
    fn generated_names_detected() {
        let generated = KnowledgeFile {
            path: PathBuf::from("lr_0.95.kb"),
            file_name: "lr_0.95.kb".to_string(),
        };
        let original = KnowledgeFile {
            path: PathBuf::from("lr20.txt"),
            file_name: "lr20.txt".to_string(),
        };
        assert!(generated.is_generated());
        assert!(!original.is_generated());
    }
}
