// MIT License

/*Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.*/

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BlocksmithError, Result};
use crate::models::knowledge::{filter_content, KnowledgeFile, RenamePlan};
use crate::utils::logging::{log_detail, log_warning};

#[derive(Clone, Debug, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
    pub skip_generated: bool,
}

#[derive(Clone, Debug, Default)]
pub struct RenameReport {
    pub written: Vec<RenamePlan>,
    pub skipped: Vec<String>,
    pub overwritten: Vec<PathBuf>,
}

/// Copies the filtered content of one source file into its destination.
pub fn apply_plan(plan: &RenamePlan) -> Result<()> {
    let content =
        fs::read_to_string(&plan.source).map_err(|e| BlocksmithError::io(&plan.source, e))?;
    fs::write(&plan.destination, filter_content(&content))
        .map_err(|e| BlocksmithError::io(&plan.destination, e))
}

/// Scans `dir` once and writes an `lr_<value>.kb` file per source whose name has digits.
pub fn rename_knowledge_bases(dir: &Path, options: &RenameOptions) -> Result<RenameReport> {
    let files = KnowledgeFile::list(dir)?;
    let mut report = RenameReport::default();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    for file in files {
        if options.skip_generated && file.is_generated() {
            report.skipped.push(file.file_name);
            continue;
        }

        let plan = match file.plan() {
            Some(plan) => plan,
            None => {
                report.skipped.push(file.file_name);
                continue;
            }
        };

        if let Some(previous) = claimed.insert(plan.destination.clone(), plan.source.clone()) {
            log_warning(&format!(
                "{} overwrites output of {}",
                plan.source.display(),
                previous.display()
            ));
            report.overwritten.push(plan.destination.clone());
        }

        log_detail(&format!(
            "{} -> {} (lr {:.2})",
            file.file_name,
            plan.destination
                .file_name()
                .unwrap_or_default()
                .to_string_lossy(),
            plan.learning_rate
        ));

        if !options.dry_run {
            apply_plan(&plan)?;
        }
        report.written.push(plan);
    }

    Ok(report)
}
