// MIT License

/*Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.*/

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{BlocksmithError, Result};
use crate::models::constants::{
    DEFAULT_NUM_BLOCKS, DEFAULT_NUM_GOAL_STACKS, DEFAULT_NUM_START_STACKS,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub num_blocks: usize,
    pub num_start_stacks: usize,
    pub num_goal_stacks: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_blocks: DEFAULT_NUM_BLOCKS,
            num_start_stacks: DEFAULT_NUM_START_STACKS,
            num_goal_stacks: DEFAULT_NUM_GOAL_STACKS,
        }
    }
}

/// Raw command-line values layered over a config file.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides<'a> {
    pub config_file: Option<&'a Path>,
    pub num_blocks: Option<&'a str>,
    pub num_start_stacks: Option<&'a str>,
    pub num_goal_stacks: Option<&'a str>,
}

pub fn parse_flag<T: FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>> {
    match raw {
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            BlocksmithError::InvalidConfig(format!(
                "--{} expects a non-negative integer, got '{}'",
                name, raw
            ))
        }),
        None => Ok(None),
    }
}

impl GeneratorConfig {
    /// Defaults, then the config file, then individual flags. The result is validated.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let base = match overrides.config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(overrides)
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(blocks) = parse_flag("blocks", overrides.num_blocks)? {
            self.num_blocks = blocks;
        }
        if let Some(stacks) = parse_flag("start-stacks", overrides.num_start_stacks)? {
            self.num_start_stacks = stacks;
        }
        if let Some(stacks) = parse_flag("goal-stacks", overrides.num_goal_stacks)? {
            self.num_goal_stacks = stacks;
        }

        self.validate()?;
        Ok(self)
    }

    /// Reads a JSON config. Missing fields fall back to the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| BlocksmithError::io(path, e))?;
        serde_json::from_str(&json).map_err(|source| BlocksmithError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_start_stacks == 0 {
            return Err(BlocksmithError::InvalidConfig(
                "number of start stacks must be at least 1".to_string(),
            ));
        }
        if self.num_goal_stacks == 0 {
            return Err(BlocksmithError::InvalidConfig(
                "number of goal stacks must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn start_stack_height(&self) -> usize {
        self.num_blocks / self.num_start_stacks
    }

    pub fn goal_stack_height(&self) -> usize {
        self.num_blocks / self.num_goal_stacks
    }
}
