// MIT License

/*Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.*/

// Problem generator defaults
pub const DEFAULT_NUM_BLOCKS: usize = 8;
pub const DEFAULT_NUM_START_STACKS: usize = 3;
pub const DEFAULT_NUM_GOAL_STACKS: usize = 2;
pub const DEFAULT_PROBLEM_PATH: &str = "blocks_problem.shp";

pub const PROBLEM_NAME: &str = "problem";
pub const DOMAIN_NAME: &str = "blocks";

// Knowledge-base renamer
pub const KB_PREFIX: &str = "lr_";
pub const KB_EXTENSION: &str = "kb";
pub const LR_DIVISOR: f64 = 20.0;
pub const LR_OFFSET: f64 = 0.05;
pub const COMMENT_MARKER: char = ';';
pub const MIN_LINE_LEN: usize = 2; // Lines shorter than this are dropped
