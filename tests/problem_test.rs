// MIT License

/*Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.*/

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

use blocksmith::models::config::GeneratorConfig;
use blocksmith::models::problem::Literal;
use blocksmith::systems::blocks::{generate_problem, write_problem};
use blocksmith::BlocksmithError;

fn count_positions(literals: &[Literal], num_blocks: usize) -> Vec<usize> {
    // Each block is counted once, at its base (on-table) or as the upper block of an `on`.
    let mut counts = vec![0; num_blocks];
    for literal in literals {
        match *literal {
            Literal::OnTable(b) => counts[b] += 1,
            Literal::On(upper, _) => counts[upper] += 1,
            _ => {}
        }
    }
    counts
}

#[test]
fn default_problem_structure() {
    let config = GeneratorConfig::default();
    let problem = generate_problem(&config, &mut StdRng::seed_from_u64(11)).unwrap();
    let text = problem.render();

    assert!(text.starts_with("(defproblem problem blocks\n"));
    assert!(text.contains("(achieve-goals\n"));
    assert!(text.ends_with(") )\n)\n"));
    assert_eq!(text.matches("(block block").count(), 8);
    assert!(text.contains("(on-table block0)(on block1 block0)(clear block1)\n"));
    assert!(text.contains("(on-table block6)(clear block6)\n"));
    assert!(text.contains("(on-table block7)(clear block7)\n"));
}

#[test]
fn every_block_placed_once_in_each_state() {
    let mut rng = StdRng::seed_from_u64(2024);
    for (blocks, start, goal) in [(8, 3, 2), (12, 4, 5), (7, 7, 3), (5, 2, 9)] {
        let config = GeneratorConfig {
            num_blocks: blocks,
            num_start_stacks: start,
            num_goal_stacks: goal,
        };
        let problem = generate_problem(&config, &mut rng).unwrap();

        assert_eq!(count_positions(&problem.start_literals(), blocks), vec![1; blocks]);
        assert_eq!(count_positions(&problem.goal_literals(), blocks), vec![1; blocks]);

        let clears = problem
            .goal_literals()
            .iter()
            .filter(|l| matches!(l, Literal::Clear(_)))
            .count();
        assert_eq!(clears, problem.goal.len());
    }
}

#[test]
fn writes_and_overwrites_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problem.shp");
    fs::write(&path, "stale").unwrap();

    let problem =
        generate_problem(&GeneratorConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap();
    write_problem(&problem, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), problem.render());
}

#[test]
fn missing_output_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("problem.shp");

    let problem =
        generate_problem(&GeneratorConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap();
    let err = write_problem(&problem, &path).unwrap_err();
    assert!(matches!(err, BlocksmithError::Io { .. }));
}
