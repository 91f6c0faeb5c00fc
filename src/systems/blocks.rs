// MIT License

/*Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.*/

use rand::Rng;
use std::fs;
use std::path::Path;

use crate::error::{BlocksmithError, Result};
use crate::models::config::GeneratorConfig;
use crate::models::constants::{DOMAIN_NAME, PROBLEM_NAME};
use crate::models::problem::{BlockId, Literal, Problem, Stack};

/// Block identifiers not yet placed in a stack.
#[derive(Clone, Debug)]
pub struct BlockPool {
    unused: Vec<BlockId>,
}

impl BlockPool {
    pub fn full(num_blocks: usize) -> Self {
        Self {
            unused: (0..num_blocks).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unused.is_empty()
    }

    /// Uniform draw without replacement.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<BlockId> {
        if self.unused.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.unused.len());
        Some(self.unused.swap_remove(index))
    }

    /// Remaining identifiers in ascending order.
    pub fn into_leftovers(mut self) -> Vec<BlockId> {
        self.unused.sort_unstable();
        self.unused
    }
}

pub fn declarations(num_blocks: usize) -> Vec<Literal> {
    (0..num_blocks).map(Literal::Block).collect()
}

/// Sequential stacks of `num_blocks / num_stacks` blocks, leftovers as singletons.
pub fn build_start_stacks(num_blocks: usize, num_stacks: usize) -> Vec<Stack> {
    let height = num_blocks / num_stacks;
    let mut stacks = Vec::new();
    let mut next_block: BlockId = 0;

    if height > 0 {
        for _ in 0..num_stacks {
            let mut stack = Stack::new();
            for _ in 0..height {
                stack.push(next_block);
                next_block += 1;
            }
            stacks.push(stack);
        }
    }

    stacks.extend((next_block..num_blocks).map(Stack::singleton));
    stacks
}

/// Randomly drawn stacks of `num_blocks / num_stacks` blocks, leftovers as singletons.
pub fn build_goal_stacks<R: Rng + ?Sized>(
    num_blocks: usize,
    num_stacks: usize,
    rng: &mut R,
) -> Vec<Stack> {
    let height = num_blocks / num_stacks;
    let mut pool = BlockPool::full(num_blocks);
    let mut stacks = Vec::new();

    if height > 0 {
        for _ in 0..num_stacks {
            let mut stack = Stack::new();
            for _ in 0..height {
                if let Some(block) = pool.draw(rng) {
                    stack.push(block);
                }
            }
            stacks.push(stack);
        }
    }

    stacks.extend(pool.into_leftovers().into_iter().map(Stack::singleton));
    stacks
}

pub fn generate_problem<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Problem> {
    config.validate()?;

    Ok(Problem {
        name: PROBLEM_NAME.to_string(),
        domain: DOMAIN_NAME.to_string(),
        declarations: declarations(config.num_blocks),
        start: build_start_stacks(config.num_blocks, config.num_start_stacks),
        goal: build_goal_stacks(config.num_blocks, config.num_goal_stacks, rng),
    })
}

/// Overwrites `path` with the rendered problem.
pub fn write_problem(problem: &Problem, path: &Path) -> Result<()> {
    fs::write(path, problem.render()).map_err(|e| BlocksmithError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn placed_blocks(stacks: &[Stack]) -> Vec<BlockId> {
        let mut blocks: Vec<BlockId> = stacks.iter().flat_map(|s| s.blocks.clone()).collect();
        blocks.sort_unstable();
        blocks
    }

    #[test]
    fn pool_draws_each_block_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = BlockPool::full(10);
        let mut seen = HashSet::new();

        while let Some(block) = pool.draw(&mut rng) {
            assert!(seen.insert(block));
        }
        assert_eq!(seen.len(), 10);
        assert!(pool.is_empty());
    }

    #[test]
    fn default_start_state_has_two_leftovers() {
        let stacks = build_start_stacks(8, 3);
        assert_eq!(stacks.len(), 5);
        assert_eq!(stacks[0].blocks, vec![0, 1]);
        assert_eq!(stacks[1].blocks, vec![2, 3]);
        assert_eq!(stacks[2].blocks, vec![4, 5]);
        assert_eq!(stacks[3].blocks, vec![6]);
        assert_eq!(stacks[4].blocks, vec![7]);

        let on_links = stacks
            .iter()
            .flat_map(Stack::literals)
            .filter(|l| matches!(l, Literal::On(..)))
            .count();
        assert_eq!(on_links, 3);
    }

    #[test]
    fn start_state_covers_all_blocks() {
        for (blocks, stacks) in [(8, 2), (8, 4), (9, 3), (10, 3), (1, 1)] {
            let start = build_start_stacks(blocks, stacks);
            assert_eq!(placed_blocks(&start), (0..blocks).collect::<Vec<_>>());
        }
    }

    #[test]
    fn more_stacks_than_blocks_leaves_singletons() {
        let stacks = build_start_stacks(2, 5);
        assert_eq!(stacks, vec![Stack::singleton(0), Stack::singleton(1)]);
    }

    #[test]
    fn huge_stack_counts_do_not_allocate_per_stack() {
        assert_eq!(
            build_start_stacks(3, usize::MAX),
            vec![Stack::singleton(0), Stack::singleton(1), Stack::singleton(2)]
        );
        assert_eq!(build_start_stacks(8, 1usize << 40).len(), 8);

        let config = GeneratorConfig {
            num_start_stacks: usize::MAX,
            num_goal_stacks: usize::MAX,
            ..GeneratorConfig::default()
        };
        let problem = generate_problem(&config, &mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(problem.start.len(), 8);
        assert_eq!(problem.goal.len(), 8);
    }

    #[test]
    fn goal_state_covers_all_blocks() {
        let mut rng = StdRng::seed_from_u64(42);
        for (blocks, stacks) in [(8, 2), (8, 3), (11, 4), (3, 7), (0, 2)] {
            let goal = build_goal_stacks(blocks, stacks, &mut rng);
            assert_eq!(placed_blocks(&goal), (0..blocks).collect::<Vec<_>>());
        }
    }

    #[test]
    fn goal_stacks_have_computed_height() {
        let mut rng = StdRng::seed_from_u64(3);
        let goal = build_goal_stacks(8, 3, &mut rng);

        assert_eq!(goal.len(), 5);
        assert!(goal[..3].iter().all(|s| s.blocks.len() == 2));
        assert!(goal[3].blocks[0] < goal[4].blocks[0]);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = GeneratorConfig::default();
        let a = generate_problem(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate_problem(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn goal_draws_vary_across_seeds() {
        let bases: HashSet<BlockId> = (0..64)
            .map(|seed| build_goal_stacks(8, 2, &mut StdRng::seed_from_u64(seed))[0].blocks[0])
            .collect();
        assert!(bases.len() > 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GeneratorConfig {
            num_start_stacks: 0,
            ..GeneratorConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_problem(&config, &mut rng),
            Err(BlocksmithError::InvalidConfig(_))
        ));
    }
}
