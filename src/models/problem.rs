// MIT License

/*Copyright (c) 2024 Based Labs

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.*/

use std::fmt;

pub type BlockId = usize;

/// One atom of the blocks-world problem grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Literal {
    Block(BlockId),
    OnTable(BlockId),
    /// `On(upper, lower)`
    On(BlockId, BlockId),
    Clear(BlockId),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Block(b) => write!(f, "(block block{})", b),
            Literal::OnTable(b) => write!(f, "(on-table block{})", b),
            Literal::On(upper, lower) => write!(f, "(on block{} block{})", upper, lower),
            Literal::Clear(b) => write!(f, "(clear block{})", b),
        }
    }
}

/// Blocks from the table upwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stack {
    pub blocks: Vec<BlockId>,
}

impl Stack {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn singleton(block: BlockId) -> Self {
        Self { blocks: vec![block] }
    }

    pub fn push(&mut self, block: BlockId) {
        self.blocks.push(block);
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// `on-table` for the base, an `on` link per following block, `clear` for the top.
    pub fn literals(&self) -> Vec<Literal> {
        let mut literals = Vec::with_capacity(self.blocks.len() + 1);
        let mut below: Option<BlockId> = None;

        for &block in &self.blocks {
            literals.push(match below {
                None => Literal::OnTable(block),
                Some(lower) => Literal::On(block, lower),
            });
            below = Some(block);
        }
        if let Some(top) = below {
            literals.push(Literal::Clear(top));
        }

        literals
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub name: String,
    pub domain: String,
    pub declarations: Vec<Literal>,
    pub start: Vec<Stack>,
    pub goal: Vec<Stack>,
}

impl Problem {
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn start_literals(&self) -> Vec<Literal> {
        self.start.iter().flat_map(Stack::literals).collect()
    }

    pub fn goal_literals(&self) -> Vec<Literal> {
        self.goal.iter().flat_map(Stack::literals).collect()
    }
}

fn write_stacks(f: &mut fmt::Formatter<'_>, stacks: &[Stack]) -> fmt::Result {
    for stack in stacks.iter().filter(|s| !s.is_empty()) {
        for literal in stack.literals() {
            write!(f, "{}", literal)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(defproblem {} {}", self.name, self.domain)?;
        writeln!(f, "(")?;
        for declaration in &self.declarations {
            writeln!(f, "{}", declaration)?;
        }
        write_stacks(f, &self.start)?;
        writeln!(f, ")")?;
        writeln!(f, "(achieve-goals")?;
        writeln!(f, "(")?;
        write_stacks(f, &self.goal)?;
        writeln!(f, ") )")?;
        writeln!(f, ")")
    }
}
