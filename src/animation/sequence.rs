//! Mosaic block sizes walked by the progressive reveal.

const STEP_RATIO: f64 = 0.75;

/// Strictly decreasing block sizes ending in exactly one trailing `1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSequence {
    blocks: Vec<u32>,
}

impl RevealSequence {
    /// Each step shrinks the block by 25%; when rounding would stall, the block
    /// shrinks by exactly one pixel instead.
    pub fn from_start_block(start_block: u32) -> Self {
        let mut blocks = vec![start_block.max(1)];
        while let Some(&prev) = blocks.last() {
            if prev <= 1 {
                break;
            }
            let mut next = ((f64::from(prev) * STEP_RATIO).round() as u32).max(1);
            if next >= prev {
                next = (prev - 1).max(1);
            }
            blocks.push(next);
        }
        if blocks.last() != Some(&1) {
            blocks.push(1);
        }
        Self { blocks }
    }

    pub fn blocks(&self) -> &[u32] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.blocks.len().saturating_sub(1)
    }

    /// Block size at `index`, clamped to the final entry.
    pub fn block_at(&self, index: usize) -> u32 {
        self.blocks[index.min(self.last_index())]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequence.rs"]
mod tests;
