use log::debug;

use crate::iterator::constants::MAX_CONCAT_LEN;
use crate::utils::partition_ranges;

/// Lazy generator of every way to merge adjacent tokens into longer tokens.
///
/// A sequence of `n` tokens has `2^(n-1)` groupings. They are produced from
/// "cut between every token" down to "no cut at all", which lists groupings
/// whose leading tokens are shortest first:
///
/// `["1","2","3"]`, `["1","23"]`, `["12","3"]`, `["123"]`
#[derive(Debug, Clone)]
pub struct ConcatVariants {
    tokens: Vec<String>,
    next_mask: Option<u32>,
}

impl ConcatVariants {
    pub fn new(tokens: &[String]) -> Self {
        let next_mask = match tokens.len() {
            0 => None,
            n if n > MAX_CONCAT_LEN => {
                debug!(
                    "Refusing to group {} tokens, limit is {}",
                    n, MAX_CONCAT_LEN
                );
                None
            }
            n => Some(((1u64 << (n - 1)) - 1) as u32),
        };

        Self {
            tokens: tokens.to_vec(),
            next_mask,
        }
    }

    fn grouping(&self, mask: u32) -> Vec<String> {
        partition_ranges(self.tokens.len(), mask)
            .into_iter()
            .map(|(start, end)| self.tokens.get(start..end).unwrap_or_default().concat())
            .collect()
    }
}

impl Iterator for ConcatVariants {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.next_mask?;
        self.next_mask = mask.checked_sub(1);
        Some(self.grouping(mask))
    }
}
