/// Lazy generator of every ordering of a sequence, by position.
///
/// Position `start` takes each item from `start..n` in turn (by swapping it
/// forward) before the remaining positions are expanded, so `[a, b, c]`
/// yields `abc, acb, bac, bca, cba, cab`. Items with equal values still yield
/// `n!` orderings. Every swap is applied to a fresh copy of its parent
/// ordering; nothing is undone afterwards.
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    stack: Vec<(Vec<T>, usize)>,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            stack: vec![(items, 0)],
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((ordering, start)) = self.stack.pop() {
            let n = ordering.len();
            if start >= n {
                return Some(ordering);
            }

            // Pushed in reverse so the smallest swap index is expanded first
            for i in (start..n).rev() {
                let mut child = ordering.clone();
                child.swap(start, i);
                self.stack.push((child, start + 1));
            }
        }
        None
    }
}
