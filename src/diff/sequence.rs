//! Longest-matching-block sequence alignment.
//!
//! [`SequenceMatcher`] finds the longest contiguous block shared by two
//! sequences, then recurses on the regions to its left and right. The
//! resulting blocks drive both the line alignment ([`SequenceMatcher::opcodes`])
//! and the character similarity score ([`SequenceMatcher::ratio`]).
//!
//! Every element takes part in matching; there is no junk or popularity
//! filtering. Among blocks of equal length the one starting earliest in
//! `a` wins, then the one starting earliest in `b`.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

/// A block where `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Start in the first sequence
    pub a: usize,
    /// Start in the second sequence
    pub b: usize,
    /// Block length
    pub size: usize,
}

impl Match {
    fn new(a: usize, b: usize, size: usize) -> Self {
        Self { a, b, size }
    }
}

/// Relationship between an old slice and a new slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Slices are identical
    Equal,
    /// Old slice has no counterpart
    Delete,
    /// New slice has no counterpart
    Insert,
    /// Both slices are non-empty and differ
    Replace,
}

/// One alignment run: `tag` relates `old[i1..i2]` to `new[j1..j2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub tag: Tag,
    pub i1: usize,
    pub i2: usize,
    pub j1: usize,
    pub j2: usize,
}

impl Opcode {
    pub fn new(tag: Tag, i1: usize, i2: usize, j1: usize, j2: usize) -> Self {
        Self { tag, i1, i2, j1, j2 }
    }

    /// Covered indices of the old sequence.
    pub fn old_range(&self) -> Range<usize> {
        self.i1..self.i2
    }

    /// Covered indices of the new sequence.
    pub fn new_range(&self) -> Range<usize> {
        self.j1..self.j2
    }
}

/// Aligns two sequences by recursive longest matching blocks.
pub struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Positions of each element of `b`, ascending.
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Create a matcher for the two sequences.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, item) in b.iter().enumerate() {
            b2j.entry(item).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Find the longest block shared by `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Returns a zero-sized match at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let mut best = Match::new(alo, blo, 0);
        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best.size {
                        best = Match::new(i + 1 - k, j + 1 - k, k);
                    }
                }
            }
            j2len = next_j2len;
        }

        best
    }

    /// All matching blocks in ascending order, adjacent blocks merged.
    ///
    /// The last entry is always the sentinel `(a.len(), b.len(), 0)`.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }

        blocks.sort_by_key(|m| (m.a, m.b));

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len() + 1);
        for m in blocks {
            if let Some(last) = merged.last_mut() {
                if last.a + last.size == m.a && last.b + last.size == m.b {
                    last.size += m.size;
                    continue;
                }
            }
            merged.push(m);
        }
        merged.push(Match::new(la, lb, 0));
        merged
    }

    /// Maximal alignment runs covering both sequences in index order.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut opcodes = Vec::new();
        let (mut i, mut j) = (0, 0);

        for m in self.matching_blocks() {
            let tag = match (i < m.a, j < m.b) {
                (true, true) => Some(Tag::Replace),
                (true, false) => Some(Tag::Delete),
                (false, true) => Some(Tag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                opcodes.push(Opcode::new(tag, i, m.a, j, m.b));
            }
            i = m.a + m.size;
            j = m.b + m.size;
            if m.size > 0 {
                opcodes.push(Opcode::new(Tag::Equal, m.a, i, m.b, j));
            }
        }

        opcodes
    }

    /// `2 * M / (len(a) + len(b))` where `M` counts matched elements.
    ///
    /// Two empty sequences are identical (ratio 1.0).
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        2.0 * matched as f64 / total as f64
    }
}
