//! Binary trie for bit-at-a-time decoding.

use crate::code::CodeTable;

/// Index of the root node.
const ROOT: u32 = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    children: [Option<u32>; 2],
    symbol: Option<u8>,
}

/// Result of feeding one bit to a [`DecodeTrie`] walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The bits so far are a proper prefix of some code.
    Partial,
    /// The bits so far spell the code of this symbol.
    Symbol(u8),
    /// The bits so far are not a prefix of any code.
    Dead,
}

/// Reverse lookup from bit sequence to symbol.
///
/// Built from a [`CodeTable`] read back from an archive. If the table is not
/// prefix-free (a corrupt archive) a later entry with the same code replaces
/// an earlier one and a shorter code shadows any longer code it prefixes.
#[derive(Debug, Clone)]
pub struct DecodeTrie {
    nodes: Vec<Node>,
    cursor: u32,
}

impl DecodeTrie {
    /// Build the trie for every entry of `table`.
    pub fn new(table: &CodeTable) -> Self {
        let mut trie = Self {
            nodes: vec![Node::default()],
            cursor: ROOT,
        };
        for (symbol, code) in table.iter() {
            let mut node = ROOT;
            for &bit in code.bits() {
                node = match trie.nodes[node as usize].children[bit as usize] {
                    Some(child) => child,
                    None => {
                        let child = trie.nodes.len() as u32;
                        trie.nodes.push(Node::default());
                        trie.nodes[node as usize].children[bit as usize] = Some(child);
                        child
                    }
                };
            }
            trie.nodes[node as usize].symbol = Some(symbol);
        }
        trie
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Advance the walk by one bit.
    ///
    /// On [`Step::Symbol`] the walk restarts at the root. On [`Step::Dead`]
    /// it stays put; call [`DecodeTrie::reset`] to start over.
    pub fn step(&mut self, bit: bool) -> Step {
        let Some(next) = self.nodes[self.cursor as usize].children[bit as usize] else {
            return Step::Dead;
        };
        match self.nodes[next as usize].symbol {
            Some(symbol) => {
                self.cursor = ROOT;
                Step::Symbol(symbol)
            }
            None => {
                self.cursor = next;
                Step::Partial
            }
        }
    }

    /// Whether the walk is at the root.
    pub fn at_root(&self) -> bool {
        self.cursor == ROOT
    }

    /// Restart the walk at the root.
    pub fn reset(&mut self) {
        self.cursor = ROOT;
    }
}
