//! `trie` — arena-backed prefix index over the filtered word list.
//!
//! Nodes live in a single `Vec` and point at each other through [`NodeId`]
//! indices, so walking the structure never fights the borrow checker and the
//! whole index can be handed to the generator thread by value. Children are
//! kept sorted by character, which makes traversal order (and therefore the
//! generator's emission order) deterministic.
//!
//! The index is built once and never mutated afterwards. A node can be both
//! an interior node and a word end ("an" inside "and").

/// Index of a node in the arena. Only ever minted by the owning
/// [`WordIndex`], so lookups through it cannot dangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Default)]
struct Node {
    /// Outgoing edges, sorted by character.
    children: Vec<(char, NodeId)>,
    /// True if a whole word ends here.
    word_end: bool,
}

/// Immutable trie over the dictionary words.
#[derive(Debug)]
pub struct WordIndex {
    nodes: Vec<Node>,
}

impl WordIndex {
    /// Build the index by inserting every word. Duplicate words are no-ops;
    /// empty words are skipped so the root is never a word end (otherwise the
    /// generator could emit arrangements containing empty words).
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = WordIndex {
            nodes: vec![Node::default()],
        };
        for word in words {
            index.insert(word.as_ref());
        }
        index
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = ROOT;
        for c in word.chars() {
            node = self.child(node, c).unwrap_or_else(|| self.add_child(node, c));
        }
        self.nodes[node.0 as usize].word_end = true;
    }

    fn add_child(&mut self, parent: NodeId, c: char) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::default());
        let children = &mut self.nodes[parent.0 as usize].children;
        // Keep edges sorted; binary_search_by_key gives the insertion point.
        match children.binary_search_by_key(&c, |&(edge, _)| edge) {
            Ok(_) => unreachable!("add_child called for an existing edge"),
            Err(pos) => children.insert(pos, (c, id)),
        }
        id
    }

    /// The edge from `parent` labelled `c`, if present.
    fn child(&self, parent: NodeId, c: char) -> Option<NodeId> {
        let children = &self.nodes[parent.0 as usize].children;
        children
            .binary_search_by_key(&c, |&(edge, _)| edge)
            .ok()
            .map(|pos| children[pos].1)
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Outgoing edges of `id` in ascending character order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.nodes[id.0 as usize].children.iter().copied()
    }

    pub fn is_word_end(&self, id: NodeId) -> bool {
        self.nodes[id.0 as usize].word_end
    }

    /// Whole-word membership test, for diagnostics and tests.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = ROOT;
        for c in word.chars() {
            match self.child(node, c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        self.is_word_end(node)
    }

    /// Total node count, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
