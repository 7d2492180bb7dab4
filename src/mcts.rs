//! Monte Carlo Tree Search (MCTS) with UCB1 selection.
//!
//! Each decision builds a fresh tree and drops it once the move is chosen.
//! Every iteration runs the four classic phases:
//! 1. Selection: descend by UCB1 until a leaf or a finished game
//! 2. Expansion: add one child per legal move to the leaf
//! 3. Simulation: random playout from the first new child
//! 4. Backpropagation: update visits and wins up to the root
//!
//! Rewards are always counted from the searching player's point of view.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]: parents
//! own their children's handles, children keep a plain handle back to their
//! parent. Dropping the [`SearchTree`] frees the whole tree at once.

use fastrand::Rng;
use tracing::debug;

use crate::board::{Board, Move, PathGoal, Player};
use crate::connectivity::{has_winner, winner};
use crate::constants::{N_SIMS, UCB_C};
use crate::playout::rollout;

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MctsConfig {
    /// Number of select/expand/simulate/backpropagate iterations.
    pub simulations: usize,
    /// Exploration constant C in the UCB1 formula.
    pub exploration: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            simulations: N_SIMS,
            exploration: UCB_C,
        }
    }
}

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Board after `mv` was played
    pub board: Board,
    /// Move that led here from the parent (`None` for the root)
    pub mv: Option<Move>,
    /// Player to move at this node
    pub to_move: Player,
    /// Set when the game is already decided at this node
    pub winner: Option<Player>,
    /// Number of visits (N)
    pub visits: u32,
    /// Playouts won by the searching player (Q)
    pub wins: u32,
    /// Child handles, one per legal move, in row-major order
    pub children: Vec<NodeId>,
    /// Parent handle (`None` for the root)
    pub parent: Option<NodeId>,
}

impl SearchNode {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// Mean reward Q/N, zero for unvisited nodes.
    #[inline]
    pub fn winrate(&self) -> f64 {
        if self.visits > 0 {
            self.wins as f64 / self.visits as f64
        } else {
            0.0
        }
    }
}

/// Arena-allocated search tree for a single decision.
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    player: Player,
    goal: PathGoal,
}

impl SearchTree {
    /// Start a tree at `board` with `player` to move. The board is copied.
    pub fn new(board: &Board, player: Player, goal: PathGoal) -> Self {
        let root = SearchNode {
            board: board.clone(),
            mv: None,
            to_move: player,
            winner: winner(board, goal),
            visits: 0,
            wins: 0,
            children: Vec::new(),
            parent: None,
        };
        Self {
            nodes: vec![root],
            player,
            goal,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Number of nodes allocated so far. Never zero: the root always exists.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The player the tree is searching for.
    pub fn player(&self) -> Player {
        self.player
    }

    fn alloc(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Expand a non-terminal leaf. Returns `true` if children were added.
    pub fn expand(&mut self, id: NodeId) -> bool {
        let node = self.get(id);
        if node.is_terminal() || !node.children.is_empty() {
            return false;
        }
        self.add_children(id)
    }

    fn add_children(&mut self, id: NodeId) -> bool {
        let parent = self.get(id);
        let board = parent.board.clone();
        let mover = parent.to_move;

        let mut children = Vec::new();
        for mv in board.legal_moves() {
            let mut child_board = board.clone();
            child_board.apply(mv, mover);
            let winner = has_winner(&child_board, mover, self.goal).then_some(mover);
            children.push(self.alloc(SearchNode {
                board: child_board,
                mv: Some(mv),
                to_move: mover.opponent(),
                winner,
                visits: 0,
                wins: 0,
                children: Vec::new(),
                parent: Some(id),
            }));
        }
        let added = !children.is_empty();
        self.get_mut(id).children = children;
        added
    }

    /// UCB1 score of `child` for `chooser`, under a parent with
    /// `parent_visits` visits.
    ///
    /// Wins are stored for the searching player, so the mean is inverted
    /// when the opponent is the one choosing. Unvisited children score +inf
    /// so they are always tried first.
    pub fn ucb1(&self, child: &SearchNode, chooser: Player, parent_visits: u32, c: f64) -> f64 {
        if child.visits == 0 {
            return f64::INFINITY;
        }
        let mean = if chooser == self.player {
            child.winrate()
        } else {
            1.0 - child.winrate()
        };
        let n = child.visits as f64;
        mean + c * ((parent_visits.max(1) as f64).ln() / n).sqrt()
    }

    /// Child of `id` with the highest UCB1 score; ties go to the earliest child.
    fn most_urgent(&self, id: NodeId, c: f64) -> Option<NodeId> {
        let node = self.get(id);
        if let Some(&fresh) = node.children.iter().find(|&&ch| self.get(ch).visits == 0) {
            return Some(fresh);
        }
        let mut best: Option<(NodeId, f64)> = None;
        for &ch in &node.children {
            let score = self.ucb1(self.get(ch), node.to_move, node.visits, c);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((ch, score));
            }
        }
        best.map(|(ch, _)| ch)
    }

    /// Descend from the root to a leaf or terminal node.
    fn select(&self, c: f64) -> NodeId {
        let mut id = self.root();
        while !self.get(id).is_terminal() {
            match self.most_urgent(id, c) {
                Some(child) => id = child,
                None => break,
            }
        }
        id
    }

    /// Winner of one playout from `id` (the stored winner if already decided).
    fn simulate(&self, id: NodeId, rng: &mut Rng) -> Player {
        let node = self.get(id);
        if let Some(w) = node.winner {
            return w;
        }
        let mut board = node.board.clone();
        rollout(&mut board, node.to_move, self.goal, rng).winner
    }

    /// Add one visit to `id` and all its ancestors, and one win when the
    /// searching player won the playout.
    fn backpropagate(&mut self, id: NodeId, winner: Player) {
        let won = winner == self.player;
        let mut cur = Some(id);
        while let Some(nid) = cur {
            let node = self.get_mut(nid);
            node.visits += 1;
            if won {
                node.wins += 1;
            }
            cur = node.parent;
        }
    }

    /// Run a single select/expand/simulate/backpropagate iteration.
    ///
    /// Does nothing when the selected leaf is undecided but has no legal
    /// moves, which only happens on an empty (size 0) board.
    pub fn iterate(&mut self, c: f64, rng: &mut Rng) {
        let leaf = self.select(c);
        let target = if self.expand(leaf) {
            self.get(leaf).children[0]
        } else if self.get(leaf).is_terminal() {
            leaf
        } else {
            return;
        };
        let w = self.simulate(target, rng);
        self.backpropagate(target, w);
    }

    /// Run the configured number of iterations.
    pub fn run(&mut self, config: &MctsConfig, rng: &mut Rng) {
        for _ in 0..config.simulations {
            self.iterate(config.exploration, rng);
        }
    }

    /// The most visited root child (ties: higher winrate, then earliest).
    ///
    /// With no search run yet the root is expanded first, so the first legal
    /// move comes back. `None` only when the board is full.
    pub fn best_move(&mut self) -> Option<Move> {
        let root = self.root();
        if self.get(root).children.is_empty() {
            self.add_children(root);
        }
        let mut best: Option<&SearchNode> = None;
        for &ch in &self.get(root).children {
            let child = self.get(ch);
            let better = best.is_none_or(|b| {
                child.visits > b.visits
                    || (child.visits == b.visits && child.winrate() > b.winrate())
            });
            if better {
                best = Some(child);
            }
        }
        best.and_then(|n| n.mv)
    }
}

/// Search `board` for `player` and return the chosen move.
///
/// The tree is built from a copy of `board` and dropped before returning.
pub fn tree_search(
    board: &Board,
    player: Player,
    goal: PathGoal,
    config: &MctsConfig,
    rng: &mut Rng,
) -> Option<Move> {
    let mut tree = SearchTree::new(board, player, goal);
    tree.run(config, rng);
    let best = tree.best_move();

    let root = tree.get(tree.root());
    debug!(
        nodes = tree.len(),
        root_visits = root.visits,
        root_winrate = root.winrate(),
        best = ?best,
        "tree search done"
    );
    best
}
