use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::{
    error::{Error, Result},
    node::{Boundary, Node},
};

pub type NodeSet = HashSet<Node>;

/// Fails when `node_count` distinct nodes cannot fit inside `boundary`.
pub fn check_feasible(boundary: Boundary, node_count: i64) -> Result<()> {
    let capacity = boundary.capacity();
    if node_count > 0 && node_count as u128 > capacity {
        return Err(Error::Infeasible {
            node_count,
            capacity,
        });
    }
    Ok(())
}

/// Draws uniform points in `boundary` until `node_count` distinct ones are collected.
///
/// Duplicate draws are absorbed by the set and do not count toward progress.
/// A count of zero or less needs no draws and yields an empty set.
pub fn generate_nodes<R: Rng>(rng: &mut R, boundary: Boundary, node_count: i64) -> Result<NodeSet> {
    let mut nodes = NodeSet::new();
    if node_count <= 0 {
        debug!(node_count, "nothing to draw");
        return Ok(nodes);
    }

    check_feasible(boundary, node_count)?;

    let size = boundary.size();
    let mut draws = 0u64;

    while (nodes.len() as i64) < node_count {
        let x = rng.gen_range(0..=size);
        let y = rng.gen_range(0..=size);
        nodes.insert(Node::new(x, y));
        draws += 1;
    }

    debug!(
        node_count,
        draws,
        duplicates = draws - node_count as u64,
        "generated nodes"
    );

    Ok(nodes)
}
