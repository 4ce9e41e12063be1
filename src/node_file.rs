//! The plain-text node file read by the Steiner tree builder.
//!
//! ```text
//! 0 0 {size} {size}
//! {node_count}
//! {x1} {y1}
//! ...
//! ```

use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    error::{Error, Result},
    node::{Boundary, Node},
};

/// `genNodes{size}_{node_count}.txt`
pub fn file_name(boundary: Boundary, node_count: i64) -> String {
    format!("genNodes{}_{}.txt", boundary.size(), node_count)
}

/// Writes the header with `node_count` as requested, then one line per node.
pub fn write_nodes<'a, W, I>(out: &mut W, boundary: Boundary, node_count: i64, nodes: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Node>,
{
    writeln!(out, "{boundary}")?;
    writeln!(out, "{node_count}")?;
    for node in nodes {
        writeln!(out, "{node}")?;
    }
    Ok(())
}

/// Writes `nodes` to `dir`, replacing any file of the same name, and returns its path.
pub fn write_node_file(
    dir: &Path,
    boundary: Boundary,
    node_count: i64,
    nodes: &HashSet<Node>,
) -> Result<PathBuf> {
    let path = dir.join(file_name(boundary, node_count));

    {
        let mut out = BufWriter::new(File::create(&path)?);
        write_nodes(&mut out, boundary, node_count, nodes)?;
        out.flush()?;
    }

    info!(path = %path.display(), nodes = nodes.len(), "wrote node file");
    Ok(path)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeFile {
    pub boundary: Boundary,
    /// Count as declared in the header, which may be zero or negative.
    pub node_count: i64,
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeFileSummary {
    pub boundary: Boundary,
    pub node_count: i64,
    pub distinct: bool,
    pub in_bounds: bool,
}

impl NodeFile {
    pub fn summary(&self) -> NodeFileSummary {
        let unique: HashSet<&Node> = self.nodes.iter().collect();
        NodeFileSummary {
            boundary: self.boundary,
            node_count: self.node_count,
            distinct: unique.len() == self.nodes.len(),
            in_bounds: self.nodes.iter().all(|n| self.boundary.contains(*n)),
        }
    }
}

struct Tokens<'a> {
    tokens: Vec<(usize, &'a str)>,
    pos: usize,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Tokens<'a> {
        let tokens: Vec<_> = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)))
            .collect();
        let last_line = text.lines().count().max(1);
        Tokens {
            tokens,
            pos: 0,
            last_line,
        }
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let Some(&(line, token)) = self.tokens.get(self.pos) else {
            return Err(Error::Malformed {
                line: self.last_line,
                reason: format!("missing {what}"),
            });
        };
        self.pos += 1;
        token.parse().map_err(|_| Error::Malformed {
            line,
            reason: format!("expected {what}, found '{token}'"),
        })
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }
}

pub fn parse_node_file(text: &str) -> Result<NodeFile> {
    let mut tokens = Tokens::new(text);

    let xl: i64 = tokens.next("boundary min x")?;
    let yl: i64 = tokens.next("boundary min y")?;
    let xh: i64 = tokens.next("boundary max x")?;
    let yh: i64 = tokens.next("boundary max y")?;
    if xl != 0 || yl != 0 || xh != yh {
        return Err(Error::Malformed {
            line: 1,
            reason: format!("boundary '{xl} {yl} {xh} {yh}' is not a square anchored at the origin"),
        });
    }
    let boundary = Boundary::new(xh);

    let node_count: i64 = tokens.next("node count")?;
    let mut nodes = Vec::new();
    for _ in 0..node_count.max(0) {
        let x = tokens.next("node x")?;
        let y = tokens.next("node y")?;
        nodes.push(Node::new(x, y));
    }

    if tokens.remaining() > 0 {
        warn!(ignored = tokens.remaining(), "trailing tokens after the last node");
    }

    Ok(NodeFile {
        boundary,
        node_count,
        nodes,
    })
}

pub fn read_node_file(path: &Path) -> Result<NodeFile> {
    parse_node_file(&fs::read_to_string(path)?)
}
