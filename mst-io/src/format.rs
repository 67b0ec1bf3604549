//! Parses and serialises the dense adjacency-matrix text format: a header
//! line `N M` followed by `M` lines `i j w`, each describing one
//! upper-triangle edge (`i <= j`, `w` a positive integer weight).

use std::io::{BufRead, Write};
use std::path::Path;

use thiserror::Error;

/// A parsed adjacency matrix: vertex count, edge count, and the dense,
/// row-major, symmetric `n x n` weight matrix `mst_core::compute_mst` expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Number of vertices.
    pub n: usize,
    /// Number of distinct edges described by the header line.
    pub m: usize,
    /// Dense, row-major, symmetric weight matrix; `0` means "no edge".
    pub adj: Vec<i64>,
}

impl AdjacencyMatrix {
    /// Builds an `n x n` zero matrix with no edges recorded yet.
    #[must_use]
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            m: 0,
            adj: vec![0; n * n],
        }
    }

    /// Records edge `(i, j, w)` symmetrically, panicking if either endpoint
    /// is out of range. Callers building a matrix by hand (tests, the
    /// generator) are expected to pass validated endpoints.
    pub fn set_edge(&mut self, i: usize, j: usize, w: i64) {
        debug_assert!(i < self.n && j < self.n, "edge endpoint out of range");
        let Some(forward) = self.adj.get_mut(i * self.n + j) else {
            return;
        };
        *forward = w;
        let Some(backward) = self.adj.get_mut(j * self.n + i) else {
            return;
        };
        *backward = w;
    }
}

/// Errors raised while parsing the adjacency-matrix text format.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("i/o error reading adjacency matrix: {0}")]
    Io(#[from] std::io::Error),
    /// The header line (`N M`) was missing or malformed.
    #[error("missing or malformed header line (expected `N M`)")]
    MissingHeader,
    /// An edge line did not have the form `i j w`.
    #[error("line {line}: malformed edge (expected `i j w`), got `{content}`")]
    MalformedEdge {
        /// 1-based line number within the file.
        line: usize,
        /// The offending line's raw content.
        content: String,
    },
    /// An edge line named a vertex id outside `[0, n)`.
    #[error("line {line}: vertex id {vertex} is out of range for n={n}")]
    VertexOutOfRange {
        /// 1-based line number within the file.
        line: usize,
        /// The out-of-range vertex id.
        vertex: usize,
        /// The declared vertex count.
        n: usize,
    },
    /// The file declared `m` edges but supplied a different count.
    #[error("header declared {declared} edges but {actual} edge lines were read")]
    EdgeCountMismatch {
        /// The `m` field from the header line.
        declared: usize,
        /// The number of edge lines actually parsed.
        actual: usize,
    },
}

/// Loads an [`AdjacencyMatrix`] from the file at `path`.
///
/// # Errors
/// Returns [`LoadError`] if the file cannot be read or does not conform to
/// the header-then-edges format.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<AdjacencyMatrix, LoadError> {
    let file = std::fs::File::open(path)?;
    load_from_reader(std::io::BufReader::new(file))
}

/// Loads an [`AdjacencyMatrix`] from any buffered reader.
///
/// # Errors
/// Returns [`LoadError`] if the header is missing, an edge line is
/// malformed, a vertex id is out of range, or the declared edge count does
/// not match the number of edge lines present.
pub fn load_from_reader(mut reader: impl BufRead) -> Result<AdjacencyMatrix, LoadError> {
    let mut header = String::new();
    reader.read_line(&mut header)?;
    let (n, m) = parse_header(&header)?;

    let mut matrix = AdjacencyMatrix::empty(n);
    let mut edges_read = 0usize;

    for (offset, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let line_no = offset + 2; // header occupied line 1
        let (i, j, w) = parse_edge_line(trimmed, line_no)?;
        if i >= n || j >= n {
            let vertex = if i >= n { i } else { j };
            return Err(LoadError::VertexOutOfRange { line: line_no, vertex, n });
        }
        matrix.set_edge(i, j, w);
        edges_read += 1;
    }

    if edges_read != m {
        return Err(LoadError::EdgeCountMismatch {
            declared: m,
            actual: edges_read,
        });
    }
    matrix.m = m;
    Ok(matrix)
}

/// Writes `matrix` back out in the same text format, with edges emitted in
/// ascending `(i, j)` order over the upper triangle. Used by tests and by
/// `mst-cli`'s graph-generation helper to persist synthetic fixtures.
///
/// # Errors
/// Returns [`std::io::Error`] if writing to `writer` fails.
pub fn write_to_writer(matrix: &AdjacencyMatrix, mut writer: impl Write) -> std::io::Result<()> {
    writeln!(writer, "{} {}", matrix.n, matrix.m)?;
    for i in 0..matrix.n {
        for j in i..matrix.n {
            let Some(&w) = matrix.adj.get(i * matrix.n + j) else {
                continue;
            };
            if w != 0 {
                writeln!(writer, "{i} {j} {w}")?;
            }
        }
    }
    Ok(())
}

fn parse_header(line: &str) -> Result<(usize, usize), LoadError> {
    let mut parts = line.split_whitespace();
    let n = parts.next().and_then(|v| v.parse().ok());
    let m = parts.next().and_then(|v| v.parse().ok());
    match (n, m) {
        (Some(n), Some(m)) => Ok((n, m)),
        _ => Err(LoadError::MissingHeader),
    }
}

fn parse_edge_line(line: &str, line_no: usize) -> Result<(usize, usize, i64), LoadError> {
    let mut parts = line.split_whitespace();
    let malformed = || LoadError::MalformedEdge {
        line: line_no,
        content: line.to_owned(),
    };
    let i: usize = parts.next().and_then(|v| v.parse().ok()).ok_or_else(malformed)?;
    let j: usize = parts.next().and_then(|v| v.parse().ok()).ok_or_else(malformed)?;
    let w: i64 = parts.next().and_then(|v| v.parse().ok()).ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok((i, j, w))
}
