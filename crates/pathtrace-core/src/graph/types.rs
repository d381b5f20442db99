use serde::{Serialize, Serializer};

/// Node identifier. Integer ids from graph files are normalised to their
/// decimal string form.
pub type NodeId = String;

/// Best known distance from the start node.
///
/// Wraps an `f64` where `+inf` means "not reached". Serializes as `null`
/// when unreachable so JSON consumers never see a non-standard number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const UNREACHABLE: Distance = Distance(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_reachable(&self) -> bool {
        self.0.is_finite()
    }

    /// Extend this distance by one edge weight
    pub fn extend(self, weight: f64) -> Self {
        Distance(self.0 + weight)
    }

    pub(crate) fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::UNREACHABLE
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance(value)
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_reachable() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Raw undirected edge as supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// One relaxation event: `node` was reached through `previous` at `distance`,
/// strictly improving its best known distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub node: NodeId,
    pub distance: Distance,
    pub previous: NodeId,
}
