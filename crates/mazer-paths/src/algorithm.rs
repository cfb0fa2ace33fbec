//! The closed set of search strategies a caller can select.

use std::fmt;
use std::str::FromStr;

/// Available frontier policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Algorithm {
    /// Breadth-first: oldest discovered cell first. Shortest paths.
    Bfs,
    /// Depth-first: newest discovered cell first.
    Dfs,
    /// Uniformly random pick among discovered cells.
    Random,
    /// Greedy best-first on Manhattan distance to the goal.
    Greedy,
    /// A* on path cost plus Manhattan distance. Shortest paths.
    AStar,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Random,
        Algorithm::Greedy,
        Algorithm::AStar,
    ];

    /// Display name as accepted on the command line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Random => "Random",
            Self::Greedy => "Greedy",
            Self::AStar => "A*",
        }
    }

    /// Whether the policy guarantees a shortest path on an unweighted grid.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Bfs | Self::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-insensitive; `A*`, `astar` and `a-star` all select A*.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "random" => Ok(Self::Random),
            "greedy" => Ok(Self::Greedy),
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = UnknownAlgorithm;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Algorithm> for String {
    fn from(a: Algorithm) -> Self {
        a.label().to_string()
    }
}

/// An algorithm name that does not match any [`Algorithm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d}, expected one of {{BFS, DFS, Random, Greedy, A*}}",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!("DFS".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!("Random".parse::<Algorithm>(), Ok(Algorithm::Random));
        assert_eq!("gReEdY".parse::<Algorithm>(), Ok(Algorithm::Greedy));
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("A-Star".parse::<Algorithm>(), Ok(Algorithm::AStar));
    }

    #[test]
    fn labels_parse_back() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn unknown_name() {
        let err = "dijkstra".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("dijkstra".into()));
        assert!(err.to_string().contains("dijkstra"));
    }

    #[test]
    fn optimality() {
        assert!(Algorithm::Bfs.is_optimal());
        assert!(Algorithm::AStar.is_optimal());
        assert!(!Algorithm::Greedy.is_optimal());
    }
}
