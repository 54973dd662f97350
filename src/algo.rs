//! Classical graph algorithms over [`Graph`](crate::Graph).
//!
//! Every operation takes the graph by reference and never mutates it; all
//! transient state (visited sets, distance and predecessor arrays, color
//! assignments) is local to the call. Algorithms that have something to
//! report return a structured result whose `Display` impl reproduces the
//! legacy textual form; each module also has a `*_report` function
//! returning that string directly, including the legacy sentinel for the
//! "not found" case.

pub mod bipartite;
pub mod connected;
pub mod cycle;
pub mod negative_cycle;
pub mod shortest_paths;

pub use bipartite::{bipartition, bipartition_report, Bipartition};
pub use connected::is_connected;
pub use cycle::{find_cycle, is_cyclic, Cycle};
pub use negative_cycle::{negative_cycle, negative_cycle_report, NegativeCycle};
pub use shortest_paths::{shortest_path, shortest_path_report, Path};
