//! Whole-graph structure: connectivity, density, and per-node
//! interdisciplinary diversity.
//!
//! ```text
//! Adjacency
//!    ├─ components::connected_components → ComponentInfo (count, sizes, largest)
//!    ├─ density::density                 → 2E / N(N-1)
//!    └─ diversity::interdisciplinary_diversity → Simpson index per node
//! ```

pub mod components;
pub mod density;
pub mod diversity;

pub use components::{ComponentInfo, connected_components};
pub use density::density;
pub use diversity::{interdisciplinary_diversity, simpson_index};
