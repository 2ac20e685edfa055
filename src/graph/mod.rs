mod heap;
pub mod shortest_path;
pub mod visibility;

pub use heap::IndexedMinHeap;
pub use shortest_path::PathMatrices;
pub use visibility::Vertex;
