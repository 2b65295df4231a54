pub mod edge_row;
pub mod element;
pub mod label;

pub use edge_row::{EdgeRow, RawEdgeRow, RawWeight};
pub use element::{EdgeElement, Element, NodeElement};
pub use label::Label;
