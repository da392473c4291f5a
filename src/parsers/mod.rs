pub mod dom;
pub mod html;
pub mod text;


pub use dom::{Document, Element, Node};
pub use html::extract;
pub use text::is_meaningful;
