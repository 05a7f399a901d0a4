// Include these modules:
pub mod select;
pub mod text;
pub mod button;

// Module re-exports:
// <https://doc.rust-lang.org/book/ch14-02-publishing-to-crates-io.html#documentation-comments-as-tests>

// Re-export the following modules:
pub use select::*;
pub use text::*;
pub use button::*;
