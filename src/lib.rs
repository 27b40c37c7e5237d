//! # Linked List Fundamentals
//!
//! Two small exercises that teach memory and I/O fundamentals:
//!
//! 1. **[`list`]** - a singly-linked list of `i32` values with owned nodes.
//!    Insertion at either end, removal from the front, traversal for
//!    display, and deterministic bulk teardown.
//! 2. **[`shift_copy`](mod@shift_copy)** - a byte-shifting file copy that maps lowercase
//!    ASCII onto uppercase by subtracting 32 from every byte.
//!
//! ## Running the demos
//!
//! ```bash
//! cargo run --bin list_demo
//! cargo run --bin shift_copy_demo
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the typed error surface
//! - `proptest` - Property tests for the list invariants (dev)
//! - `criterion` - Insertion-cost benchmarks (dev)

pub mod list;
pub mod shift_copy;

pub use list::{AllocationError, List};
pub use shift_copy::{shift_copy, CopyError};
