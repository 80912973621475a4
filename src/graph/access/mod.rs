//! Internal graph building blocks.
//!
//! This module is `pub(crate)` so traversals can share helpers without
//! exposing them as part of the public API surface.

pub(crate) mod visited;
