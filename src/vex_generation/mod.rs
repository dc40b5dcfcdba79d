/// Domain layer - VEX generation and upload gating
///
/// Pure business logic: value objects, graph traversal, rollup and
/// upload policies. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
