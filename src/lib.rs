//! Workspace root package. It carries repository tooling (pre-commit hooks)
//! and no code of its own; see `crates/flightpath-lib` and
//! `crates/flightpath-cli`.
