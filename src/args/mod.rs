//! Argument handling pipeline for unrar-wrapper.
//!
//! This module provides a structured, declarative approach to turning a
//! legacy unrar invocation into a unar/lsar one:
//!
//! ```text
//! unrar argv → Parse → Translate → Classify → Expand → Assemble → SpawnParams
//! ```
//!
//! Translation and classification are pure functions that can be
//! unit-tested independently; list-file expansion is the only stage that
//! touches the filesystem.

mod assembler;
mod classifier;
mod pipeline;
mod translator;

pub use assembler::ArgAssembler;
pub use classifier::{classify, ClassifyResult};
pub use pipeline::{build_spawn_params, SpawnParams, LSAR_REST_WARNING};
pub use translator::{translate, Program, Translation};
