//! Wordsmith Plugin System
//!
//! Every string function is a [`FunctionPlugin`]: a pure computation over
//! dynamically typed [`Value`](wordsmith_core::Value) arguments, described by
//! [`FunctionMeta`] and dispatched by name through the [`PluginRegistry`].

mod traits;
mod registry;
mod context;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::{EvalContext, TraceStep};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta, ArgMeta,
        PluginRegistry, EvalContext, TraceStep,
    };
    pub use wordsmith_core::prelude::*;
}
