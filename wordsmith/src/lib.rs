//! Wordsmith - String validation and manipulation toolkit
//!
//! The [`Wordsmith`] engine dispatches function calls by name over a registry
//! preloaded with the text library. The typed functions are re-exported for
//! callers that do not need dynamic dispatch.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use wordsmith_plugin::{EvalContext, FunctionMeta};

pub use wordsmith_core::{codes, Number, Value, WordsmithError};
pub use wordsmith_plugin::{PluginRegistry, TraceStep};
pub use wordsmith_text::{
    compress, generate, manipulate, patterns, range, roman, validate, vault,
    load_text_library, prettify, roman_range, RangeArgs, RomanRange, TextError, Vault,
};

/// Registry with every text function loaded
pub fn text_registry() -> PluginRegistry {
    load_text_library(PluginRegistry::new())
}

/// Outcome of a batch of calls
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub values: Vec<Value>,
    pub errors: Vec<WordsmithError>,
    pub trace: Vec<TraceStep>,
}

impl BatchResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Serialize)]
struct Catalog {
    count: usize,
    functions: Vec<FunctionMeta>,
}

/// Main Wordsmith engine
pub struct Wordsmith {
    registry: Arc<PluginRegistry>,
    tracing: bool,
}

impl Wordsmith {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            tracing: false,
        }
    }

    pub fn with_text_library() -> Self {
        Self::new(text_registry())
    }

    /// Record every call of a batch in [`BatchResult::trace`]
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    /// Call one function by name
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        let mut ctx = EvalContext::new(self.registry.clone());
        ctx.call(name, args)
    }

    /// Call several functions in order; a failing call does not stop the rest
    pub fn batch(&self, calls: &[(&str, Vec<Value>)]) -> BatchResult {
        let mut ctx = EvalContext::new(self.registry.clone()).with_tracing(true);
        let values: Vec<Value> = calls
            .iter()
            .map(|(name, args)| ctx.call(name, args))
            .collect();

        let errors: Vec<WordsmithError> = ctx.traced_errors().into_iter().cloned().collect();
        debug!(calls = calls.len(), errors = errors.len(), "batch finished");

        BatchResult {
            values,
            errors,
            trace: if self.tracing { ctx.trace } else { Vec::new() },
        }
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }

    /// Function metadata as JSON, for tooling that lists the library
    pub fn catalog(&self, category: Option<&str>) -> serde_json::Value {
        let functions = self.registry.function_metas(category);
        let catalog = Catalog { count: functions.len(), functions };
        serde_json::to_value(catalog).unwrap_or(serde_json::Value::Null)
    }
}

impl Default for Wordsmith {
    fn default() -> Self {
        Self::with_text_library()
    }
}

/// Build a `Vec<Value>` argument list: `args!["text", 3, true]`
#[macro_export]
macro_rules! args {
    () => { Vec::<$crate::Value>::new() };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Value::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_wordsmith() -> Wordsmith {
        Wordsmith::with_text_library()
    }

    #[test]
    fn test_call_by_name() {
        let ws = test_wordsmith();
        let result = ws.call("prettify", &args![" unprettified string ,, like this one"]);
        assert_eq!(result.as_text(), Some("Unprettified string, like this one"));

        let result = ws.call("ROMAN_DECODE", &args!["MMXX"]);
        assert_eq!(result.as_number().unwrap().to_i64(), Some(2020));
    }

    #[test]
    fn test_unknown_function() {
        let ws = test_wordsmith();
        let result = ws.call("slugfy", &args!["x"]);
        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::UNDEFINED_FUNC);
        assert!(err.suggestion.as_deref().unwrap_or("").contains("slugify"));
    }

    #[test]
    fn test_batch_collects_errors() {
        let ws = test_wordsmith();
        let result = ws.batch(&[
            ("roman_encode", args![12]),
            ("roman_encode", args![4000]),
            ("roman_decode", args!["OK"]),
        ]);
        assert_eq!(result.values.len(), 3);
        assert_eq!(result.values[0].as_text(), Some("XII"));
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[1].code, codes::INVALID_TOKEN);
        assert!(!result.is_ok());
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_batch_trace() {
        let ws = test_wordsmith().with_tracing(true);
        let result = ws.batch(&[("reverse", args!["abc"]), ("booleanize", args!["yes"])]);
        assert!(result.is_ok());
        assert_eq!(result.trace.len(), 2);
        assert_eq!(result.trace[0].function, "reverse");
        assert_eq!(result.trace[1].result.as_bool(), Some(true));
    }

    #[test]
    fn test_help() {
        let ws = test_wordsmith();
        let help = ws.help(Some("roman_range"));
        let obj = help.as_object().unwrap();
        assert_eq!(obj.get("category").unwrap().as_text(), Some("text/roman"));

        let general = ws.help(None);
        assert!(general.as_object().unwrap().contains_key("functions"));
    }

    #[test]
    fn test_catalog() {
        let ws = test_wordsmith();
        let catalog = ws.catalog(Some("text/compress"));
        assert_eq!(catalog["count"], 2);
        assert_eq!(catalog["functions"][0]["name"], "compress");
        assert_eq!(catalog["functions"][0]["args"][1]["default"], "9");

        let all = ws.catalog(None);
        assert_eq!(all["count"], 42);
    }

    #[test]
    fn test_list_functions() {
        let ws = Wordsmith::default();
        let list = ws.list_functions(Some("text/generate"));
        assert_eq!(list.as_list().unwrap().len(), 3);
    }

    #[test]
    fn test_args_macro() {
        let empty = args![];
        assert!(empty.is_empty());
        let args = args!["a", 1, true];
        assert_eq!(args[0].type_name(), "Text");
        assert_eq!(args[1].type_name(), "Number");
        assert_eq!(args[2].type_name(), "Bool");
    }
}
