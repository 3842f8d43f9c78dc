pub mod diagnostics;
pub mod inject;
pub mod interpreter;
pub mod key;
pub mod parser;
pub mod resolver;
pub mod types;

pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, TracingSink};
pub use interpreter::{EvalError, PluralRule, compile};
pub use key::{GLUE, build_key};
pub use parser::{CompileError, parse_header};
pub use resolver::{DEFAULT_PLURAL_FORMS, Resolver};
pub use types::{Catalog, Value};

/// Creates a `Value::Map` runtime context from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or nested `context!` maps directly.
///
/// # Example
///
/// ```
/// use glossa::context;
///
/// let ctx = context! { "count" => 3, "name" => "Alice" };
/// assert_eq!(ctx.lookup_path("count").and_then(|v| v.as_number()), Some(3));
/// assert_eq!(ctx.lookup_path("name").and_then(|v| v.as_string()), Some("Alice"));
/// ```
#[macro_export]
macro_rules! context {
    {} => {
        $crate::Value::Map(::std::collections::HashMap::new())
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<::std::string::String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            $crate::Value::Map(map)
        }
    };
}
