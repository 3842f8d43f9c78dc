//! Read-only view over the translation catalog carried in a runtime context.
//!
//! A catalog is a flat mapping from composite key to an ordered list of
//! strings `[canonical, form_0, form_1, ...]`, with the reserved
//! empty-string key holding metadata such as the `plural-forms` header.
//! The view never mutates the underlying value; an absent catalog behaves
//! exactly like an empty one.

use super::Value;

/// A borrowed catalog view located inside a caller-supplied runtime context.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    root: Option<&'a Value>,
}

impl<'a> Catalog<'a> {
    /// Locate the catalog at a dotted path inside the runtime context.
    ///
    /// A missing context, missing path, or non-map value at the path all
    /// yield an empty catalog.
    pub fn locate(ctx: Option<&'a Value>, context_key: &str) -> Self {
        let root = ctx
            .and_then(|value| value.lookup_path(context_key))
            .filter(|value| matches!(value, Value::Map(_)));
        Catalog { root }
    }

    /// The ordered forms list for a composite key, if present.
    pub fn entry(&self, key: &str) -> Option<&'a [Value]> {
        match self.root?.get(key)? {
            Value::List(forms) => Some(forms),
            _ => None,
        }
    }

    /// The form string at an index within an entry.
    ///
    /// Index 0 is the canonical source slot; translated forms start at 1.
    /// Missing entries, out-of-range indices, and non-string elements all
    /// yield `None`.
    pub fn form(&self, key: &str, index: usize) -> Option<&'a str> {
        self.entry(key)?.get(index)?.as_string()
    }

    /// The catalog-wide `plural-forms` header from the metadata entry.
    pub fn plural_forms(&self) -> Option<&'a str> {
        self.root?.get("")?.get("plural-forms")?.as_string()
    }
}
