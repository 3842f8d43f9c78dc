//! Catalog-driven translation resolution.
//!
//! The resolver is the user-facing surface: four operations sharing one
//! algorithm core. Every operation returns a `String` and never errors;
//! failures degrade to untranslated text plus a diagnostic, because a
//! localization failure must never break rendering.

use std::sync::Arc;

use bon::Builder;

use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink};
use crate::inject::inject;
use crate::interpreter::{EvalError, compile};
use crate::key::{GLUE, build_key};
use crate::types::{Catalog, Value};

/// Default `Plural-Forms` header: the permissive two-form
/// "not-equal-to-one" rule conventional for source languages with two
/// plural forms. Catalogs in richly-inflected target languages are
/// expected to supply their own multi-form header.
pub const DEFAULT_PLURAL_FORMS: &str = "nplurals=2; plural=(n != 1)";

/// Translation resolver over caller-owned catalogs.
///
/// The resolver holds no catalog state of its own: the catalog travels
/// inside the runtime context passed to every call, located at the
/// configured context key. The only shared mutable state behind a
/// resolver is the per-thread plural-rule compile cache, so a single
/// instance is safe to share across threads.
///
/// # Example
///
/// ```
/// use glossa::{Resolver, context};
///
/// let resolver = Resolver::new();
/// let ctx = context! { "name" => "Dude" };
///
/// // No catalog in the context: untranslated phrases render as-authored.
/// assert_eq!(resolver.resolve_simple("hello $name", Some(&ctx)), "hello Dude");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Resolver {
    /// Separator joining context and phrase in composite catalog keys.
    #[builder(default = GLUE)]
    glue: char,

    /// `Plural-Forms` header used when the catalog supplies none.
    #[builder(default = DEFAULT_PLURAL_FORMS.to_string())]
    default_plural_forms: String,

    /// Dotted path locating the catalog inside the runtime context.
    #[builder(default = "l10n".to_string())]
    context_key: String,

    /// When set, calling a `resolve_*` operation without a runtime context
    /// reports `MissingArgument` and returns the phrase untranslated.
    /// When unset (the default), a missing context is treated as an
    /// absent catalog and resolution proceeds with the identity fallback.
    #[builder(default)]
    strict_arguments: bool,

    /// Collaborator receiving every diagnostic.
    #[builder(default = Arc::new(NullSink))]
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::builder().build()
    }
}

impl Resolver {
    /// Create a resolver with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a simple phrase with no disambiguation context.
    ///
    /// Looks up the phrase in the catalog and takes the first translated
    /// form; when no entry exists the phrase itself is the template.
    /// The chosen template is then run through variable injection.
    pub fn resolve_simple(&self, phrase: &str, ctx: Option<&Value>) -> String {
        self.resolve(None, phrase, ctx, "resolve_simple")
    }

    /// Resolve a phrase whose translation depends on a disambiguation
    /// context (catalog key `context + glue + phrase`).
    pub fn resolve_with_context(&self, context: &str, phrase: &str, ctx: Option<&Value>) -> String {
        self.resolve(Some(context), phrase, ctx, "resolve_with_context")
    }

    /// Resolve a phrase inflected by a count.
    ///
    /// `plural_forms` is the caller-supplied fallback sequence for when the
    /// catalog has no entry; the phrase itself is the implicit form 0 and
    /// the supplied forms follow. An out-of-range form index clamps to the
    /// last available fallback and reports a diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// use glossa::Resolver;
    ///
    /// let resolver = Resolver::new();
    /// assert_eq!(resolver.resolve_plural("photo", &["photos"], 1, None), "photo");
    /// assert_eq!(resolver.resolve_plural("photo", &["photos"], 3, None), "photos");
    /// ```
    pub fn resolve_plural(
        &self,
        phrase: &str,
        plural_forms: &[&str],
        count: i64,
        ctx: Option<&Value>,
    ) -> String {
        self.resolve_plural_form(None, phrase, plural_forms, count, ctx, "resolve_plural")
    }

    /// Resolve a phrase that is both context-disambiguated and inflected
    /// by a count.
    pub fn resolve_plural_with_context(
        &self,
        context: &str,
        phrase: &str,
        plural_forms: &[&str],
        count: i64,
        ctx: Option<&Value>,
    ) -> String {
        self.resolve_plural_form(
            Some(context),
            phrase,
            plural_forms,
            count,
            ctx,
            "resolve_plural_with_context",
        )
    }

    /// Shared core for the two non-plural operations.
    fn resolve(
        &self,
        context: Option<&str>,
        phrase: &str,
        ctx: Option<&Value>,
        function: &'static str,
    ) -> String {
        if self.reject_missing_context(ctx, function) {
            return phrase.to_string();
        }
        let catalog = Catalog::locate(ctx, &self.context_key);
        let key = build_key(context, phrase, self.glue);
        let template = catalog.form(&key, 1).unwrap_or(phrase);
        inject(template, ctx, self.sink.as_ref())
    }

    /// Shared core for the two plural operations.
    fn resolve_plural_form(
        &self,
        context: Option<&str>,
        phrase: &str,
        plural_forms: &[&str],
        count: i64,
        ctx: Option<&Value>,
        function: &'static str,
    ) -> String {
        if self.reject_missing_context(ctx, function) {
            return phrase.to_string();
        }
        let catalog = Catalog::locate(ctx, &self.context_key);
        let key = build_key(context, phrase, self.glue);

        let expression = catalog.plural_forms().unwrap_or(&self.default_plural_forms);
        let index = self.form_index(expression, count);

        // Catalog entries store [canonical, form_0, form_1, ...].
        let template = match catalog.form(&key, index + 1) {
            Some(form) => form,
            None => self.fallback_form(phrase, plural_forms, index),
        };
        inject(template, ctx, self.sink.as_ref())
    }

    /// Apply the missing-argument policy. Returns true when the call must
    /// degrade to the untranslated phrase.
    fn reject_missing_context(&self, ctx: Option<&Value>, function: &'static str) -> bool {
        if ctx.is_none() && self.strict_arguments {
            self.sink.report(Diagnostic::MissingArgument { function });
            return true;
        }
        false
    }

    /// Compile the header (memoized) and evaluate it at the count.
    ///
    /// Compilation failures, division by zero, and negative results all
    /// degrade to form 0 with a diagnostic; a result beyond the declared
    /// `nplurals` clamps to the last declared form.
    fn form_index(&self, expression: &str, count: i64) -> usize {
        let rule = match compile(expression) {
            Ok(rule) => rule,
            Err(error) => {
                self.sink.report(error.into());
                return 0;
            }
        };
        let raw = match rule.evaluate(count) {
            Ok(raw) => raw,
            Err(EvalError::DivisionByZero { n }) => {
                self.sink.report(Diagnostic::DivisionByZero { n });
                return 0;
            }
        };
        if raw < 0 {
            self.sink.report(Diagnostic::FormOutOfRange {
                index: raw,
                available: rule.nplurals().unwrap_or(0),
            });
            return 0;
        }
        let index = raw as usize;
        match rule.nplurals() {
            Some(nplurals) if index >= nplurals => {
                self.sink.report(Diagnostic::FormOutOfRange {
                    index: raw,
                    available: nplurals,
                });
                nplurals - 1
            }
            _ => index,
        }
    }

    /// Pick the caller-supplied fallback form for an index, clamping
    /// out-of-range indices to the last available form.
    fn fallback_form<'a>(&self, phrase: &'a str, plural_forms: &[&'a str], index: usize) -> &'a str {
        if index == 0 {
            return phrase;
        }
        if let Some(form) = plural_forms.get(index - 1) {
            return form;
        }
        self.sink.report(Diagnostic::FormOutOfRange {
            index: index as i64,
            available: plural_forms.len() + 1,
        });
        plural_forms.last().copied().unwrap_or(phrase)
    }
}
