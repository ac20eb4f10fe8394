//! Portable SQL function rendering.
//!
//! Hosts parse calls like `concat(a, b)` against a portable function
//! vocabulary; engines disagree on the spelling. A dialect maps portable
//! names to a [`FunctionForm`] describing the engine's call syntax, and the
//! host asks the dialect to render the call instead of emitting it
//! verbatim.

use std::collections::HashMap;

use crate::types::TypeCode;

/// How a portable function call is rendered for an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionForm {
    /// A plain named call: `name(arg1, arg2, ...)`.
    ///
    /// Used to rename functions, e.g. portable `substring` rendered through
    /// the engine's `substr`.
    Named(&'static str),

    /// Arguments joined by an infix fragment, wrapped in optional prefix
    /// and suffix fragments.
    ///
    /// `concat` on engines with a concatenation operator uses
    /// `Infix { prefix: "", separator: "||", suffix: "" }`, rendering
    /// `a||b||c`.
    Infix {
        /// Fragment emitted before the first argument.
        prefix: &'static str,
        /// Fragment emitted between arguments.
        separator: &'static str,
        /// Fragment emitted after the last argument.
        suffix: &'static str,
    },

    /// A parameterized template with 1-based placeholders `?1` through
    /// `?9`, e.g. `"?1 % ?2"` for a modulo operator.
    ///
    /// Placeholders with no matching argument are emitted verbatim, so a
    /// call site missing arguments stays visible in the generated SQL
    /// instead of silently losing tokens.
    Template(&'static str),
}

impl FunctionForm {
    /// Renders a call with the given pre-rendered argument fragments.
    #[must_use]
    pub fn render(&self, args: &[&str]) -> String {
        match self {
            Self::Named(name) => format!("{name}({})", args.join(", ")),
            Self::Infix {
                prefix,
                separator,
                suffix,
            } => format!("{prefix}{}{suffix}", args.join(separator)),
            Self::Template(template) => expand_template(template, args),
        }
    }
}

/// Substitutes `?1`..`?9` placeholders with the matching argument.
fn expand_template(template: &str, args: &[&str]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '?' {
            rendered.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some(digit @ '1'..='9') => {
                chars.next();
                let index = digit as usize - '1' as usize;
                if let Some(arg) = args.get(index) {
                    rendered.push_str(arg);
                } else {
                    rendered.push('?');
                    rendered.push(digit);
                }
            }
            _ => rendered.push('?'),
        }
    }

    rendered
}

/// A portable function's engine-specific rendering plus the abstract type
/// of its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlFunction {
    /// Call syntax on this engine.
    pub form: FunctionForm,
    /// Abstract type of the function's result, for the host's type
    /// inference.
    pub returns: TypeCode,
}

/// Immutable mapping from portable function name to [`SqlFunction`].
///
/// Built once from a fixed table at dialect construction. Table keys are
/// lowercase; lookups are ASCII-case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct FunctionMapping {
    entries: HashMap<&'static str, SqlFunction>,
}

impl FunctionMapping {
    /// Builds the mapping from a table of `(name, function)` rows.
    ///
    /// Keys are expected to be unique and lowercase; a duplicated name
    /// keeps the last row of the table.
    #[must_use]
    pub fn from_table(table: &[(&'static str, SqlFunction)]) -> Self {
        Self {
            entries: table.iter().copied().collect(),
        }
    }

    /// Looks up a portable function by name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SqlFunction> {
        self.entries.get(name.to_ascii_lowercase().as_str())
    }

    /// Returns the number of mapped functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
