//! Named operator registry
//!
//! Maps operator names to overload tables so that an evaluator can resolve
//! `name(args...)` without knowing anything about the types involved. Tables
//! are created on the first registration for a name.

use crate::error::{DispatchResult, LookupError};
use crate::function::{TypeRule, TypedFunction};
use crate::table::{OverloadTable, Signature};
use indexmap::IndexMap;
use polyface_types::{TypeResult, TypedValue, Value};

/// Operator name to overload table map
#[derive(Debug, Clone, Default)]
pub struct NamedRegistry {
    tables: IndexMap<String, OverloadTable>,
}

impl NamedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from (name, signature, implementation) entries
    pub fn from_entries<N, S>(entries: impl IntoIterator<Item = (N, S, TypedFunction)>) -> Self
    where
        N: AsRef<str>,
        S: Into<Signature>,
    {
        let mut registry = Self::new();
        for (name, signature, function) in entries {
            registry.add(name.as_ref(), signature, function);
        }
        registry
    }

    /// Register an implementation, creating the table for an unseen name
    pub fn add(&mut self, name: &str, signature: impl Into<Signature>, function: TypedFunction) {
        if !self.tables.contains_key(name) {
            tracing::debug!("creating overload table for {}", name);
        }
        self.tables
            .entry(name.to_string())
            .or_default()
            .add(signature, function);
    }

    /// Wrap a (type rule, value rule) pair and register it
    pub fn add_rules<F>(
        &mut self,
        name: &str,
        signature: impl Into<Signature>,
        type_rule: impl Into<TypeRule>,
        value_rule: F,
    ) where
        F: Fn(&[TypedValue]) -> TypeResult<Value> + Send + Sync + 'static,
    {
        self.add(name, signature, TypedFunction::new(type_rule, value_rule));
    }

    /// Non-strict lookup
    pub fn get(&self, name: &str) -> Option<&OverloadTable> {
        self.tables.get(name)
    }

    /// Strict lookup; an unknown name is a [`LookupError`]
    pub fn get_strict(&self, name: &str) -> Result<&OverloadTable, LookupError> {
        self.get(name)
            .ok_or_else(|| LookupError::unknown_operator(name))
    }

    /// Strict lookup followed by dispatch on the arguments
    pub fn call(&self, name: &str, args: &[TypedValue]) -> DispatchResult<TypedValue> {
        self.get_strict(name)?.call(args)
    }

    /// Registered operator names in registration order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Bind grouping tokens to tables once, for a tokenizer to resolve later.
    ///
    /// Every operator named in the binding must already be registered.
    pub fn create_factory(&self, binding: &Binding) -> Result<TableFactory<'_>, LookupError> {
        let routes = match binding {
            Binding::Single(name) => Routes::Single(self.get_strict(name)?),
            Binding::Grouped(pairs) => {
                let mut routes = IndexMap::with_capacity(pairs.len());
                for (token, name) in pairs {
                    routes.insert(token.clone(), self.get_strict(name)?);
                }
                Routes::Grouped(routes)
            }
        };

        let mut kit: Vec<&OverloadTable> = Vec::new();
        let referenced: Vec<&OverloadTable> = match &routes {
            Routes::Single(table) => vec![*table],
            Routes::Grouped(routes) => routes.values().copied().collect(),
        };
        for table in referenced {
            if !kit.iter().any(|known| std::ptr::eq(*known, table)) {
                kit.push(table);
            }
        }

        Ok(TableFactory { routes, kit })
    }
}

/// Which operators a table factory resolves, and for which grouping tokens
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// Every token resolves to the same operator
    Single(String),
    /// (grouping token, operator name) pairs
    Grouped(Vec<(String, String)>),
}

impl From<&str> for Binding {
    fn from(name: &str) -> Self {
        Binding::Single(name.to_string())
    }
}

impl<T: Into<String>, N: Into<String>> FromIterator<(T, N)> for Binding {
    fn from_iter<I: IntoIterator<Item = (T, N)>>(pairs: I) -> Self {
        Binding::Grouped(
            pairs
                .into_iter()
                .map(|(token, name)| (token.into(), name.into()))
                .collect(),
        )
    }
}

/// A token descriptor handed over by a tokenizer, identified by its bracket
pub trait GroupingToken {
    fn bracket(&self) -> &str;
}

impl GroupingToken for str {
    fn bracket(&self) -> &str {
        self
    }
}

impl GroupingToken for String {
    fn bracket(&self) -> &str {
        self
    }
}

#[derive(Debug)]
enum Routes<'r> {
    Single(&'r OverloadTable),
    Grouped(IndexMap<String, &'r OverloadTable>),
}

/// Grouping token to overload table resolver produced by
/// [`NamedRegistry::create_factory`]
#[derive(Debug)]
pub struct TableFactory<'r> {
    routes: Routes<'r>,
    kit: Vec<&'r OverloadTable>,
}

impl<'r> TableFactory<'r> {
    /// Table bound to the token's bracket, if any
    pub fn resolve<T: GroupingToken + ?Sized>(&self, token: &T) -> Option<&'r OverloadTable> {
        match &self.routes {
            Routes::Single(table) => Some(*table),
            Routes::Grouped(routes) => routes.get(token.bracket()).copied(),
        }
    }

    /// Every distinct table this factory can hand out
    pub fn kit(&self) -> &[&'r OverloadTable] {
        &self.kit
    }
}
