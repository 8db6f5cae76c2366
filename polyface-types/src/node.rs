//! Type nodes and the face graph
//!
//! A [`TypeNode`] is a shared handle to an immutable type definition. Nodes
//! declare the types whose interface they support ("faces"), forming a DAG
//! that is walked breadth-first for subtype checks. Generic nodes produce
//! anonymous specializations through their `specify` rule; every call builds a
//! fresh node, so nodes compare structurally and never by address.

use crate::error::{ConfigurationError, SyntaxError, TypeResult};
use crate::param::{param_equal, Param};
use crate::typed_value::TypedValue;
use crate::value::Value;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

/// Parses a literal into a payload; may receive type-specific options
pub type ParseFn = Arc<dyn Fn(&str, &[Param]) -> Result<Value, SyntaxError> + Send + Sync>;

/// Builds a payload from raw data
pub type CreateFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// Serializes a payload; may receive type-specific options
pub type StringifyFn = Arc<dyn Fn(&Value, &[Param]) -> String + Send + Sync>;

/// Builds a specialization of the given generic node
pub type SpecifyFn = Arc<dyn Fn(&TypeNode, &[Param]) -> TypeResult<TypeNode> + Send + Sync>;

/// Configuration record for a type node, validated once by [`TypeNode::new`]
#[derive(Clone, Default)]
pub struct TypeSpec {
    pub name: Option<String>,
    pub template: Option<TypeNode>,
    pub params: Vec<Param>,
    pub faces: Vec<TypeNode>,
    pub is_abstract: bool,
    pub parse: Option<ParseFn>,
    pub create: Option<CreateFn>,
    pub stringify: Option<StringifyFn>,
    pub specify: Option<SpecifyFn>,
}

impl TypeSpec {
    /// Start a named type
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Start an anonymous specialization of `template`.
    ///
    /// The template is recorded both as the origin and as the first face.
    pub fn specialization(template: &TypeNode, params: Vec<Param>) -> Self {
        Self {
            template: Some(template.clone()),
            params,
            faces: vec![template.clone()],
            ..Self::default()
        }
    }

    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_face(mut self, face: &TypeNode) -> Self {
        self.faces.push(face.clone());
        self
    }

    pub fn with_faces<'a>(mut self, faces: impl IntoIterator<Item = &'a TypeNode>) -> Self {
        self.faces.extend(faces.into_iter().cloned());
        self
    }

    pub fn with_params(mut self, params: Vec<Param>) -> Self {
        self.params = params;
        self
    }

    pub fn with_parse<F>(mut self, parse: F) -> Self
    where
        F: Fn(&str, &[Param]) -> Result<Value, SyntaxError> + Send + Sync + 'static,
    {
        self.parse = Some(Arc::new(parse));
        self
    }

    pub fn with_create<F>(mut self, create: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        self.create = Some(Arc::new(create));
        self
    }

    pub fn with_stringify<F>(mut self, stringify: F) -> Self
    where
        F: Fn(&Value, &[Param]) -> String + Send + Sync + 'static,
    {
        self.stringify = Some(Arc::new(stringify));
        self
    }

    pub fn with_specify<F>(mut self, specify: F) -> Self
    where
        F: Fn(&TypeNode, &[Param]) -> TypeResult<TypeNode> + Send + Sync + 'static,
    {
        self.specify = Some(Arc::new(specify));
        self
    }

    /// Validate and freeze into a node
    pub fn build(self) -> Result<TypeNode, ConfigurationError> {
        TypeNode::new(self)
    }
}

struct TypeDef {
    name: Option<String>,
    template: Option<TypeNode>,
    params: Vec<Param>,
    faces: Box<[TypeNode]>,
    is_abstract: bool,
    parse: Option<ParseFn>,
    create: Option<CreateFn>,
    stringify: Option<StringifyFn>,
    specify: Option<SpecifyFn>,
}

/// Shared handle to an immutable type definition
#[derive(Clone)]
pub struct TypeNode(Arc<TypeDef>);

impl TypeNode {
    /// Validate a configuration record and freeze it into a node.
    ///
    /// A node needs a name, or a template together with non-empty params.
    /// A concrete node needs `stringify` and at least one of `parse` and
    /// `create`.
    pub fn new(spec: TypeSpec) -> Result<TypeNode, ConfigurationError> {
        let named = spec.name.as_deref().is_some_and(|name| !name.is_empty());
        let specialized = spec.template.is_some() && !spec.params.is_empty();
        if !named && !specialized {
            return Err(ConfigurationError::InvalidSpecification);
        }

        let def = TypeDef {
            name: spec.name.filter(|name| !name.is_empty()),
            template: spec.template,
            params: spec.params,
            faces: spec.faces.into_boxed_slice(),
            is_abstract: spec.is_abstract,
            parse: spec.parse,
            create: spec.create,
            stringify: spec.stringify,
            specify: spec.specify,
        };

        let has_constructor = def.parse.is_some() || def.create.is_some();
        if !def.is_abstract && !(has_constructor && def.stringify.is_some()) {
            let node = TypeNode(Arc::new(def));
            return Err(ConfigurationError::InvalidInterface {
                type_name: node.to_string(),
            });
        }

        Ok(TypeNode(Arc::new(def)))
    }

    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    pub fn template(&self) -> Option<&TypeNode> {
        self.0.template.as_ref()
    }

    pub fn params(&self) -> &[Param] {
        &self.0.params
    }

    pub fn faces(&self) -> &[TypeNode] {
        &self.0.faces
    }

    pub fn is_abstract(&self) -> bool {
        self.0.is_abstract
    }

    /// Whether this node can be specialized
    pub fn is_generic(&self) -> bool {
        self.0.specify.is_some()
    }

    /// Identity comparison; see [`TypeNode::is_equal`] for type equality
    pub fn ptr_eq(&self, other: &TypeNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Structural equality: same template chain, same name, equal params.
    ///
    /// Faces take no part in equality.
    pub fn is_equal(&self, other: &TypeNode) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        let templates_match = match (self.template(), other.template()) {
            (Some(mine), Some(theirs)) => mine.is_equal(theirs),
            (None, None) => true,
            _ => false,
        };

        templates_match && self.name() == other.name() && param_equal(self.params(), other.params())
    }

    /// Whether `other` is reachable from this node through faces, self included
    pub fn is_implements(&self, other: &TypeNode) -> bool {
        self.get_implementation(other).is_some()
    }

    /// First node in breadth-first face order that equals `other`
    pub fn get_implementation(&self, other: &TypeNode) -> Option<TypeNode> {
        self.all_implements().find(|current| current.is_equal(other))
    }

    /// Breadth-first walk over this node and everything it implements
    pub fn all_implements(&self) -> Implementations {
        Implementations::new(self)
    }

    /// Produce a specialization of this generic node.
    ///
    /// The result must name this node as its template and list it among its
    /// faces.
    pub fn specify(&self, params: &[Param]) -> TypeResult<TypeNode> {
        let specify = self
            .0
            .specify
            .as_ref()
            .ok_or_else(|| ConfigurationError::NotGeneric {
                type_name: self.to_string(),
            })?;
        let specialized = specify(self, params)?;
        let from_self = specialized
            .template()
            .is_some_and(|template| template.is_equal(self));
        if !from_self || !specialized.faces().iter().any(|face| face.is_equal(self)) {
            return Err(ConfigurationError::InvalidSpecialization {
                type_name: self.to_string(),
                specialized: specialized.to_string(),
            }
            .into());
        }
        tracing::trace!("specialized {} as {}", self, specialized);
        Ok(specialized)
    }

    /// Run the `parse` rule without wrapping
    pub fn parse(&self, source: &str, params: &[Param]) -> TypeResult<Value> {
        let parse = self.0.parse.as_ref().ok_or_else(|| self.missing("parse"))?;
        Ok(parse(source, params)?)
    }

    /// Run the `create` rule without wrapping
    pub fn create(&self, data: &[Value]) -> TypeResult<Value> {
        let create = self.0.create.as_ref().ok_or_else(|| self.missing("create"))?;
        Ok(create(data))
    }

    /// Serialize a payload of this type.
    ///
    /// Abstract nodes without a serializer fall back to the payload's own
    /// display form.
    pub fn stringify(&self, value: &Value, params: &[Param]) -> String {
        match &self.0.stringify {
            Some(stringify) => stringify(value, params),
            None => value.to_string(),
        }
    }

    /// Tag a payload with this type without validation
    pub fn from_value(&self, value: impl Into<Value>) -> TypedValue {
        TypedValue::new(self.clone(), value.into())
    }

    /// Parse a literal into a typed value; parse failures propagate unchanged
    pub fn from_string(&self, source: &str, params: &[Param]) -> TypeResult<TypedValue> {
        Ok(self.from_value(self.parse(source, params)?))
    }

    /// Build a typed value from raw data through the `create` rule
    pub fn from_data(&self, data: &[Value]) -> TypeResult<TypedValue> {
        Ok(self.from_value(self.create(data)?))
    }

    fn missing(&self, operation: &'static str) -> ConfigurationError {
        ConfigurationError::MissingOperation {
            type_name: self.to_string(),
            operation,
        }
    }
}

impl PartialEq for TypeNode {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name() {
            f.write_str(name)?;
        }
        if let Some(template) = self.template() {
            if self.name().is_some() {
                f.write_str(" ")?;
            }
            write!(f, "{template}")?;
        }
        if !self.params().is_empty() {
            let params: Vec<String> = self.params().iter().map(|p| p.to_string()).collect();
            write!(f, "<{}>", params.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeNode")
            .field("type", &self.to_string())
            .field("faces", &self.faces())
            .field("is_abstract", &self.is_abstract())
            .finish()
    }
}

/// Breadth-first iterator over the face graph.
///
/// Shared ancestors are visited once; the visited set is keyed by node
/// identity.
pub struct Implementations {
    queue: VecDeque<TypeNode>,
    seen: HashSet<*const TypeDef>,
}

impl Implementations {
    fn new(start: &TypeNode) -> Self {
        let mut seen = HashSet::new();
        seen.insert(Arc::as_ptr(&start.0));
        Self {
            queue: VecDeque::from([start.clone()]),
            seen,
        }
    }
}

impl Iterator for Implementations {
    type Item = TypeNode;

    fn next(&mut self) -> Option<TypeNode> {
        let current = self.queue.pop_front()?;
        for face in current.faces() {
            if self.seen.insert(Arc::as_ptr(&face.0)) {
                self.queue.push_back(face.clone());
            }
        }
        Some(current)
    }
}
