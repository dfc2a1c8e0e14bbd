//! Interned type table.
//!
//! Types are referenced by `TypeId`, a copyable handle compared by identity.
//! The analyzer only ever asks four things of a type: its name, its
//! namespace, its base type, and the interfaces it directly implements.
//! Those queries form the `TypeDatabase` trait; `TypeTable` is the in-memory
//! implementation hosts and tests populate.

use resplint_common::limits::{INLINE_INTERFACE_CAPACITY, MAX_BASE_CHAIN_DEPTH};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Handle to a type in a `TypeDatabase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub u32);

/// What sort of type declaration a `TypeId` refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
}

/// Type queries the analyzer needs from its host.
///
/// Every query returns `None` (or an empty slice) for ids the database does
/// not know; callers treat that as "unresolvable" rather than an error.
pub trait TypeDatabase: Sync {
    fn type_name(&self, id: TypeId) -> Option<&str>;
    fn type_namespace(&self, id: TypeId) -> Option<&str>;
    fn type_kind(&self, id: TypeId) -> Option<TypeKind>;
    /// Direct base type; `None` at the root of the hierarchy.
    fn base_type(&self, id: TypeId) -> Option<TypeId>;
    /// Interfaces listed directly on the declaration (not inherited ones).
    fn interfaces(&self, id: TypeId) -> &[TypeId];
}

/// Walk `start` and its base types, nearest first.
///
/// The walk ends at the hierarchy root or after `MAX_BASE_CHAIN_DEPTH`
/// links, whichever comes first, so a cyclic model cannot hang a caller.
pub fn base_chain(db: &dyn TypeDatabase, start: Option<TypeId>) -> BaseChain<'_> {
    BaseChain {
        db,
        next: start,
        remaining: MAX_BASE_CHAIN_DEPTH,
    }
}

pub struct BaseChain<'a> {
    db: &'a dyn TypeDatabase,
    next: Option<TypeId>,
    remaining: usize,
}

impl Iterator for BaseChain<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        if self.remaining == 0 {
            if self.next.is_some() {
                tracing::debug!(at = ?self.next, "base chain depth limit reached");
                self.next = None;
            }
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.db.base_type(current);
        Some(current)
    }
}

/// Declaration data of one interned type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeData {
    pub name: String,
    pub namespace: String,
    pub kind: TypeKind,
    pub base: Option<TypeId>,
    pub interfaces: SmallVec<[TypeId; INLINE_INTERFACE_CAPACITY]>,
}

impl TypeData {
    /// `Namespace.Name`, or just `Name` in the global namespace.
    pub fn qualified_name(&self) -> String {
        qualify(&self.namespace, &self.name)
    }
}

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    types: Vec<TypeData>,
    by_qualified_name: FxHashMap<String, TypeId>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Intern a type by qualified name. Defining an existing name returns the
    /// existing id and leaves its data untouched.
    pub fn define(&mut self, namespace: &str, name: &str, kind: TypeKind) -> TypeId {
        let qualified = qualify(namespace, name);
        if let Some(&existing) = self.by_qualified_name.get(&qualified) {
            return existing;
        }
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeData {
            name: name.to_string(),
            namespace: namespace.to_string(),
            kind,
            base: None,
            interfaces: SmallVec::new(),
        });
        self.by_qualified_name.insert(qualified, id);
        id
    }

    pub fn define_class(&mut self, namespace: &str, name: &str, base: Option<TypeId>) -> TypeId {
        let id = self.define(namespace, name, TypeKind::Class);
        if base.is_some() {
            self.set_base(id, base);
        }
        id
    }

    pub fn define_interface(&mut self, namespace: &str, name: &str) -> TypeId {
        self.define(namespace, name, TypeKind::Interface)
    }

    pub fn set_base(&mut self, id: TypeId, base: Option<TypeId>) {
        if let Some(data) = self.types.get_mut(id.0 as usize) {
            data.base = base;
        }
    }

    pub fn add_interface(&mut self, id: TypeId, interface: TypeId) {
        if let Some(data) = self.types.get_mut(id.0 as usize)
            && !data.interfaces.contains(&interface)
        {
            data.interfaces.push(interface);
        }
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    /// Look up by `Namespace.Name`.
    pub fn lookup(&self, qualified_name: &str) -> Option<TypeId> {
        self.by_qualified_name.get(qualified_name).copied()
    }

    /// Resolve a type reference as written by a host: the qualified name if
    /// it is one, otherwise the first type defined with that simple name.
    pub fn resolve_name(&self, name: &str) -> Option<TypeId> {
        if let Some(id) = self.lookup(name) {
            return Some(id);
        }
        self.types
            .iter()
            .position(|data| data.name == name)
            .map(|index| TypeId(index as u32))
    }

    pub fn qualified_name(&self, id: TypeId) -> Option<String> {
        self.get(id).map(TypeData::qualified_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeData)> {
        self.types
            .iter()
            .enumerate()
            .map(|(index, data)| (TypeId(index as u32), data))
    }
}

impl TypeDatabase for TypeTable {
    fn type_name(&self, id: TypeId) -> Option<&str> {
        self.get(id).map(|data| data.name.as_str())
    }

    fn type_namespace(&self, id: TypeId) -> Option<&str> {
        self.get(id).map(|data| data.namespace.as_str())
    }

    fn type_kind(&self, id: TypeId) -> Option<TypeKind> {
        self.get(id).map(|data| data.kind)
    }

    fn base_type(&self, id: TypeId) -> Option<TypeId> {
        self.get(id).and_then(|data| data.base)
    }

    fn interfaces(&self, id: TypeId) -> &[TypeId] {
        self.get(id)
            .map(|data| data.interfaces.as_slice())
            .unwrap_or(&[])
    }
}
