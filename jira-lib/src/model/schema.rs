//! Field schema

use super::value::FieldKind;

/// The wire key prefix for server-defined custom fields.
pub const EXTENSION_PREFIX: &str = "customfield_";

/// Returns true when a wire key names a custom field.
pub fn is_extension_key(key: &str) -> bool {
    key.starts_with(EXTENSION_PREFIX)
}

/// The payload directions a field participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Sent in create payloads only.
    Create,
    /// Sent in update payloads only.
    Update,
    /// Sent in both create and update payloads.
    Both,
    /// Never sent; the server owns the value.
    Read,
}

impl Direction {
    pub fn allows_create(self) -> bool {
        matches!(self, Self::Create | Self::Both)
    }

    pub fn allows_update(self) -> bool {
        matches!(self, Self::Update | Self::Both)
    }
}

/// One entry in a field schema: a logical field name, its wire key, the
/// value kind it holds and the payload directions it participates in.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub wire_key: &'static str,
    pub kind: FieldKind,
    pub direction: Direction,
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        wire_key: &'static str,
        kind: FieldKind,
        direction: Direction,
    ) -> Self {
        Self { name, wire_key, kind, direction }
    }
}

/// A static registry of the structured fields a field set carries.
///
/// Projection walks this table to build payloads and to decode wire maps;
/// nothing is discovered at runtime. Custom fields are not listed here,
/// they are recognised by the [`EXTENSION_PREFIX`] convention instead.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    specs: &'static [FieldSpec],
}

impl FieldSchema {
    pub const fn new(specs: &'static [FieldSpec]) -> Self {
        Self { specs }
    }

    /// Iterates over every field in the schema.
    pub fn specs(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    /// Looks up a field by logical name.
    pub fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Looks up a field by wire key.
    pub fn spec_for_wire_key(&self, wire_key: &str) -> Option<&FieldSpec> {
        self.specs.iter().find(|spec| spec.wire_key == wire_key)
    }

    /// Iterates over the fields sent in create payloads.
    pub fn creatable(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter().filter(|spec| spec.direction.allows_create())
    }

    /// Iterates over the fields sent in update payloads.
    pub fn updatable(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter().filter(|spec| spec.direction.allows_update())
    }
}
