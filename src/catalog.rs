//! Entity catalog
//!
//! The canonical set of entities (ministries) and the surface names matched
//! against document text. Built once per run and immutable afterwards.

use crate::config::IdentifierConvention;
use indexmap::IndexMap;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors raised while building a catalog. All of them are fatal for a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Malformed identifier {identifier:?}: {reason}")]
    MalformedIdentifier { identifier: String, reason: String },

    #[error("Malformed surface name {surface:?} for {identifier:?}: {reason}")]
    MalformedSurface {
        identifier: String,
        surface: String,
        reason: String,
    },

    #[error("Identifiers {first:?} and {second:?} both reduce to entity name {surface:?}")]
    DuplicateEntity {
        surface: String,
        first: String,
        second: String,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Stable identifier of an entity, equal to its document identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId(s)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    /// Lowercase, space-separated, hyphen-free phrase matched in text
    pub surface: String,
}

impl Entity {
    /// Words of the surface name, in order
    pub fn surface_tokens(&self) -> impl Iterator<Item = &str> {
        self.surface.split(' ')
    }
}

/// Split text into matchable word tokens: maximal runs of alphanumeric characters.
///
/// Used for both surface names and document lines, so a surface name matches
/// exactly when its token sequence appears in a line.
pub(crate) fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

/// Ordered, validated set of entities
#[derive(Debug, Clone, Default)]
pub struct EntityCatalog {
    entities: IndexMap<EntityId, Entity>,
    by_surface: FxHashMap<String, usize>,
}

impl EntityCatalog {
    /// Derive a catalog from document identifiers following `convention`.
    ///
    /// `ministry-of-national-defence-mandate-letter` reduces to `national defence`.
    pub fn from_identifiers<I, S>(identifiers: I, convention: &IdentifierConvention) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reducer = IdentifierReducer::new(convention);
        let mut catalog = EntityCatalog::default();
        for identifier in identifiers {
            let identifier = identifier.as_ref();
            let surface = reducer.reduce(identifier)?;
            catalog.insert(EntityId::new(identifier), surface)?;
        }
        debug!("Catalog built with {} entities", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from explicit (identifier, surface name) pairs
    pub fn from_entries<I, K, S>(entries: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<EntityId>,
        S: Into<String>,
    {
        let mut catalog = EntityCatalog::default();
        for (id, surface) in entries {
            let id = id.into();
            let surface = surface.into();
            validate_surface(&id, &surface)?;
            catalog.insert(id, surface)?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, id: EntityId, surface: String) -> CatalogResult<()> {
        if let Some(&idx) = self.by_surface.get(&surface) {
            let first = self.entities[idx].id.to_string();
            return Err(CatalogError::DuplicateEntity {
                surface,
                first,
                second: id.to_string(),
            });
        }
        if self.entities.contains_key(&id) {
            return Err(CatalogError::DuplicateEntity {
                surface,
                first: id.to_string(),
                second: id.to_string(),
            });
        }
        self.by_surface.insert(surface.clone(), self.entities.len());
        self.entities.insert(id.clone(), Entity { id, surface });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    /// Position of an entity in catalog order
    pub fn index_of(&self, id: &EntityId) -> Option<usize> {
        self.entities.get_index_of(id)
    }

    /// Entity at a catalog position
    pub fn entity_at(&self, idx: usize) -> Option<&Entity> {
        self.entities.get_index(idx).map(|(_, e)| e)
    }

    /// Find the entity registered under an exact surface name
    pub fn lookup_surface(&self, surface: &str) -> Option<&Entity> {
        self.by_surface
            .get(surface)
            .and_then(|&idx| self.entity_at(idx))
    }

    /// Entities in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Identifiers in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.entities.keys()
    }
}

fn validate_surface(id: &EntityId, surface: &str) -> CatalogResult<()> {
    let malformed = |reason: &str| CatalogError::MalformedSurface {
        identifier: id.to_string(),
        surface: surface.to_string(),
        reason: reason.to_string(),
    };
    if surface.is_empty() {
        return Err(malformed("surface name is empty"));
    }
    if surface.contains('-') {
        return Err(malformed("surface name must be hyphen-free"));
    }
    if surface.chars().any(char::is_uppercase) {
        return Err(malformed("surface name must be lowercase"));
    }
    let canonical = word_tokens(surface).collect::<Vec<_>>().join(" ");
    if canonical != surface {
        return Err(malformed(
            "surface name must be alphanumeric words separated by single spaces",
        ));
    }
    Ok(())
}

/// Strips the prefix/suffix convention off identifiers
struct IdentifierReducer<'a> {
    convention: &'a IdentifierConvention,
    pattern: Option<Regex>,
}

impl<'a> IdentifierReducer<'a> {
    fn new(convention: &'a IdentifierConvention) -> Self {
        let sep = regex::escape(&convention.separator.to_string());
        let source = format!(
            "^{prefix}{sep}([a-z0-9]+(?:{sep}[a-z0-9]+)*){sep}{suffix}$",
            prefix = regex::escape(&convention.prefix),
            suffix = regex::escape(&convention.suffix),
            sep = sep,
        );
        // Every interpolated piece is escaped, so this only fails on pathological sizes
        Self {
            convention,
            pattern: Regex::new(&source).ok(),
        }
    }

    fn reduce(&self, identifier: &str) -> CatalogResult<String> {
        let malformed = |reason: String| CatalogError::MalformedIdentifier {
            identifier: identifier.to_string(),
            reason,
        };
        let convention = self.convention;

        let name = self
            .pattern
            .as_ref()
            .and_then(|re| re.captures(identifier))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());

        match name {
            Some(name) => Ok(name
                .split(convention.separator)
                .collect::<Vec<_>>()
                .join(" ")),
            None if !identifier.starts_with(&convention.prefix) => Err(malformed(format!(
                "expected prefix {:?}",
                convention.prefix
            ))),
            None if !identifier.ends_with(&convention.suffix) => Err(malformed(format!(
                "expected suffix {:?}",
                convention.suffix
            ))),
            None => Err(malformed(format!(
                "name between prefix and suffix must be lowercase letters or digits separated by {:?}",
                convention.separator
            ))),
        }
    }
}
