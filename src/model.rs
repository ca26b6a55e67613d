//! Extracted entity model
//!
//! The data recovered from one run: entities (source classes), their
//! annotated properties, and the indexes regrouped from those annotations.
//! Everything is immutable once constructed; the only transformation is
//! `group_indexes`, a pure function from properties to indexes.

use serde::Serialize;

/// One `[Index(...)]` attribute occurrence.
///
/// The owning property's name is bound at construction time, so an
/// annotation is never in a half-linked state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexAnnotation {
    pub index_name: String,
    /// Declared column position within the index; `None` when the attribute
    /// carried no `Order` argument.
    pub order: Option<u32>,
    pub property_name: String,
}

/// One annotated auto-property and the attributes stacked above it.
///
/// A property with zero attributes is never constructed; the scanner
/// discards those lines outright.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub annotations: Vec<IndexAnnotation>,
}

/// One target index: a name plus the ordered columns that compose it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Index {
    pub name: String,
    pub field_names: Vec<String>,
}

impl Index {
    pub fn new(name: impl Into<String>, field_names: Vec<String>) -> Self {
        Self {
            name: name.into(),
            field_names,
        }
    }
}

/// One source class owning one or more indexes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    pub name: String,
    pub indexes: Vec<Index>,
}

impl Entity {
    pub fn new(name: impl Into<String>, indexes: Vec<Index>) -> Self {
        Self {
            name: name.into(),
            indexes,
        }
    }
}

/// Group all annotations across `properties` into named indexes.
///
/// Index names keep their first-encounter order. Within one index the
/// columns are stable-sorted by declared `Order` ascending; annotations
/// without a declared order sort ahead of ordered ones, and ties keep the
/// original encounter order.
pub fn group_indexes(properties: &[Property]) -> Vec<Index> {
    let mut groups: Vec<(String, Vec<&IndexAnnotation>)> = Vec::new();
    for annotation in properties.iter().flat_map(|p| p.annotations.iter()) {
        match groups
            .iter_mut()
            .find(|(name, _)| *name == annotation.index_name)
        {
            Some((_, members)) => members.push(annotation),
            None => groups.push((annotation.index_name.clone(), vec![annotation])),
        }
    }

    groups
        .into_iter()
        .map(|(name, mut members)| {
            // stable sort: None < Some(n), ties keep encounter order
            members.sort_by_key(|a| a.order);
            let field_names = members
                .iter()
                .map(|a| a.property_name.clone())
                .collect();
            Index::new(name, field_names)
        })
        .collect()
}
