//! Tagged element registry used to look up drop targets.

use crate::element::{ElementId, RectElement};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An element stored together with its optional tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedElement {
    pub element: RectElement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Scene index of candidate drop targets.
///
/// Elements keep their insertion order, which is the order tag queries
/// return them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<TaggedElement>", into = "Vec<TaggedElement>")]
pub struct TargetRegistry {
    elements: HashMap<ElementId, TaggedElement>,
    order: Vec<ElementId>,
}

impl TargetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element carrying `tag`. Replaces any element with the same ID.
    pub fn insert(&mut self, element: RectElement, tag: impl Into<String>) -> ElementId {
        self.insert_entry(TaggedElement {
            element,
            tag: Some(tag.into()),
        })
    }

    /// Add an element without a tag. It can still be an Object-mode target.
    pub fn insert_untagged(&mut self, element: RectElement) -> ElementId {
        self.insert_entry(TaggedElement { element, tag: None })
    }

    fn insert_entry(&mut self, entry: TaggedElement) -> ElementId {
        let id = entry.element.id();
        if self.elements.insert(id, entry).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Remove an element.
    pub fn remove(&mut self, id: ElementId) -> Option<RectElement> {
        let entry = self.elements.remove(&id)?;
        self.order.retain(|&other| other != id);
        Some(entry.element)
    }

    /// Change or clear an element's tag. Returns false if the ID is unknown.
    pub fn set_tag(&mut self, id: ElementId, tag: Option<String>) -> bool {
        match self.elements.get_mut(&id) {
            Some(entry) => {
                entry.tag = tag;
                true
            }
            None => false,
        }
    }

    /// Get an element's tag, if it has one.
    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).and_then(|entry| entry.tag.as_deref())
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&RectElement> {
        self.elements.get(&id).map(|entry| &entry.element)
    }

    /// Get a mutable element by ID.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut RectElement> {
        self.elements.get_mut(&id).map(|entry| &mut entry.element)
    }

    /// Move an element. Returns false if the ID is unknown.
    pub fn move_to(&mut self, id: ElementId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.position = position;
                true
            }
            None => false,
        }
    }

    /// Check if an element with this ID is registered.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry holds no elements.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RectElement> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .map(|entry| &entry.element)
    }

    /// IDs of every element carrying `tag`, in insertion order.
    pub fn find_with_tag(&self, tag: &str) -> Vec<ElementId> {
        self.order
            .iter()
            .copied()
            .filter(|id| {
                self.elements
                    .get(id)
                    .is_some_and(|entry| entry.tag.as_deref() == Some(tag))
            })
            .collect()
    }
}

impl From<Vec<TaggedElement>> for TargetRegistry {
    fn from(entries: Vec<TaggedElement>) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            registry.insert_entry(entry);
        }
        registry
    }
}

impl From<TargetRegistry> for Vec<TaggedElement> {
    fn from(mut registry: TargetRegistry) -> Self {
        registry
            .order
            .iter()
            .filter_map(|id| registry.elements.remove(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    fn slot(x: f64, y: f64) -> RectElement {
        RectElement::new(Point::new(x, y), Size::new(50.0, 50.0))
    }

    #[test]
    fn test_find_with_tag_keeps_insertion_order() {
        let mut registry = TargetRegistry::new();
        let a = registry.insert(slot(0.0, 0.0), "slot");
        registry.insert(slot(100.0, 0.0), "other");
        let b = registry.insert(slot(200.0, 0.0), "slot");
        registry.insert_untagged(slot(300.0, 0.0));

        assert_eq!(registry.find_with_tag("slot"), vec![a, b]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_find_with_unknown_tag_is_empty() {
        let mut registry = TargetRegistry::new();
        registry.insert(slot(0.0, 0.0), "slot");
        assert!(registry.find_with_tag("missing").is_empty());
        assert!(registry.find_with_tag("").is_empty());
    }

    #[test]
    fn test_remove_and_retag() {
        let mut registry = TargetRegistry::new();
        let a = registry.insert(slot(0.0, 0.0), "slot");
        let b = registry.insert(slot(100.0, 0.0), "slot");

        assert!(registry.set_tag(b, Some("bin".to_string())));
        assert_eq!(registry.find_with_tag("slot"), vec![a]);
        assert_eq!(registry.tag(b), Some("bin"));

        assert!(registry.remove(a).is_some());
        assert!(registry.find_with_tag("slot").is_empty());
        assert!(!registry.contains(a));
        assert!(registry.remove(a).is_none());
    }

    #[test]
    fn test_reinsert_same_id_keeps_position_in_order() {
        let mut registry = TargetRegistry::new();
        let first = slot(0.0, 0.0);
        let id = first.id();
        registry.insert(first.clone(), "slot");
        let second = registry.insert(slot(100.0, 0.0), "slot");
        registry.insert(first, "slot");

        assert_eq!(registry.find_with_tag("slot"), vec![id, second]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_move_to() {
        let mut registry = TargetRegistry::new();
        let id = registry.insert(slot(0.0, 0.0), "slot");
        assert!(registry.move_to(id, Point::new(10.0, 10.0)));
        assert_eq!(registry.get(id).unwrap().position, Point::new(10.0, 10.0));
        assert!(!registry.move_to(uuid::Uuid::new_v4(), Point::ZERO));
    }

    #[test]
    fn test_serde_roundtrip_preserves_order_and_tags() {
        let mut registry = TargetRegistry::new();
        let a = registry.insert(slot(0.0, 0.0), "slot");
        let b = registry.insert_untagged(slot(100.0, 0.0));

        let json = serde_json::to_string(&registry).unwrap();
        let loaded: TargetRegistry = serde_json::from_str(&json).unwrap();

        let ids: Vec<_> = loaded.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(loaded.tag(a), Some("slot"));
        assert_eq!(loaded.tag(b), None);
    }
}
