//! Section anchor registry.
//!
//! The presentation layer measures where each section starts in the document
//! and registers that offset here. The tracker and the navigation controller
//! only ever look sections up through this registry.

use super::section::SectionId;

/// Measured top offset of every rendered section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    tops: [Option<u32>; SectionId::ALL.len()],
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(section, top)` measurements.
    pub fn from_measurements(measurements: impl IntoIterator<Item = (SectionId, u32)>) -> Self {
        let mut registry = Self::new();
        for (id, top) in measurements {
            registry.register(id, top);
        }
        registry
    }

    /// Record (or replace) the top offset of a section.
    pub fn register(&mut self, id: SectionId, top: u32) {
        self.tops[id.index()] = Some(top);
    }

    /// Forget a section, e.g. when it is no longer rendered.
    pub fn unregister(&mut self, id: SectionId) {
        self.tops[id.index()] = None;
    }

    pub fn clear(&mut self) {
        self.tops = Default::default();
    }

    pub fn top_of(&self, id: SectionId) -> Option<u32> {
        self.tops[id.index()]
    }

    pub fn is_registered(&self, id: SectionId) -> bool {
        self.top_of(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.tops.iter().all(Option::is_none)
    }

    /// Registered anchors in document order.
    pub fn anchors(&self) -> impl DoubleEndedIterator<Item = (SectionId, u32)> + '_ {
        SectionId::ALL
            .into_iter()
            .filter_map(|id| self.top_of(id).map(|top| (id, top)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SectionRegistry::new();
        assert!(registry.is_empty());

        registry.register(SectionId::About, 800);
        assert_eq!(registry.top_of(SectionId::About), Some(800));
        assert_eq!(registry.top_of(SectionId::Home), None);

        registry.register(SectionId::About, 640);
        assert_eq!(registry.top_of(SectionId::About), Some(640));
    }

    #[test]
    fn test_unregister() {
        let mut registry =
            SectionRegistry::from_measurements([(SectionId::Home, 0), (SectionId::Contact, 90)]);
        registry.unregister(SectionId::Contact);
        assert!(!registry.is_registered(SectionId::Contact));
        assert!(registry.is_registered(SectionId::Home));

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_anchors_in_document_order() {
        let registry = SectionRegistry::from_measurements([
            (SectionId::Contact, 2400),
            (SectionId::Home, 0),
            (SectionId::Projects, 1600),
        ]);
        let anchors: Vec<_> = registry.anchors().collect();
        assert_eq!(
            anchors,
            vec![
                (SectionId::Home, 0),
                (SectionId::Projects, 1600),
                (SectionId::Contact, 2400)
            ]
        );
    }
}
