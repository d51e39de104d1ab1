//! Objective-function catalog
//!
//! A read-only ordered list of human-friendly objective-function names,
//! supplied by the basin configuration before a conversion starts. The
//! header resolver consumes it exactly once; the converter has no other
//! dependency on the configuration file's schema or location.

/// Ordered objective-function descriptors, one per declared link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectiveFunctionCatalog {
    descriptors: Vec<String>,
}

impl ObjectiveFunctionCatalog {
    /// Build a catalog from descriptors in objective-function link order.
    pub fn from_descriptors<I, S>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            descriptors: descriptors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptor for the `index`-th objective-function slot.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.descriptors.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(String::as_str)
    }
}
