//! Controlled vocabulary of ground-truth condition labels.
mod labels;

use std::collections::HashMap;

/// One canonical condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConditionLabel {
    id: &'static str,
    path: &'static str,
}

impl ConditionLabel {
    /// Machine identifier, e.g. `FOXING` or `PRODUCTION_RELATED`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Slash-delimited path, e.g. `condition/preservation/chemical-damage/foxing`.
    pub fn path(&self) -> &'static str {
        self.path
    }
}

/// Closed set of condition labels, indexed by path.
///
/// Built once and shared by reference; lookups never normalize their input.
///
/// # Examples
/// ```rust
/// use metsval_core::vocabulary::ControlledVocabulary;
///
/// let vocabulary = ControlledVocabulary::canonical();
/// let label = vocabulary
///     .lookup_by_path("condition/acquisition/method-flaws/imaging/missing-content/thresholding")
///     .expect("canonical label");
/// assert_eq!(label.id(), "THRESHOLDING");
/// assert!(vocabulary.lookup_by_path("Condition/Acquisition").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ControlledVocabulary {
    labels: Vec<ConditionLabel>,
    by_path: HashMap<&'static str, usize>,
    by_id: HashMap<&'static str, usize>,
}

impl ControlledVocabulary {
    /// The built-in label table.
    pub fn canonical() -> Self {
        Self::from_table(labels::LABELS)
    }

    fn from_table(table: &[(&'static str, &'static str)]) -> Self {
        let labels = table
            .iter()
            .map(|&(id, path)| ConditionLabel { id, path })
            .collect::<Vec<_>>();
        let by_path = labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (label.path, idx))
            .collect();
        let by_id = labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (label.id, idx))
            .collect();
        Self {
            labels,
            by_path,
            by_id,
        }
    }

    pub fn lookup_by_path(&self, path: &str) -> Option<&ConditionLabel> {
        self.by_path.get(path).map(|&idx| &self.labels[idx])
    }

    pub fn lookup_by_id(&self, id: &str) -> Option<&ConditionLabel> {
        self.by_id.get(id).map(|&idx| &self.labels[idx])
    }

    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Labels in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ConditionLabel> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
