const BACKGROUND_LABEL: &str = "background";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("label table has {labels} entries but the model produces {classes} classes")]
pub struct LabelMismatch {
    pub labels: usize,
    pub classes: usize,
}

/// Class names in model output order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// One label per line. Trailing empty lines are ignored.
    pub fn parse(text: &str) -> Self {
        let mut labels: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
        while labels.last().is_some_and(|l| l.is_empty()) {
            labels.pop();
        }
        Self::new(labels)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Matches the table against the model's class count. A leading
    /// `background` entry is dropped when the model has no such class.
    pub fn aligned_to(self, classes: usize) -> Result<Self, LabelMismatch> {
        if self.labels.len() == classes {
            return Ok(self);
        }

        if self.labels.len() == classes + 1 && self.labels[0] == BACKGROUND_LABEL {
            return Ok(Self {
                labels: self.labels.into_iter().skip(1).collect(),
            });
        }

        Err(LabelMismatch {
            labels: self.labels.len(),
            classes,
        })
    }
}
