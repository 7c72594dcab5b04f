use metrics::{IntoLabels, Label, SharedString};

/// Labels attached to every metric a component emits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// A copy of these labels with one more key-value pair
    pub fn with(
        &self,
        key: impl Into<SharedString>,
        value: impl Into<SharedString>,
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.push(Label::new(key, value));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::{Labels, NO_LABEL};
    use metrics::{IntoLabels, Label};

    #[test]
    fn with_does_not_touch_the_original() {
        let labels = Labels::new(&[("store", "memory")]);
        let extended = labels.with("operation", "insert");

        let label_list = extended.into_labels();
        assert!(label_list.contains(&Label::new("store", "memory")));
        assert!(label_list.contains(&Label::new("operation", "insert")));

        let label_list = labels.into_labels();
        assert_eq!(label_list, vec![Label::new("store", "memory")]);
    }

    #[test]
    fn no_label_is_empty() {
        assert_eq!(NO_LABEL.with("reason", "constraint").into_labels().len(), 1);
        assert!(NO_LABEL.into_labels().is_empty());
    }
}
