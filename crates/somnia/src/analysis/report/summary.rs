use super::super::domain::{Pillar, QualityLabel};

/// Templated summary sentence naming the quality band and the weakest
/// pillar's focus phrase.
pub(crate) fn compose(label: QualityLabel, weakest: Pillar) -> String {
    format!(
        "Your sleep is currently rated as {}. Your primary area for improvement is {}, \
         which is significantly impacting your restorative recovery.",
        label.label(),
        weakest.focus_phrase()
    )
}
