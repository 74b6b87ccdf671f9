use std::collections::BTreeMap;

use serde::Deserialize;

/// Which of a chapter's two pools a sampling call draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Grammar,
    Vocab,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Grammar => "grammar",
            ItemKind::Vocab => "vocab",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::Grammar => "Grammar",
            ItemKind::Vocab => "Vocabulary",
        }
    }
}

/// One curriculum record. Grammar entries normally leave `kanji` empty;
/// descriptive fields we don't interpret are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub kanji: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone)]
pub struct SampledItem {
    pub value: String, // item key: the grammar pattern text or kana reading
    pub chapter: u32,  // chapter the item was drawn from
    pub entry: Entry,
}

impl SampledItem {
    /// Kanji form when present and wanted, else the kana/value form.
    pub fn display_form(&self, kana_only: bool) -> &str {
        if !self.entry.kanji.is_empty() && !kana_only {
            &self.entry.kanji
        } else {
            &self.value
        }
    }
}

/// The material for one practice sentence.
#[derive(Debug, Clone)]
pub struct SentenceRequirement {
    pub grammar: Vec<SampledItem>,
    pub vocab: Vec<SampledItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab_item(value: &str, kanji: &str) -> SampledItem {
        SampledItem {
            value: value.to_string(),
            chapter: 1,
            entry: Entry { kanji: kanji.to_string(), fields: BTreeMap::new() },
        }
    }

    #[test]
    fn test_display_form() {
        let with_kanji = vocab_item("がくせい", "学生");
        assert_eq!(with_kanji.display_form(false), "学生");
        assert_eq!(with_kanji.display_form(true), "がくせい");

        // No kanji recorded: the reading is all there is, either way.
        let kana_only_entry = vocab_item("かばん", "");
        assert_eq!(kana_only_entry.display_form(false), "かばん");
        assert_eq!(kana_only_entry.display_form(true), "かばん");
    }
}
