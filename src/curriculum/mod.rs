use std::{
    collections::BTreeMap,
    fs,
    path::Path,
    str::FromStr,
};

use serde::Deserialize;
use wana_kana::IsJapaneseStr;

use crate::core::{
    Entry,
    ItemKind,
    RenshuuError,
};

/// One chapter's pools. Missing sections default to empty so a
/// grammar-only chapter still parses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChapterData {
    #[serde(default)]
    pub grammar: BTreeMap<String, Entry>,
    #[serde(default)]
    pub vocab: BTreeMap<String, Entry>,
}

impl ChapterData {
    pub fn pool(&self, kind: ItemKind) -> &BTreeMap<String, Entry> {
        match kind {
            ItemKind::Grammar => &self.grammar,
            ItemKind::Vocab => &self.vocab,
        }
    }
}

/// The full curriculum, chapter number -> pools. Loaded once at startup and
/// read-only for the rest of the run. Chapter numbers are expected to be
/// contiguous from 1; nothing enforces it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    chapters: BTreeMap<u32, ChapterData>,
}

impl Curriculum {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RenshuuError> {
        let raw = fs::read_to_string(path)?;
        raw.parse()
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn chapter(&self, number: u32) -> Option<&ChapterData> {
        self.chapters.get(&number)
    }

    /// Chapters in ascending order.
    pub fn chapters(&self) -> impl Iterator<Item = (u32, &ChapterData)> {
        self.chapters.iter().map(|(number, chapter)| (*number, chapter))
    }

    pub fn entry(&self, chapter: u32, kind: ItemKind, key: &str) -> Option<&Entry> {
        self.chapter(chapter).and_then(|data| data.pool(kind).get(key))
    }

    /// Vocab keys that are not kana. The reference table prints the key in
    /// its kana column, so these get a warning at load time.
    pub fn non_kana_vocab_keys(&self) -> Vec<(u32, &str)> {
        self.chapters
            .iter()
            .flat_map(|(number, chapter)| {
                chapter
                    .vocab
                    .keys()
                    .filter(|key| !key.as_str().is_kana())
                    .map(|key| (*number, key.as_str()))
            })
            .collect()
    }
}

impl FromStr for Curriculum {
    type Err = RenshuuError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(serde_yaml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
1:
  grammar:
    "XはYです":
      english: "X is Y"
    "〜か":
      english: "question marker"
  vocab:
    "がくせい":
      kanji: "学生"
      english: "student"
    "アメリカ":
      kanji: ""
      english: "America"
2:
  grammar:
    "〜も":
      english: "too / also"
  vocab:
    "ほん":
      kanji: "本"
      english: "book"
"#;

    #[test]
    fn test_parse_and_lookup() {
        let curriculum: Curriculum = SAMPLE.parse().unwrap();
        assert_eq!(curriculum.chapter_count(), 2);

        let entry = curriculum.entry(1, ItemKind::Vocab, "がくせい").unwrap();
        assert_eq!(entry.kanji, "学生");
        assert_eq!(
            entry.fields.get("english"),
            Some(&serde_yaml::Value::String("student".to_string()))
        );

        // Grammar entries carry no kanji.
        let grammar = curriculum.entry(1, ItemKind::Grammar, "〜か").unwrap();
        assert!(grammar.kanji.is_empty());

        assert!(curriculum.entry(2, ItemKind::Vocab, "がくせい").is_none());
        assert!(curriculum.chapter(3).is_none());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let curriculum: Curriculum = "1:\n  grammar:\n    \"〜ね\": {}\n".parse().unwrap();
        let chapter = curriculum.chapter(1).unwrap();
        assert_eq!(chapter.grammar.len(), 1);
        assert!(chapter.vocab.is_empty());
    }

    #[test]
    fn test_chapters_iterate_ascending() {
        let curriculum: Curriculum = SAMPLE.parse().unwrap();
        let numbers: Vec<u32> = curriculum.chapters().map(|(number, _)| number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_non_kana_vocab_keys() {
        let curriculum: Curriculum = SAMPLE.parse().unwrap();
        assert!(curriculum.non_kana_vocab_keys().is_empty());

        let odd: Curriculum = "1:\n  vocab:\n    \"学生\":\n      kanji: \"\"\n".parse().unwrap();
        assert_eq!(odd.non_kana_vocab_keys(), vec![(1, "学生")]);
    }

    #[test]
    fn test_malformed_yaml_fails() {
        assert!("not: [valid".parse::<Curriculum>().is_err());
    }
}
