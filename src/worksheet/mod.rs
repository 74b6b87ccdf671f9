pub mod render;

use rand::Rng;

use crate::{
    config::Config,
    core::{
        ItemKind,
        RenshuuError,
        SentenceRequirement,
    },
    curriculum::Curriculum,
    sampler::{
        ChapterMap,
        Sampler,
    },
};

/// A full generation run: the sentences, plus the chapter maps retained from
/// the final sentence's two sampling calls. The reference table only needs
/// one copy of each map.
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    pub sentences: Vec<SentenceRequirement>,
    pub grammar_map: ChapterMap,
    pub vocab_map: ChapterMap,
}

pub fn generate(
    curriculum: &Curriculum,
    config: &Config,
    rng: &mut impl Rng,
) -> Result<Worksheet, RenshuuError> {
    let sampler = Sampler::new(
        curriculum,
        config.max_chapter,
        config.chapter_focus,
        config.never_duplicate,
    );

    let mut worksheet = Worksheet::default();
    for _ in 0..config.max_sentences {
        let grammar_count = rng.random_range(config.min_grammar..=config.max_grammar);
        let vocab_count = rng.random_range(config.min_vocab..=config.max_vocab);

        let grammar = sampler.draw(ItemKind::Grammar, grammar_count, rng)?;
        let vocab = sampler.draw(ItemKind::Vocab, vocab_count, rng)?;

        worksheet.grammar_map = grammar.chapter_map;
        worksheet.vocab_map = vocab.chapter_map;
        worksheet.sentences.push(SentenceRequirement {
            grammar: grammar.items,
            vocab: vocab.items,
        });
    }

    Ok(worksheet)
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    const SAMPLE: &str = r#"
1:
  grammar:
    "XはYです": {}
    "〜か": {}
    "〜の": {}
  vocab:
    "がくせい":
      kanji: "学生"
    "せんせい":
      kanji: "先生"
    "アメリカ":
      kanji: ""
    "ともだち":
      kanji: "友達"
2:
  grammar:
    "〜も": {}
    "〜じゃないです": {}
  vocab:
    "ほん":
      kanji: "本"
    "かばん":
      kanji: ""
"#;

    fn config() -> Config {
        Config {
            min_grammar: 1,
            max_grammar: 2,
            min_vocab: 2,
            max_vocab: 3,
            max_sentences: 3,
            max_chapter: 2,
            chapter_focus: None,
            never_duplicate: true,
            kana_only: false,
            print_table: true,
        }
    }

    #[test]
    fn test_generate_respects_bounds_and_sentence_count() {
        let curriculum: Curriculum = SAMPLE.parse().unwrap();
        let config = config();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let worksheet = generate(&curriculum, &config, &mut rng).unwrap();
            assert_eq!(worksheet.sentences.len(), 3);

            for sentence in &worksheet.sentences {
                assert!((1..=2).contains(&sentence.grammar.len()), "seed {}", seed);
                assert!((2..=3).contains(&sentence.vocab.len()), "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_generate_retains_chapter_maps() {
        let curriculum: Curriculum = SAMPLE.parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let worksheet = generate(&curriculum, &config(), &mut rng).unwrap();

        assert_eq!(worksheet.grammar_map.len(), 5);
        assert_eq!(worksheet.vocab_map.len(), 6);
        assert_eq!(worksheet.vocab_map.chapter_of("ほん"), Some(2));
    }

    #[test]
    fn test_generate_propagates_global_exhaustion() {
        let curriculum: Curriculum = SAMPLE.parse().unwrap();
        let mut config = config();
        config.min_grammar = 6;
        config.max_grammar = 6;

        let mut rng = StdRng::seed_from_u64(7);
        match generate(&curriculum, &config, &mut rng) {
            Err(RenshuuError::PoolExhausted { kind, requested, drawn }) => {
                assert_eq!(kind, "grammar");
                assert_eq!(requested, 6);
                assert_eq!(drawn, 5);
            }
            other => panic!("Expected PoolExhausted, got {:?}", other.is_ok()),
        }
    }
}
