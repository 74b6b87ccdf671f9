use std::path::PathBuf;

use clap::{
    ArgAction,
    Parser,
};

use crate::{
    core::RenshuuError,
    curriculum::Curriculum,
};

/// Command-line surface. Booleans take an explicit value so the defaults
/// that start out true can be switched off (`--print_table false`).
#[derive(Debug, Parser)]
#[command(name = "renshuu", about = "Generate Japanese sentence-practice worksheets")]
pub struct Cli {
    /// The minimum number of grammar items for one sentence
    #[arg(long = "min_grammar", default_value_t = 2)]
    pub min_grammar: usize,

    /// The maximum number of grammar items for one sentence
    #[arg(long = "max_grammar", default_value_t = 4)]
    pub max_grammar: usize,

    /// The minimum number of vocabulary items for one sentence
    #[arg(long = "min_vocab", default_value_t = 2)]
    pub min_vocab: usize,

    /// The maximum number of vocabulary items for one sentence
    #[arg(long = "max_vocab", default_value_t = 4)]
    pub max_vocab: usize,

    /// The number of sentence requests to generate
    #[arg(long = "max_sentences", default_value_t = 5)]
    pub max_sentences: usize,

    /// The highest chapter fallback draws may pull from
    #[arg(long = "max_chapter", default_value_t = 2)]
    pub max_chapter: u32,

    /// Focus on one chapter before pulling from others
    #[arg(long = "chapter_focus")]
    pub chapter_focus: Option<u32>,

    /// Never repeat an item within one sampling pass
    #[arg(long = "never_duplicate", default_value_t = true, action = ArgAction::Set)]
    pub never_duplicate: bool,

    /// Show kana readings instead of kanji
    #[arg(long = "kana_only", default_value_t = false, action = ArgAction::Set)]
    pub kana_only: bool,

    /// Print the chapter reference table after the sentences
    #[arg(long = "print_table", default_value_t = true, action = ArgAction::Set)]
    pub print_table: bool,

    /// Curriculum data file
    #[arg(long = "data", default_value = "genki.yml")]
    pub data: PathBuf,
}

/// Validated, immutable run options. Everything downstream of startup works
/// from this record; nothing reads the raw CLI again.
#[derive(Debug, Clone)]
pub struct Config {
    pub min_grammar: usize,
    pub max_grammar: usize,
    pub min_vocab: usize,
    pub max_vocab: usize,
    pub max_sentences: usize,
    pub max_chapter: u32,
    pub chapter_focus: Option<u32>,
    pub never_duplicate: bool,
    pub kana_only: bool,
    pub print_table: bool,
}

impl Cli {
    /// Runs the startup validations against the loaded curriculum and
    /// freezes the options into a `Config`.
    pub fn into_config(self, curriculum: &Curriculum) -> Result<Config, RenshuuError> {
        if self.min_grammar > self.max_grammar || self.min_vocab > self.max_vocab {
            return Err(RenshuuError::InvalidBounds);
        }

        if let Some(focus) = self.chapter_focus {
            if focus == 0 || focus > self.max_chapter {
                return Err(RenshuuError::FocusOutOfRange {
                    focus,
                    max_chapter: self.max_chapter,
                });
            }
        }

        if self.max_chapter as usize > curriculum.chapter_count() {
            eprintln!(
                "Data set only has {} chapters; chapters beyond that cannot be drawn.",
                curriculum.chapter_count()
            );
        }

        Ok(Config {
            min_grammar: self.min_grammar,
            max_grammar: self.max_grammar,
            min_vocab: self.min_vocab,
            max_vocab: self.max_vocab,
            max_sentences: self.max_sentences,
            max_chapter: self.max_chapter,
            chapter_focus: self.chapter_focus,
            never_duplicate: self.never_duplicate,
            kana_only: self.kana_only,
            print_table: self.print_table,
        })
    }
}
