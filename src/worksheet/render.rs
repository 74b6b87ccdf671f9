use std::collections::HashSet;

use crate::{
    config::Config,
    core::ItemKind,
    curriculum::Curriculum,
};

use super::Worksheet;

const TABLE_HEADERS: [&str; 4] = ["chapter", "grammar", "kana", "kanji"];

/// The whole report: worksheet text, then the reference table when enabled.
pub fn render_report(worksheet: &Worksheet, curriculum: &Curriculum, config: &Config) -> String {
    let mut out = render_worksheet(worksheet, config);
    if config.print_table {
        out.push_str(&render_reference_table(worksheet, curriculum, config));
    }
    out
}

/// Header plus one numbered block per sentence.
pub fn render_worksheet(worksheet: &Worksheet, config: &Config) -> String {
    let mut out = String::from(
        "Renshuu: Japanese sentence practice\n\
         Create a sentence using the grammar and vocabulary below.\n",
    );

    for (number, sentence) in worksheet.sentences.iter().enumerate() {
        let grammar = sentence
            .grammar
            .iter()
            .map(|item| item.value.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let vocab = sentence
            .vocab
            .iter()
            .map(|item| item.display_form(config.kana_only))
            .collect::<Vec<_>>()
            .join(", ");

        out.push_str(&format!("\nSentence:    {}\n", number + 1));
        out.push_str(&format!(" Grammar:    {}\n", grammar));
        out.push_str(&format!(" Vocabulary: {}\n", vocab));
    }

    out.push('\n');
    out
}

/// Chapter-by-chapter table of every key that made it into a sentence,
/// with its kana/kanji forms for vocabulary and placeholders for grammar.
pub fn render_reference_table(
    worksheet: &Worksheet,
    curriculum: &Curriculum,
    config: &Config,
) -> String {
    let used_grammar: HashSet<&str> = worksheet
        .sentences
        .iter()
        .flat_map(|sentence| sentence.grammar.iter().map(|item| item.value.as_str()))
        .collect();
    let used_vocab: HashSet<&str> = worksheet
        .sentences
        .iter()
        .flat_map(|sentence| sentence.vocab.iter().map(|item| item.value.as_str()))
        .collect();

    let mut rows: Vec<[String; 4]> = Vec::new();
    for chapter in 1..=config.max_chapter {
        for key in worksheet.grammar_map.keys_in_chapter(chapter) {
            if used_grammar.contains(key) {
                rows.push([chapter.to_string(), key.to_string(), "-".into(), "-".into()]);
            }
        }
        for key in worksheet.vocab_map.keys_in_chapter(chapter) {
            if used_vocab.contains(key) {
                let kanji = curriculum
                    .entry(chapter, ItemKind::Vocab, key)
                    .map(|entry| entry.kanji.as_str())
                    .filter(|kanji| !kanji.is_empty())
                    .unwrap_or("-");
                rows.push([chapter.to_string(), "-".into(), key.to_string(), kanji.to_string()]);
            }
        }
    }

    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell.chars().count());
        }
    }

    let mut out = String::from("Chapter Reference Table\n");
    out.push_str(&format_row(TABLE_HEADERS, &widths));
    for row in &rows {
        let cells = [row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()];
        out.push_str(&format_row(cells, &widths));
    }
    out
}

// Right-aligned cells, two spaces between columns.
fn format_row(cells: [&str; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (column, cell) in cells.iter().enumerate() {
        if column > 0 {
            line.push_str("  ");
        }
        for _ in 0..widths[column].saturating_sub(cell.chars().count()) {
            line.push(' ');
        }
        line.push_str(cell);
    }
    line.push('\n');
    line
}
