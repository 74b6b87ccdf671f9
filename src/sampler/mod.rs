use std::collections::{
    BTreeMap,
    HashSet,
};

use rand::{
    seq::IndexedRandom,
    Rng,
};

use crate::{
    core::{
        ItemKind,
        RenshuuError,
        SampledItem,
    },
    curriculum::Curriculum,
};

/// Item-key -> originating chapter for every key a sampling call considered
/// during setup. Consumed only by the reference-table renderer.
#[derive(Debug, Clone, Default)]
pub struct ChapterMap {
    entries: BTreeMap<String, u32>,
}

impl ChapterMap {
    fn insert(&mut self, key: String, chapter: u32) {
        self.entries.insert(key, chapter);
    }

    pub fn chapter_of(&self, key: &str) -> Option<u32> {
        self.entries.get(key).copied()
    }

    /// Keys mapped to one chapter, in sorted (deterministic) order.
    pub fn keys_in_chapter(&self, chapter: u32) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(_, mapped)| **mapped == chapter)
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn flat_pool(&self) -> Vec<(&str, u32)> {
        self.entries.iter().map(|(key, chapter)| (key.as_str(), *chapter)).collect()
    }
}

/// One sampling call's results: the drawn items in order, plus the
/// setup-phase chapter map.
#[derive(Debug, Clone)]
pub struct SampleOutcome {
    pub items: Vec<SampledItem>,
    pub chapter_map: ChapterMap,
}

/// Draws unique items from a read-only curriculum handle.
///
/// Without a focus chapter, draws are uniform over every item in the
/// curriculum. With one, the focus chapter's pool is exhausted first, then
/// randomly chosen fallback chapters up to `max_chapter` top the draw up;
/// once those run out too, the draw ends early with a printed notice.
pub struct Sampler<'a> {
    curriculum: &'a Curriculum,
    max_chapter: u32,
    focus: Option<u32>,
    never_duplicate: bool,
}

impl<'a> Sampler<'a> {
    pub fn new(
        curriculum: &'a Curriculum,
        max_chapter: u32,
        focus: Option<u32>,
        never_duplicate: bool,
    ) -> Self {
        Sampler { curriculum, max_chapter, focus, never_duplicate }
    }

    pub fn draw(
        &self,
        kind: ItemKind,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<SampleOutcome, RenshuuError> {
        let chapter_map = self.build_chapter_map(kind);
        let items = match self.focus {
            Some(chapter) => self.draw_focused(kind, count, chapter, rng),
            None => self.draw_global(kind, count, &chapter_map, rng)?,
        };
        Ok(SampleOutcome { items, chapter_map })
    }

    /// Flat key -> chapter map over the whole curriculum, built in ascending
    /// chapter order; a key present in several chapters keeps the highest.
    fn build_chapter_map(&self, kind: ItemKind) -> ChapterMap {
        let mut map = ChapterMap::default();
        for (number, chapter) in self.curriculum.chapters() {
            for key in chapter.pool(kind).keys() {
                map.insert(key.clone(), number);
            }
        }
        map
    }

    fn draw_global(
        &self,
        kind: ItemKind,
        count: usize,
        chapter_map: &ChapterMap,
        rng: &mut impl Rng,
    ) -> Result<Vec<SampledItem>, RenshuuError> {
        let mut pool = chapter_map.flat_pool();
        let mut items = Vec::with_capacity(count);

        while items.len() < count {
            if pool.is_empty() {
                // Under-filling silently would hide a bad request; fail it.
                return Err(RenshuuError::PoolExhausted {
                    kind: kind.label(),
                    requested: count,
                    drawn: items.len(),
                });
            }
            let picked = rng.random_range(0..pool.len());
            let (key, chapter) = pool.swap_remove(picked);
            let entry = self.curriculum.entry(chapter, kind, key).cloned().unwrap_or_default();
            items.push(SampledItem { value: key.to_string(), chapter, entry });
        }

        Ok(items)
    }

    fn draw_focused(
        &self,
        kind: ItemKind,
        count: usize,
        focus: u32,
        rng: &mut impl Rng,
    ) -> Vec<SampledItem> {
        let mut used_chapters = vec![focus];
        let mut used_keys: HashSet<String> = HashSet::new();
        let mut current = focus;
        let mut pool = self.chapter_pool(current, kind, &used_keys);
        let mut items = Vec::with_capacity(count);

        while items.len() < count {
            if pool.is_empty() {
                let candidates: Vec<u32> =
                    (1..=self.max_chapter).filter(|c| !used_chapters.contains(c)).collect();
                match candidates.choose(rng) {
                    Some(&next) => {
                        current = next;
                        used_chapters.push(next);
                        pool = self.chapter_pool(current, kind, &used_keys);
                    }
                    None => {
                        println!("Exhausted all {} options. Continuing...", kind.display_name());
                        break;
                    }
                }
                continue;
            }

            let picked = rng.random_range(0..pool.len());
            let key = pool.swap_remove(picked);
            let entry = self.curriculum.entry(current, kind, &key).cloned().unwrap_or_default();
            used_keys.insert(key.clone());
            items.push(SampledItem { value: key, chapter: current, entry });
        }

        items
    }

    /// A chapter's keys for one kind. Refills exclude already-used keys when
    /// duplicates are disallowed, so a draw never has to retry a pick.
    fn chapter_pool(&self, chapter: u32, kind: ItemKind, used: &HashSet<String>) -> Vec<String> {
        let Some(data) = self.curriculum.chapter(chapter) else {
            return Vec::new();
        };
        data.pool(kind)
            .keys()
            .filter(|key| !(self.never_duplicate && used.contains(key.as_str())))
            .cloned()
            .collect()
    }
}
