//! Mention extraction
//!
//! Scans document text for catalog surface names with an Aho-Corasick
//! automaton in leftmost-longest mode: matches are non-overlapping, and among
//! names starting at the same word the longest wins, so a one-word entity name
//! never shadows a longer entity name that starts with or contains it.
//!
//! Lines and surface names are rewritten into the same word layout before
//! matching: every word becomes its own ` word ` cell. A pattern can then only
//! match on whole-word boundaries, e.g. `" national  defence "` inside
//! `" the  national  defence  portfolio "`.

use crate::catalog::{word_tokens, EntityCatalog, EntityId};
use aho_corasick::{AhoCorasick, BuildError, MatchKind};

/// Lay out words as space-delimited cells
fn word_cells<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut cells = String::new();
    for word in words {
        cells.push(' ');
        cells.push_str(word);
        cells.push(' ');
    }
    cells
}

/// Finds entity mentions in text.
///
/// Owns an automaton over every surface name in the catalog it was built from.
/// Extraction is a pure function of the text, so one extractor can serve any
/// number of documents concurrently.
#[derive(Debug, Clone)]
pub struct MentionExtractor {
    automaton: AhoCorasick,
    /// Pattern id -> entity
    entities: Vec<EntityId>,
}

impl MentionExtractor {
    pub fn new(catalog: &EntityCatalog) -> Result<Self, BuildError> {
        let patterns: Vec<String> = catalog
            .iter()
            .map(|entity| word_cells(entity.surface_tokens()))
            .collect();
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)?;

        Ok(MentionExtractor {
            automaton,
            entities: catalog.ids().cloned().collect(),
        })
    }

    /// Lazily yield mentions in `text`, in order of position.
    ///
    /// The iterator is cheap to clone; calling `mentions` again restarts the scan.
    pub fn mentions<'a>(&'a self, text: &'a str) -> Mentions<'a> {
        Mentions {
            extractor: self,
            lines: text.lines(),
            pending: Vec::new(),
            pos: 0,
        }
    }

    /// Collect every mention in `text`
    pub fn extract(&self, text: &str) -> Vec<EntityId> {
        self.mentions(text).cloned().collect()
    }

    /// Entity indices matched in one line, left to right
    fn scan_line(&self, line: &str) -> Vec<usize> {
        let folded = line.to_lowercase();
        let cells = word_cells(word_tokens(&folded));
        self.automaton
            .find_iter(&cells)
            .map(|mat| mat.pattern().as_usize())
            .collect()
    }
}

/// Iterator over the mentions of one document, see [`MentionExtractor::mentions`]
#[derive(Debug, Clone)]
pub struct Mentions<'a> {
    extractor: &'a MentionExtractor,
    lines: std::str::Lines<'a>,
    /// Matches of the line being drained
    pending: Vec<usize>,
    pos: usize,
}

impl<'a> Iterator for Mentions<'a> {
    type Item = &'a EntityId;

    fn next(&mut self) -> Option<Self::Item> {
        // Matches never span lines
        while self.pos >= self.pending.len() {
            let line = self.lines.next()?;
            self.pending = self.extractor.scan_line(line);
            self.pos = 0;
        }
        let entity = self.pending[self.pos];
        self.pos += 1;
        Some(&self.extractor.entities[entity])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(entries: &[(&str, &str)]) -> MentionExtractor {
        let catalog = EntityCatalog::from_entries(entries.iter().copied()).unwrap();
        MentionExtractor::new(&catalog).unwrap()
    }

    fn ids(found: Vec<EntityId>) -> Vec<String> {
        found.into_iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_longest_match_wins() {
        let ex = extractor(&[("d", "defence"), ("nd", "national defence")]);
        assert_eq!(ids(ex.extract("the national defence portfolio")), ["nd"]);
        assert_eq!(ids(ex.extract("defence and national defence")), ["d", "nd"]);
    }

    #[test]
    fn test_embedded_short_name() {
        // "health" sits inside the longer name and must not fire on its own there
        let ex = extractor(&[
            ("h", "health"),
            ("mh", "mental health and addictions"),
        ]);
        assert_eq!(
            ids(ex.extract("Mental Health and Addictions, then health.")),
            ["mh", "h"]
        );
    }

    #[test]
    fn test_falls_back_to_shorter_prefix() {
        // A longer name sharing the first words must not hide the shorter match
        let ex = extractor(&[
            ("n", "national revenue"),
            ("nrs", "national revenue services agency"),
        ]);
        assert_eq!(ids(ex.extract("national revenue services")), ["n"]);
        assert_eq!(ids(ex.extract("national")), Vec::<String>::new());
    }

    #[test]
    fn test_case_folding_and_repeats() {
        let ex = extractor(&[("a", "alpha"), ("b", "beta")]);
        assert_eq!(ids(ex.extract("BETA beta Alpha")), ["b", "b", "a"]);
    }

    #[test]
    fn test_word_aligned() {
        let ex = extractor(&[("b", "beta")]);
        assert!(ex.extract("alphabeta betamax").is_empty());
        assert_eq!(ids(ex.extract("(beta), beta's")), ["b", "b"]);
    }

    #[test]
    fn test_matches_do_not_span_lines() {
        let ex = extractor(&[("nd", "national defence")]);
        assert!(ex.extract("national\ndefence").is_empty());
        assert_eq!(ids(ex.extract("\n\nnational   defence\n")), ["nd"]);
    }

    #[test]
    fn test_restartable() {
        let ex = extractor(&[("a", "alpha")]);
        let text = "alpha alpha";
        let mut first = ex.mentions(text);
        assert!(first.next().is_some());
        let rest = first.clone().count();
        assert_eq!(rest, 1);
        assert_eq!(ex.mentions(text).count(), 2);
    }

    #[test]
    fn test_empty_text() {
        let ex = extractor(&[("a", "alpha")]);
        assert_eq!(ex.mentions("").count(), 0);
    }

    #[test]
    fn test_empty_catalog() {
        let ex = MentionExtractor::new(&EntityCatalog::default()).unwrap();
        assert!(ex.extract("alpha beta").is_empty());
    }

    #[test]
    fn test_word_cells() {
        assert_eq!(word_cells(["national", "defence"].into_iter()), " national  defence ");
        assert_eq!(word_cells(std::iter::empty()), "");
    }
}
