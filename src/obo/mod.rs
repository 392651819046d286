//! Line-oriented reader for the OBO stanza format.
//!
//! An OBO stream is a header followed by stanzas, each introduced by a
//! `[Term]` or `[Typedef]` marker line and made of `tag: value` lines. The
//! reader only tokenizes: it maps each stanza to its tag/value records and
//! leaves all interpretation to the term store.

use std::collections::BTreeMap;
use std::io::BufRead;

use thiserror::Error;

const TERM_MARKER: &str = "[Term]";
const TYPEDEF_MARKER: &str = "[Typedef]";

/// Stanza kinds recognized in an OBO stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StanzaKind {
    Term,
    Typedef,
}

/// One tokenized stanza: tag names mapped to their values in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stanza {
    kind: StanzaKind,
    tags: BTreeMap<String, Vec<String>>,
}

impl Stanza {
    /// Creates an empty stanza. The term store consumes stanzas from any
    /// producer, not just [`read_stanzas`].
    #[must_use]
    pub fn new(kind: StanzaKind) -> Self {
        Self {
            kind,
            tags: BTreeMap::new(),
        }
    }

    /// Appends a value under a tag, preserving arrival order.
    pub fn push(&mut self, tag: &str, value: &str) {
        self.tags
            .entry(tag.to_owned())
            .or_default()
            .push(value.to_owned());
    }

    /// Returns the stanza kind.
    #[must_use]
    pub fn kind(&self) -> StanzaKind {
        self.kind
    }

    /// Returns every value recorded for a tag, in file order.
    #[must_use]
    pub fn values(&self, tag: &str) -> &[String] {
        self.tags.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Returns the first value recorded for a tag.
    #[must_use]
    pub fn first(&self, tag: &str) -> Option<&str> {
        self.values(tag).first().map(String::as_str)
    }

    /// Returns whether the stanza carried no tag lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Errors produced while reading an OBO stream.
#[derive(Debug, Error)]
pub enum OboError {
    /// The underlying reader failed.
    #[error("failed to read ontology source: {0}")]
    Io(#[from] std::io::Error),
}

/// Tokenizes a whole OBO stream into stanzas.
///
/// Header lines before the first marker are skipped, blank lines are
/// ignored, and a tag line without a `": "` separator is dropped rather
/// than aborting the stanza.
pub fn read_stanzas<R: BufRead>(reader: R) -> Result<Vec<Stanza>, OboError> {
    let mut stanzas = Vec::new();
    let mut current: Option<Stanza> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let marker = match line {
            TERM_MARKER => Some(StanzaKind::Term),
            TYPEDEF_MARKER => Some(StanzaKind::Typedef),
            _ => None,
        };

        if let Some(kind) = marker {
            if let Some(stanza) = current.take() {
                stanzas.push(stanza);
            }
            current = Some(Stanza::new(kind));
            continue;
        }

        let Some(stanza) = current.as_mut() else {
            // Still in the file header.
            continue;
        };
        if let Some((tag, value)) = line.split_once(": ") {
            stanza.push(tag, value);
        }
    }

    if let Some(stanza) = current.take() {
        stanzas.push(stanza);
    }
    Ok(stanzas)
}

#[cfg(test)]
mod tests {
    use super::{read_stanzas, StanzaKind};

    const SAMPLE: &str = "\
format-version: 1.2
date: 01:01:2014

[Term]
id: UBERON:0000001
name: embryo
is_a: UBERON:0000002 ! conceptus
is_a: UBERON:0000003 ! organism

[Typedef]
id: part_of
name: part of

[Term]
id: UBERON:0000004
";

    #[test]
    fn skips_header_and_splits_on_markers() {
        let stanzas = read_stanzas(SAMPLE.as_bytes()).expect("tokenize");
        assert_eq!(stanzas.len(), 3);
        assert_eq!(stanzas[0].kind(), StanzaKind::Term);
        assert_eq!(stanzas[1].kind(), StanzaKind::Typedef);
        assert_eq!(stanzas[2].kind(), StanzaKind::Term);
        assert!(stanzas[0].values("format-version").is_empty());
    }

    #[test]
    fn repeated_tags_keep_file_order() {
        let stanzas = read_stanzas(SAMPLE.as_bytes()).expect("tokenize");
        assert_eq!(
            stanzas[0].values("is_a"),
            &[
                "UBERON:0000002 ! conceptus".to_owned(),
                "UBERON:0000003 ! organism".to_owned(),
            ]
        );
        assert_eq!(stanzas[0].first("name"), Some("embryo"));
    }

    #[test]
    fn stanza_without_tags_is_empty() {
        let stanzas = read_stanzas("[Term]\n".as_bytes()).expect("tokenize");
        assert_eq!(stanzas.len(), 1);
        assert!(stanzas[0].is_empty());
        assert_eq!(stanzas[0].first("id"), None);
    }

    #[test]
    fn tag_line_without_separator_is_dropped() {
        let stanzas =
            read_stanzas("[Term]\nid: GO:0000001\nmalformed line\n".as_bytes()).expect("tokenize");
        assert_eq!(stanzas[0].first("id"), Some("GO:0000001"));
        assert_eq!(stanzas[0].tags.len(), 1);
    }
}
