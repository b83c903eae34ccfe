// src/services/fields.rs

//! Positional field extraction.
//!
//! Listing pages expose every field of a row as its own flat node list, so a
//! record is rebuilt by zipping independent queries by position. A count
//! query fixes the number of records; every field query must then match
//! exactly that many nodes or the whole extraction fails with
//! `AppError::ParseInconsistency`.

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::VIRAL_SCORE;
use crate::utils::text::{element_text, parse_selector};

/// Glyph shown instead of a number once a post goes viral.
pub const VIRAL_GLYPH: &str = "爆";

/// Per-call identifier source.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: usize,
}

impl IdSequence {
    pub fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

/// A count query over a document plus the field queries aligned to it.
pub struct FieldScan<'a> {
    document: &'a Html,
    context: &'static str,
    count: usize,
}

impl<'a> FieldScan<'a> {
    /// Count the entry containers matched by `entry_selector`.
    pub fn new(document: &'a Html, context: &'static str, entry_selector: &str) -> Result<Self> {
        let selector = parse_selector(entry_selector)?;
        let count = document.select(&selector).count();
        log::debug!("{}: {} entries", context, count);
        Ok(Self {
            document,
            context,
            count,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Allocate one record per entry, each with a fresh identifier.
    pub fn allocate<T>(&self, mut make: impl FnMut(String) -> T) -> Vec<T> {
        let mut ids = IdSequence::default();
        (0..self.count).map(|_| make(ids.next_id())).collect()
    }

    /// Run the field query `selector` and hand match `i` to record `i`.
    ///
    /// Nothing is assigned unless the match count equals the entry count.
    pub fn fill<T>(
        &self,
        records: &mut [T],
        selector: &str,
        mut assign: impl FnMut(&mut T, ElementRef<'a>),
    ) -> Result<()> {
        let parsed = parse_selector(selector)?;
        let matches: Vec<ElementRef<'a>> = self.document.select(&parsed).collect();

        if matches.len() != self.count || records.len() != self.count {
            log::warn!(
                "{}: '{}' matched {} node(s) for {} entries",
                self.context,
                selector,
                matches.len(),
                self.count
            );
            return Err(AppError::inconsistency(
                self.context,
                selector,
                self.count,
                matches.len(),
            ));
        }

        for (record, el) in records.iter_mut().zip(matches) {
            assign(record, el);
        }
        Ok(())
    }
}

/// Marker-class to tier mapping, checked in order.
#[derive(Debug, Clone, Copy)]
pub struct TierTable {
    markers: &'static [(&'static str, u8)],
    fallback: u8,
}

/// Post rows: f1 → 1, f2 → 2, f3 → 3, otherwise 4.
pub const BOARD_TIERS: TierTable = TierTable {
    markers: &[("f1", 1), ("f2", 2), ("f3", 3)],
    fallback: 4,
};

/// Hot boards: f6 → 1, f4 → 2, f1 → 3, f3 → 5, otherwise 4.
pub const HOT_BOARD_TIERS: TierTable = TierTable {
    markers: &[("f6", 1), ("f4", 2), ("f1", 3), ("f3", 5)],
    fallback: 4,
};

impl TierTable {
    /// Tier of the first marker for which `has_marker` holds.
    pub fn lookup(&self, has_marker: impl Fn(&str) -> bool) -> u8 {
        self.markers
            .iter()
            .find(|(class, _)| has_marker(class))
            .map(|(_, tier)| *tier)
            .unwrap_or(self.fallback)
    }

    /// Tier of an element, from the marker classes on its non-empty descendants.
    pub fn of(&self, el: ElementRef<'_>) -> u8 {
        self.lookup(|class| {
            el.descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .any(|child| {
                    child.value().classes().any(|c| c == class) && !element_text(child).is_empty()
                })
        })
    }
}

/// Push score of a post row: the viral glyph maps to [`VIRAL_SCORE`],
/// anything unparsable to `0`.
pub fn parse_score(text: &str) -> i32 {
    let text = text.trim();
    if text == VIRAL_GLYPH {
        VIRAL_SCORE
    } else {
        text.parse().unwrap_or(0)
    }
}
