use crate::error::{Result, ScrapeError};
use scraper::Selector;

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e}")))
}

/// How the target table is told apart from the other tables on the page.
#[derive(Debug, Clone)]
pub enum Locator {
    /// First table whose `th` texts contain every label.
    HeaderSignature(Vec<&'static str>),
    /// First table carrying the class.
    Class {
        class: &'static str,
        selector: Selector,
    },
}

impl Locator {
    pub fn headers(labels: &[&'static str]) -> Self {
        Self::HeaderSignature(labels.to_vec())
    }

    pub fn class(class: &'static str) -> Result<Self> {
        Ok(Self::Class {
            class,
            selector: selector(&format!("table.{class}"))?,
        })
    }
}

/// Which `tr` elements of the located table are data rows.
#[derive(Debug, Clone)]
pub enum RowSelection {
    /// Every row except the first, which is taken to be the header.
    AfterHeader,
    /// Only rows matching the selector, header rows never match.
    Classed(Selector),
}

/// Cell-level extraction strategy.
#[derive(Debug, Clone)]
pub enum Extraction {
    Text,
    /// `"{link} {badge}"`, trimmed; either part may be missing.
    LinkAndBadge { link: Selector, badge: Selector },
    /// Element inside the cell's nested table, first row.
    SubTableLink(Selector),
    /// First cell of the second row of the cell's nested table.
    SubTableSecondRow,
    /// Canonical rendering inside a marker span, falling back to the cell text.
    PreferredSpan(Selector),
    /// Text of a specific link, falling back to the cell text.
    LinkOrText(Selector),
}

/// Placeholder and type policy applied to an extracted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Text as-is, `-` preserved, absent cell becomes null.
    Identity,
    /// `-` or absent becomes `"0"`.
    DashToZero,
    /// `-` or absent becomes null.
    DashToNull,
    /// Integer when the text is all ASCII digits, 0 otherwise.
    IntOrZero,
    /// Signed integer; anything else invalidates the row.
    Int,
}

#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub index: usize,
    pub extraction: Extraction,
    pub normalization: Normalization,
}

impl ColumnSpec {
    pub fn new(field: &'static str, index: usize, extraction: Extraction) -> Self {
        Self {
            field,
            index,
            extraction,
            normalization: Normalization::Identity,
        }
    }

    pub fn text(field: &'static str, index: usize) -> Self {
        Self::new(field, index, Extraction::Text)
    }

    pub fn normalize(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
}

/// Declarative description of one target table and its positional mapping.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub name: &'static str,
    pub locator: Locator,
    pub rows: RowSelection,
    pub min_cells: usize,
    pub columns: Vec<ColumnSpec>,
}
