//! Typed content units of a generated document.
//!
//! On the wire each block is a JSON object keyed by its kind
//! (`{"paragraph": "..."}`, `{"metric": "...", "description": "..."}`, ...).
//! Decoding goes through [`RawBlock`] so that exactly one kind tag is enforced.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::BlockError;

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Cell {
    /// String form of the cell as it would appear in a rendered table.
    pub fn render(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// True when the rendered cell is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.render().trim().is_empty()
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A headline number with its description and supporting citations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricBlock {
    pub value: Option<String>,
    pub description: Option<String>,
    pub citations: BTreeSet<u32>,
}

/// A table; row 0 is the header row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableBlock {
    pub rows: Vec<Vec<Cell>>,
    pub citations: BTreeSet<u32>,
}

/// Image variants produced upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageBlock {
    /// Image generated from a prompt.
    AiGenerated { prompt: String },
    /// Image found through a web search query.
    Web { query: String },
    /// Chart rendered from a data query.
    Chart { query: String, caption: String },
}

/// One typed content unit of a generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlock", into = "RawBlock")]
pub enum Block {
    Title { text: String },
    Header { text: String },
    Paragraph { text: String },
    Metric(MetricBlock),
    Table(TableBlock),
    Quote { text: String, author: String },
    Image(ImageBlock),
}

/// Kind tag of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Title,
    Header,
    Paragraph,
    Metric,
    Table,
    Quote,
    Image,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Header => "header",
            Self::Paragraph => "paragraph",
            Self::Metric => "metric",
            Self::Table => "table",
            Self::Quote => "quote",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Block {
    pub fn header(text: impl Into<String>) -> Self {
        Self::Header { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn metric(value: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Metric(MetricBlock {
            value: Some(value.into()),
            description: Some(description.into()),
            citations: BTreeSet::new(),
        })
    }

    pub fn table(rows: Vec<Vec<Cell>>) -> Self {
        Self::Table(TableBlock {
            rows,
            citations: BTreeSet::new(),
        })
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Title { .. } => BlockKind::Title,
            Self::Header { .. } => BlockKind::Header,
            Self::Paragraph { .. } => BlockKind::Paragraph,
            Self::Metric(_) => BlockKind::Metric,
            Self::Table(_) => BlockKind::Table,
            Self::Quote { .. } => BlockKind::Quote,
            Self::Image(_) => BlockKind::Image,
        }
    }

    /// Text used when the block is compared against its neighbours or the query.
    pub fn renderable_text(&self) -> &str {
        match self {
            Self::Title { text } | Self::Header { text } | Self::Paragraph { text } => text,
            _ => "",
        }
    }

    /// Citation numbers attached to the block. Only metrics and tables carry them.
    pub fn citations(&self) -> Option<&BTreeSet<u32>> {
        match self {
            Self::Metric(m) => Some(&m.citations),
            Self::Table(t) => Some(&t.citations),
            _ => None,
        }
    }

    pub fn has_citations(&self) -> bool {
        self.citations().is_some_and(|c| !c.is_empty())
    }

    pub fn header_text(&self) -> Option<&str> {
        match self {
            Self::Header { text } => Some(text),
            _ => None,
        }
    }

    pub fn paragraph_text(&self) -> Option<&str> {
        match self {
            Self::Paragraph { text } => Some(text),
            _ => None,
        }
    }

    /// Add citation numbers to a metric or table. Other kinds are returned unchanged.
    pub fn with_citations(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        match &mut self {
            Self::Metric(m) => m.citations.extend(ids),
            Self::Table(t) => t.citations.extend(ids),
            _ => {}
        }
        self
    }
}

/// Wire form of a block: every kind's fields flattened into one object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    paragraph: Option<String>,
    #[serde(
        default,
        alias = "number",
        deserialize_with = "text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    metric: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    table: Option<Vec<Vec<Cell>>>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    citations: BTreeSet<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ai_generated_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    google_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
}

impl RawBlock {
    fn present_tags(&self) -> Vec<&'static str> {
        [
            ("title", self.title.is_some()),
            ("header", self.header.is_some()),
            ("paragraph", self.paragraph.is_some()),
            ("metric", self.metric.is_some()),
            ("table", self.table.is_some()),
            ("quote", self.quote.is_some()),
            ("ai_generated_image", self.ai_generated_image.is_some()),
            ("google_image", self.google_image.is_some()),
            ("chart", self.chart.is_some()),
        ]
        .into_iter()
        .filter_map(|(tag, present)| present.then_some(tag))
        .collect()
    }
}

impl TryFrom<RawBlock> for Block {
    type Error = BlockError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let tags = raw.present_tags();
        match tags.as_slice() {
            [] => Err(BlockError::NoKind),
            [_] => Ok(raw.into_block()),
            many => Err(BlockError::AmbiguousKind {
                tags: many.join(", "),
            }),
        }
    }
}

impl RawBlock {
    // Caller guarantees exactly one tag is present.
    fn into_block(self) -> Block {
        if let Some(text) = self.title {
            Block::Title { text }
        } else if let Some(text) = self.header {
            Block::Header { text }
        } else if let Some(text) = self.paragraph {
            Block::Paragraph { text }
        } else if let Some(rows) = self.table {
            Block::Table(TableBlock {
                rows,
                citations: self.citations,
            })
        } else if let Some(text) = self.quote {
            Block::Quote {
                text,
                author: self.author.unwrap_or_default(),
            }
        } else if let Some(prompt) = self.ai_generated_image {
            Block::Image(ImageBlock::AiGenerated { prompt })
        } else if let Some(query) = self.google_image {
            Block::Image(ImageBlock::Web { query })
        } else if let Some(query) = self.chart {
            Block::Image(ImageBlock::Chart {
                query,
                caption: self.caption.unwrap_or_default(),
            })
        } else {
            Block::Metric(MetricBlock {
                value: self.metric,
                description: self.description,
                citations: self.citations,
            })
        }
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        let mut raw = RawBlock::default();
        match block {
            Block::Title { text } => raw.title = Some(text),
            Block::Header { text } => raw.header = Some(text),
            Block::Paragraph { text } => raw.paragraph = Some(text),
            Block::Metric(m) => {
                raw.metric = Some(m.value.unwrap_or_default());
                raw.description = m.description;
                raw.citations = m.citations;
            }
            Block::Table(t) => {
                raw.table = Some(t.rows);
                raw.citations = t.citations;
            }
            Block::Quote { text, author } => {
                raw.quote = Some(text);
                raw.author = Some(author);
            }
            Block::Image(ImageBlock::AiGenerated { prompt }) => {
                raw.ai_generated_image = Some(prompt)
            }
            Block::Image(ImageBlock::Web { query }) => raw.google_image = Some(query),
            Block::Image(ImageBlock::Chart { query, caption }) => {
                raw.chart = Some(query);
                raw.caption = Some(caption);
            }
        }
        raw
    }
}

/// Accept metric values written either as strings or as bare JSON numbers.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(Cell::Number(42.0).render(), "42");
        assert_eq!(Cell::Number(2.5).render(), "2.5");
        assert!(Cell::Null.is_blank());
        assert!(Cell::Text("   ".into()).is_blank());
    }

    #[test]
    fn numeric_metric_value_is_accepted() {
        let block: Block =
            serde_json::from_str(r#"{"number": 12.5, "description": "growth"}"#).unwrap();
        match block {
            Block::Metric(m) => assert_eq!(m.value.as_deref(), Some("12.5")),
            other => panic!("expected metric, got {other:?}"),
        }
    }
}
