//! Content model for presentation sections
//!
//! Section content is a closed tree of [`ContentNode`]s. The renderer walks
//! it with an exhaustive `match`, so no view logic lives inside the data.

use indexmap::IndexMap;
use std::fmt;

/// An RGB color used by chart encodings and swatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self(
            ((hex >> 16) & 0xff) as u8,
            ((hex >> 8) & 0xff) as u8,
            (hex & 0xff) as u8,
        )
    }
}

/// A single field value inside a chart record
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Number(f64),
    Label(String),
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Number(value) => write!(f, "{}", value),
            Datum::Label(label) => f.write_str(label),
        }
    }
}

/// One row of a chart series: named fields in declaration order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: IndexMap<String, Datum>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string field
    pub fn label(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), Datum::Label(value.into()));
        self
    }

    /// Add a numeric field
    pub fn number(mut self, field: impl Into<String>, value: f64) -> Self {
        self.fields.insert(field.into(), Datum::Number(value));
        self
    }

    pub fn get(&self, field: &str) -> Option<&Datum> {
        self.fields.get(field)
    }

    /// Numeric value of a field, if the field holds a number
    pub fn number_of(&self, field: &str) -> Option<f64> {
        match self.fields.get(field)? {
            Datum::Number(value) => Some(*value),
            Datum::Label(_) => None,
        }
    }

    /// Display text of a field, numbers included
    pub fn text_of(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(|datum| datum.to_string())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Datum)> {
        self.fields.iter().map(|(name, datum)| (name.as_str(), datum))
    }
}

/// Chart kinds understood by the chart adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Scatter,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value channel plotted from one record field
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// Record field holding the values
    pub field: String,

    /// Name shown in legends and tooltips
    pub name: String,

    /// Explicit color; the adapter falls back to the palette by index
    pub color: Option<Rgb>,
}

/// Static, declarative description of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,

    /// Records in display order
    pub series: Vec<Record>,

    /// Field used for the x axis (line, bar, scatter) or slice names (pie)
    pub x_field: String,

    pub x_label: Option<String>,
    pub y_label: Option<String>,

    /// Plotted value fields
    pub channels: Vec<Channel>,

    /// Field controlling marker size (scatter only)
    pub size_field: Option<String>,

    /// Field naming each point in tooltips (scatter only)
    pub label_field: Option<String>,

    /// Marker area range the size field maps onto
    pub size_range: (f64, f64),

    /// Per-element colors (pie slices), cycled by index
    pub palette: Vec<Rgb>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, series: Vec<Record>) -> Self {
        Self {
            kind,
            series,
            x_field: String::new(),
            x_label: None,
            y_label: None,
            channels: Vec::new(),
            size_field: None,
            label_field: None,
            size_range: (100.0, 500.0),
            palette: Vec::new(),
        }
    }

    pub fn line(series: Vec<Record>) -> Self {
        Self::new(ChartKind::Line, series)
    }

    pub fn bar(series: Vec<Record>) -> Self {
        Self::new(ChartKind::Bar, series)
    }

    pub fn pie(series: Vec<Record>) -> Self {
        Self::new(ChartKind::Pie, series)
    }

    pub fn scatter(series: Vec<Record>) -> Self {
        Self::new(ChartKind::Scatter, series)
    }

    pub fn x_field(mut self, field: impl Into<String>) -> Self {
        self.x_field = field.into();
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Add a value channel colored from the default palette
    pub fn channel(mut self, field: impl Into<String>, name: impl Into<String>) -> Self {
        self.channels.push(Channel {
            field: field.into(),
            name: name.into(),
            color: None,
        });
        self
    }

    /// Add a value channel with an explicit color
    pub fn colored_channel(
        mut self,
        field: impl Into<String>,
        name: impl Into<String>,
        color: Rgb,
    ) -> Self {
        self.channels.push(Channel {
            field: field.into(),
            name: name.into(),
            color: Some(color),
        });
        self
    }

    pub fn size(mut self, field: impl Into<String>, range: (f64, f64)) -> Self {
        self.size_field = Some(field.into());
        self.size_range = range;
        self
    }

    pub fn point_label(mut self, field: impl Into<String>) -> Self {
        self.label_field = Some(field.into());
        self
    }

    pub fn palette(mut self, colors: &[Rgb]) -> Self {
        self.palette = colors.to_vec();
        self
    }

    /// Display text of the x field for every record, in order
    pub fn categories(&self) -> Vec<String> {
        self.series
            .iter()
            .map(|record| record.text_of(&self.x_field).unwrap_or_default())
            .collect()
    }
}

/// A labelled, verbatim block of illustrative source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    /// Label of the control that reveals the block
    pub label: String,

    /// Language tag used for highlighting
    pub language: String,

    pub code: String,
}

impl CodeSample {
    pub fn new(label: impl Into<String>, language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            language: language.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// Top heading inside a section body
    Section,
    /// Heading of a panel or chart
    Subsection,
    /// Heading of a card or callout
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTone {
    #[default]
    Body,
    /// Small, muted text under charts
    Caption,
    /// Small italic remark
    Note,
}

/// A paragraph of narrative text with optional reference citations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
    pub tone: TextTone,

    /// 1-based indices into the references section
    pub citations: Vec<u32>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: TextTone::Body,
            citations: Vec::new(),
        }
    }

    pub fn caption(mut self) -> Self {
        self.tone = TextTone::Caption;
        self
    }

    pub fn note(mut self) -> Self {
        self.tone = TextTone::Note;
        self
    }

    pub fn cite(mut self, citations: &[u32]) -> Self {
        self.citations.extend_from_slice(citations);
        self
    }

    /// Citation marker such as `[1, 15]`, if any citations are attached
    pub fn citation_marker(&self) -> Option<String> {
        if self.citations.is_empty() {
            return None;
        }
        let joined = self
            .citations
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("[{}]", joined))
    }
}

/// Colored key used in feature-weight cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchCard {
    pub title: String,
    pub swatches: Vec<Swatch>,
}

impl SwatchCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            swatches: Vec::new(),
        }
    }

    pub fn swatch(mut self, label: impl Into<String>, color: Rgb) -> Self {
        self.swatches.push(Swatch {
            label: label.into(),
            color,
        });
        self
    }
}

/// A cited source with its link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub text: String,
    pub url: String,
}

impl Reference {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Visual treatment of a group of nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStyle {
    /// Tinted, bordered block for the main point of a section
    Highlight,
    /// Neutral background around a chart
    Panel,
    /// Small amber box tying the slide back to the course unit
    Callout,
    /// White card inside a grid or row
    Card,
    /// Children laid out in a grid with this many columns
    Columns(usize),
    /// Children laid out side by side
    Row,
}

/// A node of section content
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Heading { level: HeadingLevel, text: String },
    Text(Paragraph),
    List(Vec<String>),
    Chart(ChartSpec),
    Code(CodeSample),
    Swatches(SwatchCard),
    References(Vec<Reference>),
    Group { style: GroupStyle, children: Vec<ContentNode> },
}

impl ContentNode {
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        ContentNode::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentNode::Text(Paragraph::new(text))
    }

    pub fn list<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        ContentNode::List(items.into_iter().map(Into::into).collect())
    }

    pub fn group(style: GroupStyle, children: Vec<ContentNode>) -> Self {
        ContentNode::Group { style, children }
    }

    /// Code samples embedded anywhere below this node, in document order
    pub fn code_samples(&self) -> Vec<&CodeSample> {
        let mut samples = Vec::new();
        self.collect_code_samples(&mut samples);
        samples
    }

    fn collect_code_samples<'a>(&'a self, out: &mut Vec<&'a CodeSample>) {
        match self {
            ContentNode::Code(sample) => out.push(sample),
            ContentNode::Group { children, .. } => {
                for child in children {
                    child.collect_code_samples(out);
                }
            }
            ContentNode::Heading { .. }
            | ContentNode::Text(_)
            | ContentNode::List(_)
            | ContentNode::Chart(_)
            | ContentNode::Swatches(_)
            | ContentNode::References(_) => {}
        }
    }

    /// Charts embedded anywhere below this node, in document order
    pub fn charts(&self) -> Vec<&ChartSpec> {
        match self {
            ContentNode::Chart(spec) => vec![spec],
            ContentNode::Group { children, .. } => {
                children.iter().flat_map(|child| child.charts()).collect()
            }
            _ => Vec::new(),
        }
    }
}
