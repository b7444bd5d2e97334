//! Document tree: the composed, styled output handed to the rendering host.
//!
//! The tree says *what* goes *where* and with which colors; flow layout and
//! pixel metrics belong to the host. Every color the accent touches is
//! copied into the node it styles, so a `Document` is self-contained.

use std::fmt;

use serde::Serialize;

use crate::render::registry::TemplateId;

// ────────────────────────────────────────────────────────────────────────────
// Style primitives
// ────────────────────────────────────────────────────────────────────────────

/// An opaque color value. Never parsed or validated here; the host decides
/// what to do with values it cannot paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends a two-digit hex alpha suffix (`#10b981` + `22` → `#10b98122`).
    /// Non-hex inputs pass through with the suffix attached and degrade in
    /// the host like any other invalid color.
    pub fn with_alpha(&self, alpha_hex: &str) -> Self {
        Self(format!("{}{}", self.0, alpha_hex))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Typeface {
    Serif,
    Sans,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Solid(Color),
    Gradient { from: Color, to: Color },
}

/// A structural decoration painted in a theme color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Border { side: Side, color: Color },
    /// Double rule (top and bottom border of an empty band).
    DoubleRule(Color),
    Background(Fill),
    /// Short decorative bar next to a heading or the name block.
    Bar(Fill),
}

/// Document-wide style parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub typeface: Typeface,
    pub scheme: ColorScheme,
    pub accent: Color,
}

// ────────────────────────────────────────────────────────────────────────────
// Identity header
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStyle {
    /// One line, items separated by `separator` when present.
    Inline,
    /// Rounded pills on the header background.
    Pills,
    /// `@email: "..."` annotation style.
    Annotated,
    /// One item per row with an icon slot.
    Stacked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Avatar {
    Photo { url: String, background: Color },
    Monogram { letter: char, background: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderPlacement {
    Top,
    /// Rendered at the head of the first column of the body.
    Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub profession: Option<String>,
    pub profession_color: Option<Color>,
    pub contacts: Vec<ContactItem>,
    pub contact_style: ContactStyle,
    pub contact_separator: Option<String>,
    pub avatar: Option<Avatar>,
    pub align: Align,
    pub placement: HeaderPlacement,
    pub accent: Option<Accent>,
}

// ────────────────────────────────────────────────────────────────────────────
// Body
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Contact,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Languages,
    References,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Plain,
    Italic,
    /// Wrapped in `/** ... */` markers painted in the marker color.
    DocComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipStyle {
    /// Filled with the chip color, light text.
    Solid,
    /// Chip color border and text, no fill.
    Outline,
    /// Chip color text on a translucent tint of itself.
    Tinted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub label: String,
    pub style: ChipStyle,
    pub color: Color,
}

/// One dated item in a list section (a job, a degree, a project...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    pub subtitle: Option<String>,
    pub subtitle_color: Option<Color>,
    pub dates: Option<String>,
    pub dates_color: Option<Color>,
    pub details: Vec<String>,
    pub detail_color: Option<Color>,
    pub body: Option<String>,
    /// Timeline dot or similar marker drawn beside the entry.
    pub marker: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    Text {
        text: String,
        style: TextStyle,
        marker_color: Option<Color>,
    },
    Entries(Vec<Entry>),
    Chips(Vec<Chip>),
    /// A single delimited line of short items.
    Inline { items: Vec<String>, separator: String },
    Contacts(Vec<ContactItem>),
    /// Fixed text standing in for content (e.g. references on request).
    Notice(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: Option<String>,
    pub title_color: Option<Color>,
    pub accent: Option<Accent>,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Relative width; siblings' spans are summed by the host.
    pub span: u8,
    pub background: Option<Fill>,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Section(Section),
    Columns {
        columns: Vec<Column>,
        divider: Option<Color>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub template: TemplateId,
    pub theme: Theme,
    pub header: Header,
    pub body: Vec<Node>,
}

impl Document {
    /// All sections in reading order, descending into columns left to right.
    pub fn sections(&self) -> Vec<&Section> {
        let mut out = Vec::new();
        collect_sections(&self.body, &mut out);
        out
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections().into_iter().find(|s| s.kind == kind)
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections().iter().map(|s| s.kind).collect()
    }
}

fn collect_sections<'a>(nodes: &'a [Node], out: &mut Vec<&'a Section>) {
    for node in nodes {
        match node {
            Node::Section(section) => out.push(section),
            Node::Columns { columns, .. } => {
                for column in columns {
                    collect_sections(&column.nodes, out);
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

impl Section {
    pub fn new(kind: SectionKind, content: Content) -> Self {
        Self {
            kind,
            title: None,
            title_color: None,
            accent: None,
            content,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    pub fn accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }
}

impl From<Section> for Node {
    fn from(section: Section) -> Self {
        Node::Section(section)
    }
}

impl Column {
    pub fn new(span: u8, nodes: Vec<Node>) -> Self {
        Self {
            span,
            background: None,
            nodes,
        }
    }
}
