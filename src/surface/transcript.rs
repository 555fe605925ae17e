//! In-memory output surface.
//!
//! Mirrors the DOM the website builds: each line-node is a styled span
//! followed by a line break, and a blank line is a bare break. An opened
//! line is appended together with its break right away, then its text grows
//! in place.

use std::io;

use serde::Serialize;

use super::{class_attr, OutputSurface};

/// A style-tagged line of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineNode {
    #[serde(rename = "styleClass", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub text: String,
}

impl LineNode {
    /// Class attribute including the base `line` class.
    pub fn classes(&self) -> String {
        class_attr(self.class.as_deref())
    }
}

/// One node of the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "kebab-case")]
pub enum Node {
    Line(LineNode),
    Break,
}

/// Append-only record of everything the player rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    nodes: Vec<Node>,
    /// Index of the line-node currently being typed
    open: Option<usize>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All line-nodes in document order.
    pub fn lines(&self) -> impl Iterator<Item = &LineNode> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Line(line) => Some(line),
            Node::Break => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn break_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Break))
            .count()
    }

    /// Text of the line currently being typed, if any.
    pub fn open_text(&self) -> Option<&str> {
        match self.open.and_then(|idx| self.nodes.get(idx)) {
            Some(Node::Line(line)) => Some(&line.text),
            _ => None,
        }
    }

    /// Text content of the whole surface, one line per break.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Line(line) => out.push_str(&line.text),
                Node::Break => out.push('\n'),
            }
        }
        out
    }

    /// HTML-like markup of the surface, e.g. `<span class="line cmd">hi</span>\n`.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Line(line) => {
                    out.push_str("<span class=\"");
                    out.push_str(&line.classes());
                    out.push_str("\">");
                    escape_into(&line.text, &mut out);
                    out.push_str("</span>");
                }
                Node::Break => out.push('\n'),
            }
        }
        out
    }

    fn open_line_mut(&mut self) -> io::Result<&mut LineNode> {
        match self.open.and_then(|idx| self.nodes.get_mut(idx)) {
            Some(Node::Line(line)) => Ok(line),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no line is open for typing",
            )),
        }
    }
}

impl OutputSurface for Transcript {
    fn line_break(&mut self) -> io::Result<()> {
        self.nodes.push(Node::Break);
        Ok(())
    }

    fn push_line(&mut self, text: &str, class: Option<&str>) -> io::Result<()> {
        self.nodes.push(Node::Line(LineNode {
            class: class.map(str::to_string),
            text: text.to_string(),
        }));
        self.nodes.push(Node::Break);
        Ok(())
    }

    fn open_line(&mut self, class: Option<&str>) -> io::Result<()> {
        self.open = Some(self.nodes.len());
        self.nodes.push(Node::Line(LineNode {
            class: class.map(str::to_string),
            text: String::new(),
        }));
        self.nodes.push(Node::Break);
        Ok(())
    }

    fn push_char(&mut self, ch: char) -> io::Result<()> {
        self.open_line_mut()?.text.push(ch);
        Ok(())
    }

    fn close_line(&mut self) -> io::Result<()> {
        self.open = None;
        Ok(())
    }
}

/// Escape text content the way a DOM serializer would.
fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
