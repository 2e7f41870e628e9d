//! Minimal element tree with a deterministic, indented XML writer.

use std::fmt::{self, Write as _};

const INDENT: &str = "  ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set an attribute, replacing an existing value in place (attribute order is stable).
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((key, value)),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Depth-first pre-order walk including `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|e| e.get_attr("id") == Some(id))
    }

    // `inline` skips the leading indent for a child that directly follows parent text.
    fn write_into(&self, out: &mut String, depth: usize, inline: bool) -> fmt::Result {
        let pad = INDENT.repeat(depth);
        if !inline {
            out.push_str(&pad);
        }
        write!(out, "<{}", self.name)?;
        for (key, value) in &self.attrs {
            write!(out, " {key}=\"{}\"", escape_attr(value))?;
        }

        if self.children.is_empty() {
            return match &self.text {
                Some(text) => writeln!(out, ">{}</{}>", escape_text(text), self.name),
                None => writeln!(out, " />"),
            };
        }

        out.push('>');
        let has_text = match &self.text {
            Some(text) => {
                out.push_str(&escape_text(text));
                true
            }
            None => {
                out.push('\n');
                false
            }
        };
        for (idx, child) in self.children.iter().enumerate() {
            child.write_into(out, depth + 1, has_text && idx == 0)?;
        }
        writeln!(out, "{pad}</{}>", self.name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_into(&mut out, 0, false)?;
        f.write_str(out.trim_end_matches('\n'))
    }
}

fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/document/tree.rs"]
mod tests;
