//! Built-in streaming optimizer.
//!
//! A single-pass event rewrite over `quick-xml`: elements are re-emitted with
//! filtered, cleaned, and optionally sorted attributes, and skippable
//! subtrees (metadata, editor elements) are dropped wholesale. The rewrite
//! never reorders siblings, so visual output is unchanged.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use regex::Regex;

use super::{OptimizePass, Plugin, SvgOptimizer};
use crate::error::{Error, Result};

/// Attributes whose values are subject to numeric cleanup.
const NUMERIC_ATTRS: &[&str] = &[
    "x", "y", "width", "height", "cx", "cy", "r", "rx", "ry", "x1", "y1", "x2", "y2", "d",
    "points", "viewBox", "stroke-width", "opacity", "fill-opacity", "stroke-opacity",
    "stroke-dashoffset",
];

/// The built-in structural optimizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOptimizer;

impl DefaultOptimizer {
    /// Create a new built-in optimizer.
    pub fn new() -> Self {
        Self
    }
}

impl SvgOptimizer for DefaultOptimizer {
    fn optimize(&self, svg: &str, pass: &OptimizePass) -> Result<String> {
        let mut reader = Reader::from_str(svg);
        let mut run = Run::new(pass);

        loop {
            match reader.read_event().map_err(opt_err)? {
                Event::Eof => break,
                event => run.handle(event)?,
            }
        }

        run.finish()
    }

    fn name(&self) -> &str {
        "builtin"
    }
}

fn opt_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Optimize(err.to_string())
}

/// A self-closing `<path>` held back for possible merging with the next one.
struct PendingPath {
    attrs: Vec<(String, String)>,
    d: String,
}

/// State for one rewrite pass.
struct Run<'a> {
    pass: &'a OptimizePass,
    writer: Writer<Vec<u8>>,
    number_re: Regex,
    depth: usize,
    skip_from: Option<usize>,
    elided: Vec<bool>,
    pending: Option<PendingPath>,
    seen_root: bool,
}

impl<'a> Run<'a> {
    fn new(pass: &'a OptimizePass) -> Self {
        Self {
            pass,
            writer: Writer::new(Vec::new()),
            number_re: Regex::new(r"-?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap(),
            depth: 0,
            skip_from: None,
            elided: Vec::new(),
            pending: None,
            seen_root: false,
        }
    }

    fn handle(&mut self, event: Event<'_>) -> Result<()> {
        match event {
            Event::Start(e) => self.handle_start(e),
            Event::End(e) => self.handle_end(e),
            Event::Empty(e) => self.handle_empty(e),
            Event::Text(t) => {
                if self.skip_from.is_some() {
                    return Ok(());
                }
                // Whitespace between merge candidates must not break the run.
                if self.pending.is_some() && t.as_ref().iter().all(u8::is_ascii_whitespace) {
                    return Ok(());
                }
                self.flush_pending()?;
                self.write(Event::Text(t))
            }
            Event::Comment(c) => {
                if self.skip_from.is_some() || self.pass.enables(Plugin::RemoveComments) {
                    return Ok(());
                }
                self.flush_pending()?;
                self.write(Event::Comment(c))
            }
            Event::DocType(d) => {
                if self.skip_from.is_some() || self.pass.enables(Plugin::RemoveDoctype) {
                    return Ok(());
                }
                self.flush_pending()?;
                self.write(Event::DocType(d))
            }
            other => {
                if self.skip_from.is_some() {
                    return Ok(());
                }
                self.flush_pending()?;
                self.write(other)
            }
        }
    }

    fn handle_start(&mut self, e: BytesStart<'_>) -> Result<()> {
        self.depth += 1;
        if self.skip_from.is_some() {
            return Ok(());
        }

        let name = qname_string(&e);
        if self.skips_element(&name) {
            self.skip_from = Some(self.depth);
            return Ok(());
        }

        let is_root = !self.seen_root && local_name(&name) == "svg";
        if is_root {
            self.seen_root = true;
        }
        let attrs = self.collect_attrs(&e, is_root)?;

        if self.pass.enables(Plugin::CollapseGroups)
            && local_name(&name) == "g"
            && attrs.is_empty()
        {
            self.elided.push(true);
            return Ok(());
        }
        self.elided.push(false);

        self.flush_pending()?;
        self.write(Event::Start(build_element(name, &attrs)))
    }

    fn handle_end(&mut self, e: BytesEnd<'_>) -> Result<()> {
        self.depth = self.depth.saturating_sub(1);
        if let Some(mark) = self.skip_from {
            if self.depth < mark {
                self.skip_from = None;
            }
            return Ok(());
        }

        if self.elided.pop() == Some(true) {
            return Ok(());
        }

        self.flush_pending()?;
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn handle_empty(&mut self, e: BytesStart<'_>) -> Result<()> {
        if self.skip_from.is_some() {
            return Ok(());
        }

        let name = qname_string(&e);
        if self.skips_element(&name) {
            return Ok(());
        }

        let is_root = !self.seen_root && local_name(&name) == "svg";
        if is_root {
            self.seen_root = true;
        }
        let attrs = self.collect_attrs(&e, is_root)?;

        if self.pass.enables(Plugin::CollapseGroups)
            && local_name(&name) == "g"
            && attrs.is_empty()
        {
            return Ok(());
        }

        if self.pass.enables(Plugin::MergePaths) && local_name(&name) == "path" {
            if let Some(d_index) = attrs.iter().position(|(k, _)| k == "d") {
                let mut rest = attrs;
                let d = rest.remove(d_index).1;

                if let Some(pending) = &mut self.pending {
                    if pending.attrs == rest {
                        pending.d.push(' ');
                        pending.d.push_str(&d);
                        return Ok(());
                    }
                }
                self.flush_pending()?;
                self.pending = Some(PendingPath { attrs: rest, d });
                return Ok(());
            }
        }

        self.flush_pending()?;
        self.write(Event::Empty(build_element(name, &attrs)))
    }

    /// Whether this element's whole subtree is dropped by the pass.
    fn skips_element(&self, name: &str) -> bool {
        if self.pass.enables(Plugin::RemoveMetadata) && local_name(name) == "metadata" {
            return true;
        }
        if self.pass.enables(Plugin::RemoveEditorData) {
            if let Some((prefix, _)) = name.split_once(':') {
                if prefix == "inkscape" || prefix == "sodipodi" {
                    return true;
                }
            }
        }
        false
    }

    fn collect_attrs(&self, e: &BytesStart<'_>, is_root: bool) -> Result<Vec<(String, String)>> {
        let mut attrs = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(opt_err)?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            if self.drops_attr(&key, is_root) {
                continue;
            }
            let mut value = attr.unescape_value().map_err(opt_err)?.into_owned();
            if self.pass.enables(Plugin::CleanupNumericValues) && NUMERIC_ATTRS.contains(&key.as_str())
            {
                value = round_numbers(&value, self.pass.precision, &self.number_re);
            }
            attrs.push((key, value));
        }

        if self.pass.enables(Plugin::SortAttrs) {
            attrs.sort_by(|a, b| {
                (!a.0.starts_with("xmlns"), a.0.as_str())
                    .cmp(&(!b.0.starts_with("xmlns"), b.0.as_str()))
            });
        }
        Ok(attrs)
    }

    fn drops_attr(&self, key: &str, is_root: bool) -> bool {
        if self.pass.enables(Plugin::RemoveEditorData)
            && (key.starts_with("inkscape:")
                || key.starts_with("sodipodi:")
                || key.starts_with("data-")
                || key == "xmlns:inkscape"
                || key == "xmlns:sodipodi")
        {
            return true;
        }
        if is_root {
            if self.pass.enables(Plugin::RemoveDimensions) && (key == "width" || key == "height") {
                return true;
            }
            if self.pass.enables(Plugin::RemoveViewBox) && key == "viewBox" {
                return true;
            }
        }
        false
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            let mut element = BytesStart::new("path");
            for (key, value) in &pending.attrs {
                element.push_attribute((key.as_str(), value.as_str()));
            }
            element.push_attribute(("d", pending.d.as_str()));
            self.write(Event::Empty(element))?;
        }
        Ok(())
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.writer.write_event(event).map_err(opt_err)
    }

    fn finish(mut self) -> Result<String> {
        self.flush_pending()?;
        Ok(String::from_utf8(self.writer.into_inner())?)
    }
}

fn qname_string(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn local_name(name: &str) -> &str {
    name.split(':').next_back().unwrap_or(name)
}

fn build_element(name: String, attrs: &[(String, String)]) -> BytesStart<'static> {
    let mut element = BytesStart::new(name);
    for (key, value) in attrs {
        element.push_attribute((key.as_str(), value.as_str()));
    }
    element
}

/// Round every numeric token in a value to the given precision, trimming
/// trailing zeros.
fn round_numbers(value: &str, precision: u8, re: &Regex) -> String {
    re.replace_all(value, |caps: &regex::Captures<'_>| {
        match caps[0].parse::<f64>() {
            Ok(number) => format_number(number, precision),
            Err(_) => caps[0].to_string(),
        }
    })
    .into_owned()
}

fn format_number(number: f64, precision: u8) -> String {
    let formatted = format!("{:.*}", precision as usize, number);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
