//! Pull-style primitives shared by every decoder.
//!
//! [`XmlCursor`] sits on top of [`quick_xml::Reader`] and only ever looks at one
//! event at a time, so memory use depends on nesting depth, not on document
//! size. Decoders drive it with a `while let Some(tag) = cursor.next_child()?`
//! loop and `match` on the tag name, sending anything they don't recognise to
//! [`XmlCursor::skip`].

use std::io::{self, BufRead, Read};
use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::{DecodeError, Position};
use super::time::TimeError;

/// Counts lines and columns over the bytes the XML reader consumes.
struct Tracked<R> {
    inner: R,
    position: Position,
}

impl<R: BufRead> Read for Tracked<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let n = {
            let available = self.fill_buf()?;
            let n = available.len().min(out.len());
            out[..n].copy_from_slice(&available[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl<R: BufRead> BufRead for Tracked<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        let Position { mut line, mut column } = self.position;
        if let Ok(buffered) = self.inner.fill_buf() {
            for &byte in &buffered[..amt.min(buffered.len())] {
                if byte == b'\n' {
                    line += 1;
                    column = 1;
                } else if byte & 0xC0 != 0x80 {
                    // UTF-8 continuation bytes don't start a new column
                    column += 1;
                }
            }
        }
        self.position = Position { line, column };
        self.inner.consume(amt);
    }
}

/// A start tag the cursor is positioned on, not yet read or skipped.
#[derive(Debug)]
struct OpenTag {
    name: String,
    attributes: Vec<(String, String)>,
    empty: bool,
    position: Position,
}

/// One reader event, already detached from the read buffer.
enum Step {
    Open(OpenTag),
    Close(String),
    Text(String),
    Eof,
    Other,
}

pub struct XmlCursor<R> {
    reader: Reader<Tracked<R>>,
    buf: Vec<u8>,
    open: Option<OpenTag>,
    path: Vec<String>,
    skipped: Vec<String>,
}

impl<R: BufRead> XmlCursor<R> {
    pub fn new(source: R) -> Self {
        let tracked = Tracked {
            inner: source,
            position: Position::default(),
        };
        Self {
            reader: Reader::from_reader(tracked),
            buf: Vec::new(),
            open: None,
            path: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Current position of the underlying reader.
    pub fn position(&self) -> Position {
        self.reader.get_ref().position
    }

    /// Slash-separated paths of every element passed to [`skip`](Self::skip).
    pub fn into_skipped(self) -> Vec<String> {
        self.skipped
    }

    /// Advance past the prolog to the document element and return its name.
    pub fn root(&mut self) -> Result<String, DecodeError> {
        loop {
            match self.step()? {
                Step::Open(tag) => {
                    let name = tag.name.clone();
                    self.open = Some(tag);
                    return Ok(name);
                }
                Step::Close(name) => {
                    return Err(self.mismatch("document element", format!("</{name}>")));
                }
                Step::Eof => return Err(self.mismatch("document element", "end of document")),
                Step::Text(_) | Step::Other => {}
            }
        }
    }

    /// Move to the next child of the element being decoded.
    ///
    /// The first call after a start tag descends into that element. Returns
    /// `None` once the element's end tag has been consumed.
    pub fn next_child(&mut self) -> Result<Option<String>, DecodeError> {
        if let Some(parent) = self.open.take() {
            if parent.empty {
                return Ok(None);
            }
            self.path.push(parent.name);
        }

        loop {
            match self.step()? {
                Step::Open(tag) => {
                    let name = tag.name.clone();
                    self.open = Some(tag);
                    return Ok(Some(name));
                }
                Step::Close(_) => {
                    self.path.pop();
                    return Ok(None);
                }
                Step::Eof => {
                    let expected = match self.path.last() {
                        Some(parent) => format!("</{parent}>"),
                        None => "a start tag".to_string(),
                    };
                    return Err(self.mismatch(expected, "end of document"));
                }
                Step::Text(_) | Step::Other => {}
            }
        }
    }

    /// Value of an attribute on the current start tag.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.open.as_ref().and_then(|tag| {
            tag.attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        })
    }

    pub fn required_attribute(&self, name: &str) -> Result<String, DecodeError> {
        let tag = self
            .open
            .as_ref()
            .ok_or_else(|| self.mismatch("a start tag", "no open element"))?;

        self.attribute(name)
            .map(str::to_owned)
            .ok_or_else(|| DecodeError::MissingAttribute {
                element: tag.name.clone(),
                name: name.to_string(),
                position: tag.position,
            })
    }

    pub fn int_attribute(&self, name: &str) -> Result<i32, DecodeError> {
        self.number_attribute(name, "integer")
    }

    pub fn long_attribute(&self, name: &str) -> Result<i64, DecodeError> {
        self.number_attribute(name, "long")
    }

    pub fn double_attribute(&self, name: &str) -> Result<f64, DecodeError> {
        self.number_attribute(name, "double")
    }

    fn number_attribute<T: FromStr>(
        &self,
        name: &str,
        expected: &'static str,
    ) -> Result<T, DecodeError> {
        let raw = self.required_attribute(name)?;
        parse_number(&raw, format!("{name} attribute"), expected, self.open_position())
    }

    /// Read the text content of `tag`, which must be the current start tag.
    ///
    /// Text and CDATA runs are concatenated as-is; nothing is trimmed.
    pub fn read_text(&mut self, tag: &str) -> Result<String, DecodeError> {
        let open = self.expect_open(tag)?;
        if open.empty {
            return Ok(String::new());
        }

        let mut text = String::new();
        loop {
            match self.step()? {
                Step::Text(run) => text.push_str(&run),
                Step::Close(name) if name == tag => return Ok(text),
                Step::Close(name) => {
                    return Err(self.mismatch(format!("</{tag}>"), format!("</{name}>")));
                }
                Step::Open(nested) => {
                    return Err(DecodeError::StructuralMismatch {
                        expected: format!("text inside <{tag}>"),
                        found: format!("<{}>", nested.name),
                        position: nested.position,
                    });
                }
                Step::Eof => return Err(self.mismatch(format!("</{tag}>"), "end of document")),
                Step::Other => {}
            }
        }
    }

    pub fn read_int(&mut self, tag: &str) -> Result<i32, DecodeError> {
        self.read_number(tag, "integer")
    }

    pub fn read_long(&mut self, tag: &str) -> Result<i64, DecodeError> {
        self.read_number(tag, "long")
    }

    pub fn read_float(&mut self, tag: &str) -> Result<f32, DecodeError> {
        self.read_number(tag, "float")
    }

    /// Read the text of `tag` and parse it as a base-10 number.
    pub fn read_number<T: FromStr>(
        &mut self,
        tag: &str,
        expected: &'static str,
    ) -> Result<T, DecodeError> {
        let position = self.open_position();
        let raw = self.read_text(tag)?;
        parse_number(&raw, format!("<{tag}>"), expected, position)
    }

    /// Read the text of `tag` and hand it to one of the [`time`](super::time) parsers.
    pub fn read_time<T>(
        &mut self,
        tag: &str,
        parse: impl FnOnce(&str) -> Result<T, TimeError>,
    ) -> Result<T, DecodeError> {
        let position = self.open_position();
        let raw = self.read_text(tag)?;
        parse(&raw).map_err(|err| DecodeError::malformed_time(tag, &raw, err, position))
    }

    /// Position of the current start tag, or of the reader if there is none.
    pub fn open_position(&self) -> Position {
        self.open.as_ref().map_or_else(|| self.position(), |tag| tag.position)
    }

    /// Discard the current element and everything inside it.
    pub fn skip(&mut self) -> Result<(), DecodeError> {
        let open = self
            .open
            .take()
            .ok_or_else(|| self.mismatch("the start of an element to skip", "no open element"))?;

        let path = self.path_to(&open.name);
        tracing::debug!(element = %path, "skipping unexpected element");
        self.skipped.push(path);

        if open.empty {
            return Ok(());
        }

        let mut depth = 1usize;
        while depth > 0 {
            match self.step()? {
                Step::Open(tag) if !tag.empty => depth += 1,
                Step::Close(_) => depth -= 1,
                Step::Eof => {
                    return Err(self.mismatch(format!("</{}>", open.name), "end of document"));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn expect_open(&mut self, tag: &str) -> Result<OpenTag, DecodeError> {
        match self.open.take() {
            Some(open) if open.name == tag => Ok(open),
            Some(open) => Err(DecodeError::StructuralMismatch {
                expected: format!("<{tag}>"),
                found: format!("<{}>", open.name),
                position: open.position,
            }),
            None => Err(self.mismatch(format!("<{tag}>"), "no open element")),
        }
    }

    fn path_to(&self, name: &str) -> String {
        let mut path = self.path.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(name);
        path
    }

    fn mismatch(&self, expected: impl Into<String>, found: impl Into<String>) -> DecodeError {
        DecodeError::StructuralMismatch {
            expected: expected.into(),
            found: found.into(),
            position: self.position(),
        }
    }

    fn step(&mut self) -> Result<Step, DecodeError> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf);
        let position = self.reader.get_ref().position;

        match event {
            Ok(Event::Start(start)) => Ok(Step::Open(open_tag(&start, false, position)?)),
            Ok(Event::Empty(start)) => Ok(Step::Open(open_tag(&start, true, position)?)),
            Ok(Event::End(end)) => Ok(Step::Close(local_name(end.local_name().as_ref()))),
            Ok(Event::Text(text)) => {
                let text = text
                    .unescape()
                    .map_err(|source| DecodeError::Xml { position, source })?;
                Ok(Step::Text(text.into_owned()))
            }
            Ok(Event::CData(data)) => {
                let text = std::str::from_utf8(&data).map_err(|source| DecodeError::Utf8 {
                    tag: self.path.last().cloned().unwrap_or_default(),
                    position,
                    source,
                })?;
                Ok(Step::Text(text.to_owned()))
            }
            Ok(Event::Eof) => Ok(Step::Eof),
            Ok(_) => Ok(Step::Other),
            Err(source) => Err(DecodeError::Xml { position, source }),
        }
    }
}

fn open_tag(
    start: &BytesStart<'_>,
    empty: bool,
    position: Position,
) -> Result<OpenTag, DecodeError> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|source| DecodeError::Attribute { position, source })?;
        let value = attr
            .unescape_value()
            .map_err(|source| DecodeError::Xml { position, source })?;
        attributes.push((local_name(attr.key.local_name().as_ref()), value.into_owned()));
    }

    Ok(OpenTag {
        name: local_name(start.local_name().as_ref()),
        attributes,
        empty,
        position,
    })
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn parse_number<T: FromStr>(
    raw: &str,
    field: String,
    expected: &'static str,
    position: Position,
) -> Result<T, DecodeError> {
    raw.trim()
        .parse()
        .map_err(|_| DecodeError::MalformedNumber {
            field,
            value: raw.to_string(),
            expected,
            position,
        })
}
