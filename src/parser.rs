//! Gmail Atom feed parsing
//!
//! The feed is a flat, fixed-schema Atom document in the (pre-RFC
//! 4287) `http://purl.org/atom/ns#` namespace: a handful of scalar
//! elements at the root plus zero or more top-level `entry` elements.
//! Parsing is a single streaming pass with [`quick_xml::NsReader`];
//! entry nodes are consumed lazily in document order.
//!
//! Policy for missing required elements: the whole parse fails with
//! [`Error::MalformedFeed`]. Nothing is substituted or skipped.

use crate::error::{Error, Result};
use crate::mailbox::{EntryRecord, MailboxSummary};
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use tracing::debug;

/// Namespace URI of every element in the feed.
pub const ATOM_NS: &[u8] = b"http://purl.org/atom/ns#";

fn in_atom_ns(resolved: &ResolveResult<'_>) -> bool {
    match resolved {
        ResolveResult::Bound(ns) => ns.into_inner() == ATOM_NS,
        _ => false,
    }
}

fn missing(what: &str) -> Error {
    Error::MalformedFeed(format!("missing required element: {what}"))
}

fn parse_fullcount(text: &str) -> Result<u32> {
    text.trim()
        .parse()
        .map_err(|_| Error::MalformedFeed(format!("fullcount is not an integer: {text:?}")))
}

/// Read an element's text content with character entities resolved.
fn read_scalar(reader: &mut NsReader<&[u8]>, element: &BytesStart<'_>) -> Result<String> {
    let raw = reader.read_text(element.name())?;
    let text = unescape(&raw).map_err(|e| Error::MalformedFeed(e.to_string()))?;
    Ok(text.into_owned())
}

/// Collect an element's attributes as key/value pairs in document
/// order.
fn attribute_pairs(element: &BytesStart<'_>) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| Error::MalformedFeed(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        pairs.push((key, value));
    }
    Ok(pairs)
}

/// Parse the raw feed body into a [`MailboxSummary`].
///
/// All element lookups are qualified against [`ATOM_NS`]; elements in
/// other namespaces are skipped. Entries are scanned only among the
/// document root's direct children (the feed is flat).
///
/// # Errors
///
/// Returns [`Error::MalformedFeed`] if the document is not well-formed
/// XML, a required element is absent, or `fullcount` is not a
/// non-negative integer.
pub fn parse_feed(bytes: &[u8]) -> Result<MailboxSummary> {
    let mut reader = NsReader::from_reader(bytes);

    // Skip the prolog and position on the document root.
    loop {
        match reader.read_event()? {
            Event::Start(_) => break,
            Event::Eof => return Err(missing("feed root")),
            _ => {}
        }
    }

    let mut title = None;
    let mut tagline = None;
    let mut full_count = None;
    let mut link = None;
    let mut modified = None;
    let mut entries = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let (resolved, local) = reader.resolve_element(e.name());
                if !in_atom_ns(&resolved) {
                    reader.read_to_end(e.name())?;
                    continue;
                }
                match local.as_ref() {
                    b"title" => title = Some(read_scalar(&mut reader, &e)?),
                    b"tagline" => tagline = Some(read_scalar(&mut reader, &e)?),
                    b"fullcount" => {
                        let text = read_scalar(&mut reader, &e)?;
                        full_count = Some(parse_fullcount(&text)?);
                    }
                    b"modified" => modified = Some(read_scalar(&mut reader, &e)?),
                    b"link" => {
                        link = Some(attribute_pairs(&e)?);
                        reader.read_to_end(e.name())?;
                    }
                    b"entry" => entries.push(parse_entry(&mut reader)?),
                    _ => {
                        reader.read_to_end(e.name())?;
                    }
                }
            }
            // Self-closing scalars are equivalent to empty paired tags.
            Event::Empty(e) => {
                let (resolved, local) = reader.resolve_element(e.name());
                if !in_atom_ns(&resolved) {
                    continue;
                }
                match local.as_ref() {
                    b"title" => title = Some(String::new()),
                    b"tagline" => tagline = Some(String::new()),
                    b"fullcount" => full_count = Some(parse_fullcount("")?),
                    b"modified" => modified = Some(String::new()),
                    b"link" => link = Some(attribute_pairs(&e)?),
                    _ => {}
                }
            }
            Event::End(_) | Event::Eof => break,
            _ => {}
        }
    }

    let summary = MailboxSummary {
        title: title.ok_or_else(|| missing("title"))?,
        tagline: tagline.ok_or_else(|| missing("tagline"))?,
        full_count: full_count.ok_or_else(|| missing("fullcount"))?,
        link: link.ok_or_else(|| missing("link"))?,
        modified: modified.ok_or_else(|| missing("modified"))?,
        entries,
    };

    debug!(
        "Parsed feed: {} unread, {} entries listed",
        summary.full_count,
        summary.entries.len()
    );
    Ok(summary)
}

/// Parse one `entry` element. The reader is positioned just past the
/// entry's start tag and is left just past its end tag.
fn parse_entry(reader: &mut NsReader<&[u8]>) -> Result<EntryRecord> {
    let mut title = None;
    let mut summary = None;
    let mut issued = None;
    let mut id = None;
    let mut author = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let (resolved, local) = reader.resolve_element(e.name());
                if !in_atom_ns(&resolved) {
                    reader.read_to_end(e.name())?;
                    continue;
                }
                match local.as_ref() {
                    b"title" => title = Some(read_scalar(reader, &e)?),
                    b"summary" => summary = Some(read_scalar(reader, &e)?),
                    b"issued" => issued = Some(read_scalar(reader, &e)?),
                    b"id" => id = Some(read_scalar(reader, &e)?),
                    b"author" => author = Some(parse_author(reader)?),
                    _ => {
                        reader.read_to_end(e.name())?;
                    }
                }
            }
            // Self-closing scalars are equivalent to empty paired tags;
            // an empty author still lacks its name and email.
            Event::Empty(e) => {
                let (resolved, local) = reader.resolve_element(e.name());
                if !in_atom_ns(&resolved) {
                    continue;
                }
                match local.as_ref() {
                    b"title" => title = Some(String::new()),
                    b"summary" => summary = Some(String::new()),
                    b"issued" => issued = Some(String::new()),
                    b"id" => id = Some(String::new()),
                    b"author" => return Err(missing("author name")),
                    _ => {}
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(missing("entry end tag")),
            _ => {}
        }
    }

    let (author_name, author_email) = author.ok_or_else(|| missing("entry author"))?;
    Ok(EntryRecord {
        title: title.ok_or_else(|| missing("entry title"))?,
        summary: summary.ok_or_else(|| missing("entry summary"))?,
        issued: issued.ok_or_else(|| missing("entry issued"))?,
        id: id.ok_or_else(|| missing("entry id"))?,
        author_name,
        author_email,
    })
}

/// Parse the single `author` child of an entry into `(name, email)`.
fn parse_author(reader: &mut NsReader<&[u8]>) -> Result<(String, String)> {
    let mut name = None;
    let mut email = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let (resolved, local) = reader.resolve_element(e.name());
                if !in_atom_ns(&resolved) {
                    reader.read_to_end(e.name())?;
                    continue;
                }
                match local.as_ref() {
                    b"name" => name = Some(read_scalar(reader, &e)?),
                    b"email" => email = Some(read_scalar(reader, &e)?),
                    _ => {
                        reader.read_to_end(e.name())?;
                    }
                }
            }
            Event::Empty(e) => {
                let (resolved, local) = reader.resolve_element(e.name());
                if !in_atom_ns(&resolved) {
                    continue;
                }
                match local.as_ref() {
                    b"name" => name = Some(String::new()),
                    b"email" => email = Some(String::new()),
                    _ => {}
                }
            }
            Event::End(_) => break,
            Event::Eof => return Err(missing("author end tag")),
            _ => {}
        }
    }

    Ok((
        name.ok_or_else(|| missing("author name"))?,
        email.ok_or_else(|| missing("author email"))?,
    ))
}
