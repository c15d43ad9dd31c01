//! Namespace-aware element scanning shared by both document parsers.
//!
//! SDMX-ML v2.1 structure documents wrap their payload elements in varying
//! message envelopes, so the scanner does not assume a fixed path: it walks
//! the whole document and collects every structure-namespace element with the
//! requested local name, wherever it nests. Within a collected element, every
//! descendant `common:Name` contributes one `(xml:lang, text)` pair.

use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use sdmx_model::{LocalizedNames, UNKNOWN_LANGUAGE};

use crate::error::Result;

/// SDMX v2.1 structure namespace.
pub const STRUCTURE_NS: &str = "http://www.sdmx.org/resources/sdmxml/schemas/v2_1/structure";

/// SDMX v2.1 common namespace.
pub const COMMON_NS: &str = "http://www.sdmx.org/resources/sdmxml/schemas/v2_1/common";

/// The predefined XML namespace carrying `xml:lang`.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Raw capture of one target element: its attributes (by local name, in
/// document order) and the multilingual names found beneath it.
#[derive(Debug)]
pub(crate) struct ScannedElement {
    attributes: Vec<(String, String)>,
    pub(crate) names: LocalizedNames,
}

impl ScannedElement {
    /// Look up an attribute value by exact local-name match.
    ///
    /// First occurrence wins; namespace prefixes on attributes are ignored.
    pub(crate) fn attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == local_name)
            .map(|(_, value)| value.as_str())
    }
}

/// Collect every structure-namespace element named `target`, in document
/// order, together with its descendant common-namespace `Name`s.
pub(crate) fn scan_elements(bytes: &[u8], target: &[u8]) -> Result<Vec<ScannedElement>> {
    let mut reader = NsReader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut scanned = Vec::new();
    // Absolute element depth, plus the depths at which the currently open
    // target element and Name element started.
    let mut depth = 0usize;
    let mut target_depth: Option<usize> = None;
    let mut current: Option<ScannedElement> = None;
    let mut open_name: Option<(usize, String, String)> = None;

    loop {
        // The resolution borrows the reader, so namespace checks happen
        // before the reader is needed again for attribute resolution.
        let (resolution, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(element) => {
                let is_target = is_element(&resolution, &element, STRUCTURE_NS, target);
                let is_name = is_element(&resolution, &element, COMMON_NS, b"Name");
                depth += 1;
                if target_depth.is_none() {
                    if is_target {
                        target_depth = Some(depth);
                        current = Some(scan_attributes(&element)?);
                    }
                } else if open_name.is_none() && is_name {
                    let language = language_tag(&reader, &element)?;
                    open_name = Some((depth, language, String::new()));
                }
            }
            Event::Empty(element) => {
                let is_target = is_element(&resolution, &element, STRUCTURE_NS, target);
                let is_name = is_element(&resolution, &element, COMMON_NS, b"Name");
                if target_depth.is_none() {
                    if is_target {
                        scanned.push(scan_attributes(&element)?);
                    }
                } else if open_name.is_none() && is_name {
                    // Self-closing Name: language present, empty text.
                    if let Some(element_scan) = current.as_mut() {
                        element_scan
                            .names
                            .insert(language_tag(&reader, &element)?, String::new());
                    }
                }
            }
            Event::Text(text) => {
                if let Some((_, _, buffer)) = open_name.as_mut() {
                    buffer.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some((_, _, buffer)) = open_name.as_mut() {
                    buffer.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Event::End(_) => {
                if let Some((name_depth, _, _)) = &open_name
                    && depth == *name_depth
                {
                    let (_, language, text) = open_name.take().unwrap_or_default();
                    if let Some(element_scan) = current.as_mut() {
                        element_scan.names.insert(language, text);
                    }
                }
                if target_depth == Some(depth) {
                    target_depth = None;
                    if let Some(element_scan) = current.take() {
                        scanned.push(element_scan);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(scanned)
}

/// True when the element resolves to `namespace` and carries `local_name`.
fn is_element(
    resolution: &ResolveResult,
    element: &BytesStart,
    namespace: &str,
    local_name: &[u8],
) -> bool {
    element.local_name().as_ref() == local_name
        && matches!(resolution, ResolveResult::Bound(Namespace(bound)) if *bound == namespace.as_bytes())
}

/// Extract the `xml:lang` attribute, defaulting to `"unknown"` when absent.
fn language_tag(reader: &NsReader<&[u8]>, element: &BytesStart) -> Result<String> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        let (resolution, local_name) = reader.resolve_attribute(attribute.key);
        if local_name.as_ref() == b"lang"
            && matches!(resolution, ResolveResult::Bound(Namespace(bound)) if bound == XML_NS.as_bytes())
        {
            return Ok(attribute.unescape_value()?.into_owned());
        }
    }
    Ok(UNKNOWN_LANGUAGE.to_string())
}

/// Capture all attributes of a start tag by local name.
fn scan_attributes(element: &BytesStart) -> Result<ScannedElement> {
    let mut attributes = Vec::new();
    for attribute in element.attributes() {
        let attribute = attribute?;
        let local_name = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        attributes.push((local_name, value));
    }
    Ok(ScannedElement {
        attributes,
        names: LocalizedNames::new(),
    })
}
