//! XML and JSON export and import of resource trees.
//!
//! Export writes every stored field, including reserved byte ranges as hex,
//! so importing an exported tree and saving it gives the same bytes as saving
//! the tree directly. Size, count, and magic fields are left out because save
//! recomputes them.

#[cfg(feature = "xml-export")]
use quick_xml::se::Serializer;
use resmod_wiienv::{Bfog, Blight, Blmap, Format, Resource};
#[cfg(feature = "xml-export")]
use serde::Serialize;
use tracing::debug;

use crate::Result;

/// Name of the document root element for a format.
pub fn root_element(format: Format) -> &'static str {
    match format {
        Format::Fog => "Bfog",
        Format::Light => "Blight",
        Format::LightMap => "Blmap",
    }
}

/// Export a resource as an indented XML document.
#[cfg(feature = "xml-export")]
pub fn to_xml(resource: &Resource) -> Result<String> {
    let root = root_element(resource.format());
    let mut output = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    match resource {
        Resource::Fog(r) => write_xml(&mut output, root, r)?,
        Resource::Light(r) => write_xml(&mut output, root, r)?,
        Resource::LightMap(r) => write_xml(&mut output, root, r)?,
    }
    output.push('\n');
    debug!(root, bytes = output.len(), "exported XML");
    Ok(output)
}

#[cfg(feature = "xml-export")]
fn write_xml<T: Serialize>(output: &mut String, root: &str, value: &T) -> Result<()> {
    let mut serializer = Serializer::with_root(output, Some(root))?;
    serializer.indent(' ', 2);
    value.serialize(serializer)?;
    Ok(())
}

/// Rebuild a resource of the given format from an XML document.
///
/// The root element name is not checked; the caller decides the format.
#[cfg(feature = "xml-export")]
pub fn from_xml(format: Format, xml: &str) -> Result<Resource> {
    debug!(format = %format, bytes = xml.len(), "importing XML");
    Ok(match format {
        Format::Fog => Resource::Fog(quick_xml::de::from_str::<Bfog>(xml)?),
        Format::Light => Resource::Light(quick_xml::de::from_str::<Blight>(xml)?),
        Format::LightMap => Resource::LightMap(quick_xml::de::from_str::<Blmap>(xml)?),
    })
}

/// Export a resource as pretty-printed JSON.
#[cfg(feature = "json-export")]
pub fn to_json(resource: &Resource) -> Result<String> {
    let json = match resource {
        Resource::Fog(r) => serde_json::to_string_pretty(r)?,
        Resource::Light(r) => serde_json::to_string_pretty(r)?,
        Resource::LightMap(r) => serde_json::to_string_pretty(r)?,
    };
    Ok(json)
}

/// Rebuild a resource of the given format from a JSON document.
#[cfg(feature = "json-export")]
pub fn from_json(format: Format, json: &str) -> Result<Resource> {
    Ok(match format {
        Format::Fog => Resource::Fog(serde_json::from_str::<Bfog>(json)?),
        Format::Light => Resource::Light(serde_json::from_str::<Blight>(json)?),
        Format::LightMap => Resource::LightMap(serde_json::from_str::<Blmap>(json)?),
    })
}
