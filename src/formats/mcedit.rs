//! Reader for the legacy gzip-compressed MCEdit `.schematic` format: one
//! named compound tag `Schematic` holding the region extents, the packed
//! block id and data arrays, and the tile-entity list. The format is read
//! only; the writer was retired together with the legacy id scheme.

use byteorder::{BigEndian, ReadBytesExt};
use flate2::read::GzDecoder;
use log::{debug, trace};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::block_position::BlockPosition;
use crate::clipboard::Clipboard;
use crate::error::SchematicError;
use crate::legacy::LegacyIdResolver;
use crate::nbt::{NamedTag, Tag, TAG_COMPOUND_ID};

pub const FORMAT_NAME: &str = "MCEdit";
pub const FORMAT_ALIASES: [&str; 2] = ["mcedit", "mce"];

const ROOT_TAG_NAME: &str = "Schematic";
const SUPPORTED_MATERIALS: &str = "Alpha";

/// Decodes one schematic from a gzip-compressed stream. The whole tag tree
/// is read up front, so the stream is fully consumed even when validation
/// fails afterwards.
pub fn load<R: Read>(stream: R, resolver: &dyn LegacyIdResolver) -> Result<Clipboard, SchematicError> {
    let root = NamedTag::read_gzip(stream)?;
    decode(root, resolver)
}

pub fn load_file<P: AsRef<Path>>(
    path: P,
    resolver: &dyn LegacyIdResolver,
) -> Result<Clipboard, SchematicError> {
    load(File::open(path)?, resolver)
}

/// Saving was retired together with the legacy id scheme; the call always
/// fails and produces no output.
pub fn save(_clipboard: &Clipboard) -> Result<Vec<u8>, SchematicError> {
    Err(SchematicError::UnsupportedOperation(
        "this clipboard format no longer supports saving",
    ))
}

/// Cheap format probe: decompresses just far enough to read the first tag
/// type and name. Any failure along the way means "not this format".
pub fn is_format<R: Read>(stream: R) -> bool {
    fn probe<R: Read>(decoder: &mut GzDecoder<R>) -> std::io::Result<bool> {
        if decoder.read_u8()? != TAG_COMPOUND_ID {
            return Ok(false);
        }
        let name_length = decoder.read_u16::<BigEndian>()?;
        let mut name = vec![0u8; name_length as usize];
        decoder.read_exact(&mut name)?;
        Ok(name == ROOT_TAG_NAME.as_bytes())
    }

    let mut decoder = GzDecoder::new(stream);
    probe(&mut decoder).unwrap_or(false)
}

pub fn is_format_file<P: AsRef<Path>>(path: P) -> bool {
    File::open(path).map(is_format).unwrap_or(false)
}

fn decode(root: NamedTag, resolver: &dyn LegacyIdResolver) -> Result<Clipboard, SchematicError> {
    if root.name != ROOT_TAG_NAME {
        return Err(SchematicError::WrongRootTag(root.name));
    }
    let schematic = root.tag.as_compound().ok_or(SchematicError::WrongTagType {
        key: "Schematic",
        expected: "Compound",
    })?;

    if !schematic.contains_key("Blocks") {
        return Err(SchematicError::MissingTag("Blocks"));
    }

    let width = short_tag(schematic, "Width")?;
    let length = short_tag(schematic, "Length")?;
    let height = short_tag(schematic, "Height")?;
    if width < 0 || length < 0 || height < 0 {
        return Err(SchematicError::InvalidDimensions {
            width,
            height,
            length,
        });
    }

    // Origin and offset are optional as whole vectors; a missing or
    // mistyped component discards the group.
    let origin = vector_or_zero(schematic, "WEOriginX", "WEOriginY", "WEOriginZ");
    let offset = vector_or_zero(schematic, "WEOffsetX", "WEOffsetY", "WEOffsetZ");

    let materials = string_tag(schematic, "Materials")?;
    if materials != SUPPORTED_MATERIALS {
        return Err(SchematicError::UnsupportedMaterials(materials.to_string()));
    }

    let block_id = byte_array_tag(schematic, "Blocks")?;
    let block_data = byte_array_tag(schematic, "Data")?;

    let volume = width as usize * height as usize * length as usize;
    if block_id.len() != volume {
        return Err(SchematicError::LengthMismatch {
            key: "Blocks",
            expected: volume,
            actual: block_id.len(),
        });
    }
    if block_data.len() != block_id.len() {
        return Err(SchematicError::LengthMismatch {
            key: "Data",
            expected: block_id.len(),
            actual: block_data.len(),
        });
    }

    // Up to 4096 ids are supported the same way vanilla chunks do it: the
    // highest 4 bits live in a separate nibble-packed array.
    let add_id: &[i8] = match schematic.get("AddBlocks") {
        Some(tag) => tag.as_byte_array().ok_or(SchematicError::WrongTagType {
            key: "AddBlocks",
            expected: "ByteArray",
        })?,
        None => &[],
    };
    trace!("AddBlocks present: {}", !add_id.is_empty());

    let mut blocks = vec![0u16; block_id.len()];
    for index in 0..block_id.len() {
        let base = block_id[index] as u8 as u16;
        blocks[index] = if index >> 1 >= add_id.len() {
            // No corresponding AddBlocks nibble.
            base
        } else if index & 1 == 0 {
            (((add_id[index >> 1] as u8 & 0x0F) as u16) << 8) | base
        } else {
            (((add_id[index >> 1] as u8 & 0xF0) as u16) << 4) | base
        };
    }

    let tile_entities = collect_tile_entities(schematic, width, height, length)?;

    debug!(
        "decoding {}x{}x{} schematic, {} tile entities",
        width,
        height,
        length,
        tile_entities.len()
    );

    let mut states = Vec::with_capacity(volume);
    for index in 0..volume {
        states.push(resolver.resolve(blocks[index], block_data[index] as u8));
    }

    Ok(Clipboard::new(
        width as u16,
        height as u16,
        length as u16,
        origin,
        offset,
        states,
        tile_entities,
    ))
}

fn collect_tile_entities(
    schematic: &HashMap<String, Tag>,
    width: i16,
    height: i16,
    length: i16,
) -> Result<HashMap<(i32, i32, i32), HashMap<String, Tag>>, SchematicError> {
    let list = match schematic.get("TileEntities") {
        None => return Ok(HashMap::new()),
        Some(tag) => tag.as_list().ok_or(SchematicError::WrongTagType {
            key: "TileEntities",
            expected: "List",
        })?,
    };

    let mut tile_entities = HashMap::new();
    for entry in list {
        let values = match entry.as_compound() {
            Some(values) => values,
            None => continue,
        };

        // Missing or mistyped coordinates historically default to zero
        // rather than rejecting the entry.
        let x = values.get("x").and_then(Tag::as_i32).unwrap_or(0);
        let y = values.get("y").and_then(Tag::as_i32).unwrap_or(0);
        let z = values.get("z").and_then(Tag::as_i32).unwrap_or(0);

        if x < 0 || y < 0 || z < 0 || x >= width as i32 || y >= height as i32 || z >= length as i32 {
            return Err(SchematicError::TileEntityOutOfBounds { x, y, z });
        }

        // The full payload is retained, coordinate tags included.
        tile_entities.insert((x, y, z), values.clone());
    }
    Ok(tile_entities)
}

fn vector_or_zero(
    items: &HashMap<String, Tag>,
    x_key: &str,
    y_key: &str,
    z_key: &str,
) -> BlockPosition {
    match (
        items.get(x_key).and_then(Tag::as_i32),
        items.get(y_key).and_then(Tag::as_i32),
        items.get(z_key).and_then(Tag::as_i32),
    ) {
        (Some(x), Some(y), Some(z)) => BlockPosition::new(x, y, z),
        _ => BlockPosition::ZERO,
    }
}

fn short_tag(items: &HashMap<String, Tag>, key: &'static str) -> Result<i16, SchematicError> {
    match items.get(key) {
        None => Err(SchematicError::MissingTag(key)),
        Some(Tag::Short(value)) => Ok(*value),
        Some(_) => Err(SchematicError::WrongTagType {
            key,
            expected: "Short",
        }),
    }
}

fn string_tag<'a>(
    items: &'a HashMap<String, Tag>,
    key: &'static str,
) -> Result<&'a str, SchematicError> {
    match items.get(key) {
        None => Err(SchematicError::MissingTag(key)),
        Some(Tag::String(value)) => Ok(value),
        Some(_) => Err(SchematicError::WrongTagType {
            key,
            expected: "String",
        }),
    }
}

fn byte_array_tag<'a>(
    items: &'a HashMap<String, Tag>,
    key: &'static str,
) -> Result<&'a [i8], SchematicError> {
    match items.get(key) {
        None => Err(SchematicError::MissingTag(key)),
        Some(Tag::ByteArray(value)) => Ok(value),
        Some(_) => Err(SchematicError::WrongTagType {
            key,
            expected: "ByteArray",
        }),
    }
}
