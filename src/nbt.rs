//! Tag model and reader for the NBT binary encoding: a one-byte type
//! marker, a length-prefixed UTF-8 name in named contexts, then the
//! type-specific payload, all big-endian. Streams are gzip-framed at the
//! file level.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashMap;
use std::io::{self, Read, Write};
use thiserror::Error;

pub(crate) const TAG_COMPOUND_ID: u8 = 10;

#[derive(Debug, Error)]
pub enum NbtError {
    #[error("unexpected end of stream: {0}")]
    Io(#[from] io::Error),

    #[error("unknown tag type {0}")]
    UnknownTagType(u8),

    #[error("negative length {length} in {tag} tag")]
    NegativeLength { tag: &'static str, length: i32 },

    #[error("string payload is not valid UTF-8")]
    InvalidString(#[from] std::string::FromUtf8Error),

    #[error("non-empty list declared with element type End")]
    ListOfEnd,

    #[error("list elements are not all of the declared element type")]
    HeterogeneousList,
}

/// A single NBT value. `End` only occurs as the compound terminator and as
/// the element type of empty lists; it never carries a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(Vec<Tag>),
    Compound(HashMap<String, Tag>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// A top-level tag paired with its name.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTag {
    pub name: String,
    pub tag: Tag,
}

impl NamedTag {
    pub fn new(name: impl Into<String>, tag: Tag) -> Self {
        NamedTag {
            name: name.into(),
            tag,
        }
    }

    pub fn read<R: Read>(reader: &mut R) -> Result<Self, NbtError> {
        let (name, tag) = Tag::read(reader)?;
        Ok(NamedTag { name, tag })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), NbtError> {
        self.tag.write(writer, &self.name)
    }

    /// Reads one named tag from a gzip-compressed stream.
    pub fn read_gzip<R: Read>(reader: R) -> Result<Self, NbtError> {
        let mut decoder = GzDecoder::new(reader);
        Self::read(&mut decoder)
    }

    /// Writes this tag to a gzip-compressed stream.
    pub fn write_gzip<W: Write>(&self, writer: W) -> Result<(), NbtError> {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        self.write(&mut encoder)?;
        encoder.finish()?;
        Ok(())
    }
}

impl Tag {
    pub fn type_id(&self) -> u8 {
        match self {
            Tag::End => 0,
            Tag::Byte(_) => 1,
            Tag::Short(_) => 2,
            Tag::Int(_) => 3,
            Tag::Long(_) => 4,
            Tag::Float(_) => 5,
            Tag::Double(_) => 6,
            Tag::ByteArray(_) => 7,
            Tag::String(_) => 8,
            Tag::List(_) => 9,
            Tag::Compound(_) => 10,
            Tag::IntArray(_) => 11,
            Tag::LongArray(_) => 12,
        }
    }

    pub fn read<R: Read>(reader: &mut R) -> Result<(String, Tag), NbtError> {
        let type_id = reader.read_u8()?;
        if type_id == 0 {
            return Ok((String::new(), Tag::End));
        }

        let name = read_string(reader)?;
        let tag = Tag::read_payload(reader, type_id)?;
        Ok((name, tag))
    }

    fn read_payload<R: Read>(reader: &mut R, type_id: u8) -> Result<Tag, NbtError> {
        match type_id {
            0 => Ok(Tag::End),
            1 => Ok(Tag::Byte(reader.read_i8()?)),
            2 => Ok(Tag::Short(reader.read_i16::<BigEndian>()?)),
            3 => Ok(Tag::Int(reader.read_i32::<BigEndian>()?)),
            4 => Ok(Tag::Long(reader.read_i64::<BigEndian>()?)),
            5 => Ok(Tag::Float(reader.read_f32::<BigEndian>()?)),
            6 => Ok(Tag::Double(reader.read_f64::<BigEndian>()?)),
            7 => {
                let length = checked_length(reader, "ByteArray")?;
                let mut bytes = vec![0u8; length];
                reader.read_exact(&mut bytes)?;
                Ok(Tag::ByteArray(bytes.into_iter().map(|b| b as i8).collect()))
            }
            8 => {
                let string = read_string(reader)?;
                Ok(Tag::String(string))
            }
            9 => {
                let element_type = reader.read_u8()?;
                let length = checked_length(reader, "List")?;
                if element_type == 0 && length > 0 {
                    return Err(NbtError::ListOfEnd);
                }
                let mut list = Vec::with_capacity(length.min(1 << 16));
                for _ in 0..length {
                    list.push(Tag::read_payload(reader, element_type)?);
                }
                Ok(Tag::List(list))
            }
            10 => {
                let mut compound = HashMap::new();
                loop {
                    let (name, tag) = Tag::read(reader)?;
                    if let Tag::End = tag {
                        break;
                    }
                    compound.insert(name, tag);
                }
                Ok(Tag::Compound(compound))
            }
            11 => {
                let length = checked_length(reader, "IntArray")?;
                let mut ints = Vec::with_capacity(length.min(1 << 16));
                for _ in 0..length {
                    ints.push(reader.read_i32::<BigEndian>()?);
                }
                Ok(Tag::IntArray(ints))
            }
            12 => {
                let length = checked_length(reader, "LongArray")?;
                let mut longs = Vec::with_capacity(length.min(1 << 16));
                for _ in 0..length {
                    longs.push(reader.read_i64::<BigEndian>()?);
                }
                Ok(Tag::LongArray(longs))
            }
            other => Err(NbtError::UnknownTagType(other)),
        }
    }

    pub fn write<W: Write>(&self, writer: &mut W, name: &str) -> Result<(), NbtError> {
        writer.write_u8(self.type_id())?;

        if !matches!(self, Tag::End) {
            writer.write_u16::<BigEndian>(name.len() as u16)?;
            writer.write_all(name.as_bytes())?;
        }

        self.write_payload(writer)
    }

    fn write_payload<W: Write>(&self, writer: &mut W) -> Result<(), NbtError> {
        match self {
            Tag::End => Ok(()),
            Tag::Byte(v) => Ok(writer.write_i8(*v)?),
            Tag::Short(v) => Ok(writer.write_i16::<BigEndian>(*v)?),
            Tag::Int(v) => Ok(writer.write_i32::<BigEndian>(*v)?),
            Tag::Long(v) => Ok(writer.write_i64::<BigEndian>(*v)?),
            Tag::Float(v) => Ok(writer.write_f32::<BigEndian>(*v)?),
            Tag::Double(v) => Ok(writer.write_f64::<BigEndian>(*v)?),
            Tag::ByteArray(v) => {
                writer.write_i32::<BigEndian>(v.len() as i32)?;
                let bytes: Vec<u8> = v.iter().map(|&b| b as u8).collect();
                writer.write_all(&bytes)?;
                Ok(())
            }
            Tag::String(v) => {
                writer.write_u16::<BigEndian>(v.len() as u16)?;
                writer.write_all(v.as_bytes())?;
                Ok(())
            }
            Tag::List(v) => {
                // Empty lists carry element type End on the wire.
                let element_type = v.first().map_or(0, Tag::type_id);
                if v.iter().any(|tag| tag.type_id() != element_type) {
                    return Err(NbtError::HeterogeneousList);
                }
                writer.write_u8(element_type)?;
                writer.write_i32::<BigEndian>(v.len() as i32)?;
                for tag in v {
                    tag.write_payload(writer)?;
                }
                Ok(())
            }
            Tag::Compound(v) => {
                for (name, tag) in v {
                    tag.write(writer, name)?;
                }
                Tag::End.write(writer, "")?;
                Ok(())
            }
            Tag::IntArray(v) => {
                writer.write_i32::<BigEndian>(v.len() as i32)?;
                for &i in v {
                    writer.write_i32::<BigEndian>(i)?;
                }
                Ok(())
            }
            Tag::LongArray(v) => {
                writer.write_i32::<BigEndian>(v.len() as i32)?;
                for &l in v {
                    writer.write_i64::<BigEndian>(l)?;
                }
                Ok(())
            }
        }
    }

    pub fn as_compound(&self) -> Option<&HashMap<String, Tag>> {
        match self {
            Tag::Compound(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Tag]> {
        match self {
            Tag::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Tag::ByteArray(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Tag::IntArray(ints) => Some(ints),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Tag::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Tag::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match self {
            Tag::Short(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<i8> {
        match self {
            Tag::Byte(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Tag::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Tag::Float(n) => Some(*n),
            _ => None,
        }
    }
}

fn read_string<R: Read>(reader: &mut R) -> Result<String, NbtError> {
    let length = reader.read_u16::<BigEndian>()?;
    let mut bytes = vec![0u8; length as usize];
    reader.read_exact(&mut bytes)?;
    Ok(String::from_utf8(bytes)?)
}

fn checked_length<R: Read>(reader: &mut R, tag: &'static str) -> Result<usize, NbtError> {
    let length = reader.read_i32::<BigEndian>()?;
    if length < 0 {
        return Err(NbtError::NegativeLength { tag, length });
    }
    Ok(length as usize)
}
