use crate::error::RenderError;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Collects PDF objects in memory and writes them out in id order, followed
/// by a classic cross-reference table and trailer.
pub struct PdfWriter<W: Write + Seek> {
    writer: W,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    info: Option<Dictionary>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> PdfWriter<W> {
    pub fn new(mut writer: W, version: &str) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        Ok(Self {
            writer,
            max_id: 3,
            resources_id: (1, 0),
            pages_id: (2, 0),
            catalog_id: (3, 0),
            page_ids: Vec::new(),
            info: None,
            buffered_objects: BTreeMap::new(),
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_object_at_id(&mut self, id: ObjectId, object: Object) {
        if id.0 > self.max_id {
            self.max_id = id.0;
        }
        self.buffered_objects.insert(id, object);
    }

    /// Buffers a stream, Flate-compressing its data when `compress` is set.
    pub fn buffer_stream(
        &mut self,
        mut dict: Dictionary,
        data: Vec<u8>,
        compress: bool,
    ) -> Result<ObjectId, RenderError> {
        let data = if compress {
            dict.set("Filter", "FlateDecode");
            deflate(&data)?
        } else {
            data
        };
        Ok(self.buffer_object(Object::Stream(Stream::new(dict, data))))
    }

    pub fn buffer_content_stream(
        &mut self,
        content: Content,
        compress: bool,
    ) -> Result<ObjectId, RenderError> {
        let data = content.encode()?;
        self.buffer_stream(dictionary! {}, data, compress)
    }

    pub fn set_resources(&mut self, resources: Dictionary) {
        self.buffer_object_at_id(self.resources_id, resources.into());
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info = Some(info);
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffer_object_at_id(self.pages_id, pages_dict.into());
        self.buffer_object_at_id(
            self.catalog_id,
            dictionary! { "Type" => "Catalog", "Pages" => self.pages_id }.into(),
        );
        if !self.buffered_objects.contains_key(&self.resources_id) {
            self.buffer_object_at_id(self.resources_id, Dictionary::new().into());
        }
        let info_id = self.info.take().map(|info| self.buffer_object(info.into()));

        let mut offsets: BTreeMap<u32, u64> = BTreeMap::new();
        for (id, object) in &self.buffered_objects {
            offsets.insert(id.0, self.writer.stream_position()?);
            internal_writer::write_indirect_object(&mut self.writer, *id, object)?;
        }

        let xref_start = self.writer.stream_position()?;
        let size = self.max_id + 1;
        internal_writer::write_xref(&mut self.writer, size, &offsets)?;

        let mut trailer = dictionary! { "Size" => size as i64, "Root" => self.catalog_id };
        if let Some(info_id) = info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

mod internal_writer {
    use super::*;
    use lopdf::StringFormat;

    pub fn write_indirect_object<W: Write>(writer: &mut W, id: ObjectId, object: &Object) -> io::Result<()> {
        writeln!(writer, "{} {} obj", id.0, id.1)?;
        write_object(writer, object)?;
        writeln!(writer, "\nendobj")?;
        Ok(())
    }

    fn write_name(writer: &mut dyn Write, name: &[u8]) -> io::Result<()> {
        writer.write_all(b"/")?;
        for &byte in name {
            let delimiter = b"()<>[]{}/%#".contains(&byte);
            if delimiter || !(0x21..=0x7E).contains(&byte) {
                write!(writer, "#{:02X}", byte)?;
            } else {
                writer.write_all(&[byte])?;
            }
        }
        Ok(())
    }

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => write_name(writer, n),
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        match byte {
                            b'(' | b')' | b'\\' => writer.write_all(&[b'\\', byte])?,
                            b'\r' => writer.write_all(b"\\r")?,
                            _ => writer.write_all(&[byte])?,
                        }
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    write!(writer, "<{}>", s.iter().map(|b| format!("{:02X}", b)).collect::<String>())
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, obj)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted_keys: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted_keys {
            write_name(writer, key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// Writes one subsection covering ids `0..size`; ids without an object
    /// are listed as free.
    pub fn write_xref<W: Write>(writer: &mut W, size: u32, offsets: &BTreeMap<u32, u64>) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 {}", size)?;
        writeln!(writer, "0000000000 65535 f ")?;
        for id in 1..size {
            match offsets.get(&id) {
                Some(offset) => writeln!(writer, "{:010} 00000 n ", offset)?,
                None => writeln!(writer, "0000000000 00000 f ")?,
            }
        }
        Ok(())
    }
}
