//! ZIP container access for `.docx` packages.

use crate::error::{Error, Result};
use crate::model::Metadata;
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

/// ZIP container over a Word document package.
///
/// The whole package is read into memory; parts are decompressed on demand.
pub struct DocxContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl DocxContainer {
    /// Open a `.docx` package from a file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read an XML part from the package as a string.
    ///
    /// Parts are usually UTF-8, but non-standard writers produce UTF-16;
    /// both are handled, with or without a BOM.
    pub fn read_xml(&self, part: &str) -> Result<String> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(part)
            .map_err(|_| Error::MissingPart(part.to_string()))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        decode_xml_bytes(&bytes)
    }

    /// Check whether a part exists in the package.
    pub fn exists(&self, part: &str) -> bool {
        self.archive.borrow().file_names().any(|n| n == part)
    }

    /// Number of entries in the package.
    pub fn len(&self) -> usize {
        self.archive.borrow().len()
    }

    /// True if the package has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse document core properties from `docProps/core.xml`.
    ///
    /// The part is optional; a package without it yields empty metadata.
    pub fn parse_core_metadata(&self) -> Result<Metadata> {
        let mut meta = Metadata::default();

        let xml = match self.read_xml("docProps/core.xml") {
            Ok(xml) => xml,
            Err(_) => return Ok(meta),
        };

        let mut reader = quick_xml::Reader::from_str(&xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut current_element: Option<String> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(quick_xml::events::Event::Start(e)) => {
                    current_element = Some(
                        String::from_utf8_lossy(e.name().local_name().as_ref()).to_string(),
                    );
                }
                Ok(quick_xml::events::Event::Text(e)) => {
                    if let Some(ref elem) = current_element {
                        let text = e.unescape().unwrap_or_default().to_string();
                        match elem.as_str() {
                            "title" => meta.title = Some(text),
                            "creator" => meta.author = Some(text),
                            "subject" => meta.subject = Some(text),
                            "created" => meta.created = Some(text),
                            "modified" => meta.modified = Some(text),
                            _ => {}
                        }
                    }
                }
                Ok(quick_xml::events::Event::End(_)) => {
                    current_element = None;
                }
                Ok(quick_xml::events::Event::Eof) => break,
                Err(_) => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(meta)
    }
}

impl std::fmt::Debug for DocxContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocxContainer")
            .field("entries", &self.len())
            .finish()
    }
}

/// Decode XML part bytes, handling UTF-8 and UTF-16 LE/BE.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        // UTF-8 BOM
        return String::from_utf8(rest.to_vec()).map_err(|e| Error::Encoding(e.to_string()));
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        // UTF-16 LE BOM
        return Ok(fix_encoding_declaration(&decode_utf16(rest, u16::from_le_bytes)?));
    }

    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        // UTF-16 BE BOM
        return Ok(fix_encoding_declaration(&decode_utf16(rest, u16::from_be_bytes)?));
    }

    // No BOM: try UTF-8, then sniff UTF-16 from null-byte placement in the
    // XML declaration (ASCII code units leave every other byte zero).
    match String::from_utf8(bytes.to_vec()) {
        Ok(s) => Ok(s),
        Err(_) => {
            if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 {
                Ok(fix_encoding_declaration(&decode_utf16(bytes, u16::from_le_bytes)?))
            } else if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 {
                Ok(fix_encoding_declaration(&decode_utf16(bytes, u16::from_be_bytes)?))
            } else {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

/// Decode UTF-16 bytes to a String with the given byte-pair reader.
fn decode_utf16(bytes: &[u8], read_pair: fn([u8; 2]) -> u16) -> Result<String> {
    // Ignore a trailing odd byte
    let len = bytes.len() & !1;
    let units = (0..len)
        .step_by(2)
        .map(|i| read_pair([bytes[i], bytes[i + 1]]));

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Encoding(e.to_string()))
}

/// Rewrite `encoding="UTF-16"` in the XML declaration after transcoding.
///
/// Once the part has been decoded to a Rust String the declaration is a lie,
/// and quick-xml would try to reinterpret the text as UTF-16.
fn fix_encoding_declaration(content: &str) -> String {
    if content.starts_with("<?xml") {
        if let Some(end) = content.find("?>") {
            let decl = content[..end + 2]
                .replace("encoding=\"UTF-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='UTF-16'", "encoding='UTF-8'")
                .replace("encoding=\"utf-16\"", "encoding=\"UTF-8\"")
                .replace("encoding='utf-16'", "encoding='UTF-8'");
            return format!("{}{}", decl, &content[end + 2..]);
        }
    }
    content.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn package_with(part: &str, content: &[u8]) -> DocxContainer {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file(part, SimpleFileOptions::default()).unwrap();
        zip.write_all(content).unwrap();
        let data = zip.finish().unwrap().into_inner();
        DocxContainer::from_bytes(data).unwrap()
    }

    #[test]
    fn test_read_xml_part() {
        let container = package_with("word/document.xml", b"<w:document/>");
        assert!(container.exists("word/document.xml"));
        assert!(!container.exists("word/styles.xml"));
        assert_eq!(container.read_xml("word/document.xml").unwrap(), "<w:document/>");
    }

    #[test]
    fn test_missing_part() {
        let container = package_with("word/document.xml", b"<w:document/>");
        let err = container.read_xml("docProps/app.xml").unwrap_err();
        assert!(matches!(err, Error::MissingPart(_)));
    }

    #[test]
    fn test_not_a_zip() {
        let err = DocxContainer::from_bytes(b"plainly not a zip".to_vec()).unwrap_err();
        assert!(matches!(err, Error::ZipArchive(_)));
    }

    #[test]
    fn test_core_metadata() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
                   xmlns:dc="http://purl.org/dc/elements/1.1/">
  <dc:title>Quarterly Report</dc:title>
  <dc:creator>A. Writer</dc:creator>
</cp:coreProperties>"#;
        let container = package_with("docProps/core.xml", xml);
        let meta = container.parse_core_metadata().unwrap();
        assert_eq!(meta.title.as_deref(), Some("Quarterly Report"));
        assert_eq!(meta.author.as_deref(), Some("A. Writer"));
        assert!(meta.created.is_none());
    }

    #[test]
    fn test_metadata_part_absent() {
        let container = package_with("word/document.xml", b"<w:document/>");
        let meta = container.parse_core_metadata().unwrap();
        assert!(meta.title.is_none());
        assert!(meta.author.is_none());
    }

    #[test]
    fn test_decode_utf16_variants() {
        // UTF-16 LE with BOM
        let utf16_le = b"\xFF\xFE<\0?\0x\0m\0l\0>\0";
        assert_eq!(decode_xml_bytes(utf16_le).unwrap(), "<?xml>");

        // UTF-16 BE with BOM
        let utf16_be = b"\xFE\xFF\0<\0?\0x\0m\0l\0>";
        assert_eq!(decode_xml_bytes(utf16_be).unwrap(), "<?xml>");

        // UTF-8 with BOM
        assert_eq!(decode_xml_bytes(b"\xEF\xBB\xBF<?xml>").unwrap(), "<?xml>");

        // Plain UTF-8
        assert_eq!(decode_xml_bytes(b"<?xml>").unwrap(), "<?xml>");
    }

    #[test]
    fn test_encoding_declaration_rewritten() {
        let fixed = fix_encoding_declaration("<?xml version=\"1.0\" encoding=\"UTF-16\"?><a/>");
        assert_eq!(fixed, "<?xml version=\"1.0\" encoding=\"UTF-8\"?><a/>");
    }
}
