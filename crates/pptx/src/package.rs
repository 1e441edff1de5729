//! PPTX package assembly.
//!
//! Streams every part of the OOXML package into a ZIP container. Part
//! timestamps are pinned to a fixed value so two runs over the same deck
//! produce byte-identical files.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use deck_core::{Deck, Error, Result};
use log::{debug, info};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::{parts, slide_xml};

/// Writer that serializes a [`Deck`] as a .pptx package.
pub struct PptxWriter;

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize the deck to a file at `path`.
    ///
    /// The parent directory must already exist; callers own directory
    /// creation.
    pub fn save(&self, deck: &Deck, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write(deck, file)?;
        info!(
            "Wrote {} slides to {}",
            deck.slide_count(),
            path.display()
        );
        Ok(())
    }

    /// Serialize the deck into any seekable sink.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, sink: W) -> Result<()> {
        let mut zip = ZipWriter::new(sink);
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let slide_count = deck.slide_count();

        write_part(
            &mut zip,
            options,
            "[Content_Types].xml",
            parts::content_types(slide_count).as_bytes(),
        )?;
        write_part(&mut zip, options, "_rels/.rels", parts::ROOT_RELS.as_bytes())?;
        write_part(
            &mut zip,
            options,
            "docProps/core.xml",
            parts::core_properties(&deck.name).as_bytes(),
        )?;
        write_part(
            &mut zip,
            options,
            "docProps/app.xml",
            parts::app_properties(slide_count).as_bytes(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/presentation.xml",
            &slide_xml::presentation_part(slide_count)?,
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/_rels/presentation.xml.rels",
            parts::presentation_rels(slide_count).as_bytes(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideMasters/slideMaster1.xml",
            parts::SLIDE_MASTER.as_bytes(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::SLIDE_MASTER_RELS.as_bytes(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideLayouts/slideLayout1.xml",
            parts::TITLE_LAYOUT.as_bytes(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::LAYOUT_RELS.as_bytes(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideLayouts/slideLayout2.xml",
            parts::CONTENT_LAYOUT.as_bytes(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/slideLayouts/_rels/slideLayout2.xml.rels",
            parts::LAYOUT_RELS.as_bytes(),
        )?;
        write_part(
            &mut zip,
            options,
            "ppt/theme/theme1.xml",
            parts::theme().as_bytes(),
        )?;

        for (index, slide) in deck.slides.iter().enumerate() {
            let number = index + 1;
            let xml = slide_xml::slide_part(slide)?;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slides/slide{number}.xml"),
                &xml,
            )?;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slides/_rels/slide{number}.xml.rels"),
                parts::slide_rels(slide.layout).as_bytes(),
            )?;
        }

        zip.finish()
            .map_err(|e| Error::Zip(format!("Failed to finalize package: {e}")))?;
        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: FileOptions,
    name: &str,
    bytes: &[u8],
) -> Result<()> {
    debug!("Writing part {name} ({} bytes)", bytes.len());
    zip.start_file(name, options)
        .map_err(|e| Error::Zip(format!("Failed to start part '{name}': {e}")))?;
    zip.write_all(bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Slide, SlideLayout};
    use std::io::Cursor;

    fn sample_deck() -> Deck {
        let mut deck = Deck::new("Sample");
        deck.add_slide(Slide::new(SlideLayout::Title, "Opening", "sub"));
        deck.add_slide(Slide::new(SlideLayout::Content, "Middle", "body"));
        deck.add_slide(Slide::new(SlideLayout::Title, "Closing", "bye"));
        deck
    }

    fn write_to_bytes(deck: &Deck) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        PptxWriter::new().write(deck, &mut buffer).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_package_contains_expected_parts() {
        let bytes = write_to_bytes(&sample_deck());
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/slideLayout2.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide3.xml",
            "ppt/slides/_rels/slide3.xml.rels",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part: {name}");
        }
        assert!(archive.by_name("ppt/slides/slide4.xml").is_err());
    }

    #[test]
    fn test_write_is_deterministic() {
        let deck = sample_deck();
        assert_eq!(write_to_bytes(&deck), write_to_bytes(&deck));
    }

    #[test]
    fn test_save_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pptx");

        PptxWriter::new().save(&sample_deck(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // ZIP local file header magic.
        assert_eq!(&bytes[..4], &b"PK\x03\x04"[..]);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_into_readonly_directory_fails() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

        // Permission bits don't restrict root; nothing to assert there.
        if std::fs::File::create(dir.path().join("probe.tmp")).is_ok() {
            return;
        }

        let result = PptxWriter::new().save(&sample_deck(), &dir.path().join("out.pptx"));
        assert!(matches!(result, Err(Error::Io(_))));

        // Restore permissions so the tempdir can be removed.
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist").join("out.pptx");

        let result = PptxWriter::new().save(&sample_deck(), &path);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
