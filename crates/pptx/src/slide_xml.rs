//! Per-slide and presentation XML generation.
//!
//! These are the only parts whose content varies with deck data, so they go
//! through `quick_xml`'s event writer for correct escaping (slide bodies
//! contain `&`, arrows, and emoji).

use deck_core::{Error, Result, Slide, SlideLayout, TextStyle};
use quick_xml::events::{BytesDecl, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// DrawingML namespace (`a:` prefix).
pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// Office relationships namespace (`r:` prefix).
pub const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// PresentationML namespace (`p:` prefix).
pub const NS_PRESENTATION: &str =
    "http://schemas.openxmlformats.org/presentationml/2006/main";

/// Generate the XML for one slide part (`ppt/slides/slideN.xml`).
pub fn slide_part(slide: &Slide) -> Result<Vec<u8>> {
    write_slide(slide)
        .map_err(|e| Error::Xml(format!("Failed to build slide '{}': {}", slide.title, e)))
}

/// Generate `ppt/presentation.xml` for a deck with the given slide count.
///
/// Slide ids start at 256; relationship ids start at rId2 (rId1 is the
/// slide master).
pub fn presentation_part(slide_count: usize) -> Result<Vec<u8>> {
    write_presentation(slide_count)
        .map_err(|e| Error::Xml(format!("Failed to build presentation part: {}", e)))
}

fn write_slide(slide: &Slide) -> quick_xml::Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    writer
        .create_element("p:sld")
        .with_attributes([
            ("xmlns:a", NS_DRAWING),
            ("xmlns:r", NS_RELATIONSHIPS),
            ("xmlns:p", NS_PRESENTATION),
        ])
        .write_inner_content(|w| -> quick_xml::Result<()> {
            w.create_element("p:cSld").write_inner_content(|w| -> quick_xml::Result<()> {
                w.create_element("p:spTree").write_inner_content(|w| -> quick_xml::Result<()> {
                    write_group_header(w)?;

                    let (title_type, body_type) = placeholder_types(slide.layout);
                    write_placeholder(w, 2, "Title 1", title_type, None, &slide.title, slide.title_style)?;
                    write_placeholder(
                        w,
                        3,
                        body_name(slide.layout),
                        body_type,
                        Some(1),
                        &slide.body,
                        slide.body_style,
                    )?;
                    Ok(())
                })?;
                Ok(())
            })?;
            w.create_element("p:clrMapOvr").write_inner_content(|w| -> quick_xml::Result<()> {
                w.create_element("a:masterClrMapping").write_empty()?;
                Ok(())
            })?;
            Ok(())
        })?;

    Ok(writer.into_inner())
}

fn write_presentation(slide_count: usize) -> quick_xml::Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    writer
        .create_element("p:presentation")
        .with_attributes([
            ("xmlns:a", NS_DRAWING),
            ("xmlns:r", NS_RELATIONSHIPS),
            ("xmlns:p", NS_PRESENTATION),
        ])
        .write_inner_content(|w| -> quick_xml::Result<()> {
            w.create_element("p:sldMasterIdLst").write_inner_content(|w| -> quick_xml::Result<()> {
                w.create_element("p:sldMasterId")
                    .with_attributes([("id", "2147483648"), ("r:id", "rId1")])
                    .write_empty()?;
                Ok(())
            })?;
            w.create_element("p:sldIdLst").write_inner_content(|w| -> quick_xml::Result<()> {
                for index in 0..slide_count {
                    let id = (256 + index).to_string();
                    let r_id = format!("rId{}", index + 2);
                    w.create_element("p:sldId")
                        .with_attributes([("id", id.as_str()), ("r:id", r_id.as_str())])
                        .write_empty()?;
                }
                Ok(())
            })?;
            // 10 x 7.5 inch slide, matching the default 4:3 template.
            w.create_element("p:sldSz")
                .with_attributes([("cx", "9144000"), ("cy", "6858000"), ("type", "screen4x3")])
                .write_empty()?;
            w.create_element("p:notesSz")
                .with_attributes([("cx", "6858000"), ("cy", "9144000")])
                .write_empty()?;
            Ok(())
        })?;

    Ok(writer.into_inner())
}

/// Placeholder type names for the title and body shapes of a layout kind.
fn placeholder_types(layout: SlideLayout) -> (&'static str, &'static str) {
    match layout {
        SlideLayout::Title => ("ctrTitle", "subTitle"),
        SlideLayout::Content => ("title", "body"),
    }
}

fn body_name(layout: SlideLayout) -> &'static str {
    match layout {
        SlideLayout::Title => "Subtitle 2",
        SlideLayout::Content => "Content Placeholder 2",
    }
}

/// The non-visual group header every spTree starts with.
fn write_group_header<W: Write>(w: &mut Writer<W>) -> quick_xml::Result<()> {
    w.create_element("p:nvGrpSpPr").write_inner_content(|w| -> quick_xml::Result<()> {
        w.create_element("p:cNvPr")
            .with_attributes([("id", "1"), ("name", "")])
            .write_empty()?;
        w.create_element("p:cNvGrpSpPr").write_empty()?;
        w.create_element("p:nvPr").write_empty()?;
        Ok(())
    })?;
    w.create_element("p:grpSpPr").write_empty()?;
    Ok(())
}

/// Write one placeholder shape with its text body.
///
/// Each newline-separated line of `text` becomes one paragraph; blank lines
/// become empty paragraphs. Explicit styling applies to the first paragraph
/// only, matching the source deck.
fn write_placeholder<W: Write>(
    w: &mut Writer<W>,
    id: u32,
    name: &str,
    ph_type: &str,
    ph_idx: Option<u32>,
    text: &str,
    style: TextStyle,
) -> quick_xml::Result<()> {
    let id = id.to_string();
    let idx = ph_idx.map(|i| i.to_string());

    w.create_element("p:sp").write_inner_content(|w| -> quick_xml::Result<()> {
        w.create_element("p:nvSpPr").write_inner_content(|w| -> quick_xml::Result<()> {
            w.create_element("p:cNvPr")
                .with_attributes([("id", id.as_str()), ("name", name)])
                .write_empty()?;
            w.create_element("p:cNvSpPr").write_inner_content(|w| -> quick_xml::Result<()> {
                w.create_element("a:spLocks")
                    .with_attribute(("noGrp", "1"))
                    .write_empty()?;
                Ok(())
            })?;
            w.create_element("p:nvPr").write_inner_content(|w| -> quick_xml::Result<()> {
                let element = w.create_element("p:ph").with_attribute(("type", ph_type));
                match idx.as_deref() {
                    Some(idx) => element.with_attribute(("idx", idx)).write_empty()?,
                    None => element.write_empty()?,
                };
                Ok(())
            })?;
            Ok(())
        })?;
        w.create_element("p:spPr").write_empty()?;
        w.create_element("p:txBody").write_inner_content(|w| -> quick_xml::Result<()> {
            w.create_element("a:bodyPr").write_empty()?;
            w.create_element("a:lstStyle").write_empty()?;
            for (index, line) in text.split('\n').enumerate() {
                let line_style = if index == 0 { style } else { TextStyle::NONE };
                write_paragraph(w, line, line_style)?;
            }
            Ok(())
        })?;
        Ok(())
    })?;
    Ok(())
}

fn write_paragraph<W: Write>(
    w: &mut Writer<W>,
    line: &str,
    style: TextStyle,
) -> quick_xml::Result<()> {
    if line.is_empty() {
        w.create_element("a:p").write_empty()?;
        return Ok(());
    }

    w.create_element("a:p").write_inner_content(|w| -> quick_xml::Result<()> {
        w.create_element("a:r").write_inner_content(|w| -> quick_xml::Result<()> {
            write_run_properties(w, style)?;
            w.create_element("a:t")
                .write_text_content(BytesText::new(line))?;
            Ok(())
        })?;
        Ok(())
    })?;
    Ok(())
}

fn write_run_properties<W: Write>(w: &mut Writer<W>, style: TextStyle) -> quick_xml::Result<()> {
    // sz is expressed in hundredths of a point.
    let size = style.size_pt.map(|pt| (pt * 100).to_string());
    let hex = style.color.map(|c| c.to_hex());

    let mut element = w.create_element("a:rPr").with_attribute(("lang", "en-US"));
    if let Some(sz) = size.as_deref() {
        element = element.with_attribute(("sz", sz));
    }

    match hex.as_deref() {
        Some(hex) => {
            element.write_inner_content(|w| -> quick_xml::Result<()> {
                w.create_element("a:solidFill").write_inner_content(|w| -> quick_xml::Result<()> {
                    w.create_element("a:srgbClr")
                        .with_attribute(("val", hex))
                        .write_empty()?;
                    Ok(())
                })?;
                Ok(())
            })?;
        }
        None => {
            element.write_empty()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::content::palette;

    fn xml_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).expect("generated XML is valid UTF-8")
    }

    #[test]
    fn test_title_slide_placeholders() {
        let slide = Slide::new(SlideLayout::Title, "Santaan AI EMR", "Subtitle line")
            .with_title_style(TextStyle::sized_colored(44, palette::PRIMARY_BLUE))
            .with_body_style(TextStyle::sized(18));
        let xml = xml_string(slide_part(&slide).unwrap());

        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert!(xml.contains("<a:t>Santaan AI EMR</a:t>"));
        assert!(xml.contains(r#"sz="4400""#));
        assert!(xml.contains(r#"sz="1800""#));
        assert!(xml.contains(r#"<a:srgbClr val="3B82F6"/>"#));
    }

    #[test]
    fn test_content_slide_placeholders() {
        let slide = Slide::new(SlideLayout::Content, "Agenda", "Point one\nPoint two");
        let xml = xml_string(slide_part(&slide).unwrap());

        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains("<a:t>Point one</a:t>"));
        assert!(xml.contains("<a:t>Point two</a:t>"));
        // Unstyled runs carry no size or color.
        assert!(!xml.contains("sz="));
        assert!(!xml.contains("srgbClr"));
    }

    #[test]
    fn test_blank_lines_become_empty_paragraphs() {
        let slide = Slide::new(SlideLayout::Content, "T", "first\n\nlast");
        let xml = xml_string(slide_part(&slide).unwrap());
        assert!(xml.contains("<a:p/>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let slide = Slide::new(SlideLayout::Content, "Pricing & Scaling", "a < b & c");
        let xml = xml_string(slide_part(&slide).unwrap());
        assert!(xml.contains("Pricing &amp; Scaling"));
        assert!(xml.contains("a &lt; b &amp; c"));
        assert!(!xml.contains("Pricing & Scaling"));
    }

    #[test]
    fn test_styling_applies_to_first_paragraph_only() {
        let slide = Slide::new(SlideLayout::Title, "T", "styled\nunstyled")
            .with_body_style(TextStyle::sized(18));
        let xml = xml_string(slide_part(&slide).unwrap());
        assert_eq!(xml.matches(r#"sz="1800""#).count(), 1);
    }

    #[test]
    fn test_presentation_part_lists_all_slides() {
        let xml = xml_string(presentation_part(12).unwrap());

        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="267" r:id="rId13"/>"#));
        assert!(!xml.contains("rId14"));
        assert_eq!(xml.matches("<p:sldId ").count(), 12);
    }
}
