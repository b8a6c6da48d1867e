//! PPTX package writer.
//!
//! Renders a [`Deck`] into the fixed set of OOXML parts: content types,
//! package relationships, document properties, presentation part, one slide
//! master with two layouts and a theme, per-slide parts with their
//! relationships, notes slides, and embedded media. The package is staged in
//! memory and written to disk in a single pass, so fatal errors never leave
//! a partial file behind.

use crate::assemble::{Deck, DeckSlide};
use crate::parts;
use crate::style::{self, Region};
use deck_core::{Error, Result};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::ZipWriter;

const XMLNS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_NOTES_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesMaster";
const REL_NOTES_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
const REL_IMAGE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Shared spTree group header for generated slide parts.
const SP_TREE_HEADER: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>"#;

/// Writer for PPTX presentation packages.
pub struct PptxWriter;

impl PptxWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Render the deck and persist it at `path` with a single write.
    pub fn save(&self, deck: &Deck, path: &Path) -> Result<()> {
        let bytes = self.write_to_bytes(deck)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Render the deck into an in-memory package.
    pub fn write_to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        let cursor = self.write(deck, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Write the full package to `writer`.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);
        let has_notes = deck.slides.iter().any(|s| s.notes.is_some());
        let images: Vec<Option<PlacedImage>> = deck.slides.iter().map(place_image).collect();

        add_part(
            &mut zip,
            "[Content_Types].xml",
            &content_types_xml(deck, has_notes),
        )?;
        add_part(&mut zip, "_rels/.rels", parts::ROOT_RELS_XML)?;
        add_part(&mut zip, "docProps/core.xml", &core_props_xml(deck))?;
        add_part(&mut zip, "docProps/app.xml", &app_props_xml(deck))?;
        add_part(
            &mut zip,
            "ppt/presentation.xml",
            &presentation_xml(deck, has_notes),
        )?;
        add_part(
            &mut zip,
            "ppt/_rels/presentation.xml.rels",
            &presentation_rels_xml(deck, has_notes),
        )?;
        add_part(
            &mut zip,
            "ppt/slideMasters/slideMaster1.xml",
            parts::SLIDE_MASTER_XML,
        )?;
        add_part(
            &mut zip,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            parts::SLIDE_MASTER_RELS_XML,
        )?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/slideLayout1.xml",
            parts::TITLE_LAYOUT_XML,
        )?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/slideLayout2.xml",
            parts::CONTENT_LAYOUT_XML,
        )?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            parts::SLIDE_LAYOUT_RELS_XML,
        )?;
        add_part(
            &mut zip,
            "ppt/slideLayouts/_rels/slideLayout2.xml.rels",
            parts::SLIDE_LAYOUT_RELS_XML,
        )?;
        add_part(&mut zip, "ppt/theme/theme1.xml", parts::THEME_XML)?;

        if has_notes {
            add_part(
                &mut zip,
                "ppt/notesMasters/notesMaster1.xml",
                parts::NOTES_MASTER_XML,
            )?;
            add_part(
                &mut zip,
                "ppt/notesMasters/_rels/notesMaster1.xml.rels",
                parts::NOTES_MASTER_RELS_XML,
            )?;
        }

        // The title slide is slide1; the content slide at 1-based position
        // N becomes slide{N+1}.
        add_part(&mut zip, "ppt/slides/slide1.xml", &title_slide_xml(deck))?;
        add_part(
            &mut zip,
            "ppt/slides/_rels/slide1.xml.rels",
            &title_slide_rels_xml(),
        )?;

        for (slide, image) in deck.slides.iter().zip(&images) {
            let index = slide.number + 1;
            add_part(
                &mut zip,
                &format!("ppt/slides/slide{index}.xml"),
                &content_slide_xml(slide, image.as_ref()),
            )?;
            add_part(
                &mut zip,
                &format!("ppt/slides/_rels/slide{index}.xml.rels"),
                &content_slide_rels_xml(index, image.as_ref(), slide.notes.is_some()),
            )?;

            if let Some(notes) = &slide.notes {
                add_part(
                    &mut zip,
                    &format!("ppt/notesSlides/notesSlide{index}.xml"),
                    &notes_slide_xml(notes),
                )?;
                add_part(
                    &mut zip,
                    &format!("ppt/notesSlides/_rels/notesSlide{index}.xml.rels"),
                    &notes_slide_rels_xml(index),
                )?;
            }
        }

        for image in images.iter().flatten() {
            let bytes = fs::read(&image.source)?;
            add_media(&mut zip, &format!("ppt/media/{}", image.media_name), &bytes)?;
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish package: {e}")))
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// An image that survived resolution and will be embedded in the package.
#[derive(Debug)]
struct PlacedImage {
    media_name: String,
    source: PathBuf,
    extent: (i64, i64),
}

/// Turn a resolved image path into an embeddable media entry, reading the
/// image header for fixed-width scaling. Unsupported or unreadable files are
/// tolerated: the slide renders without its picture.
fn place_image(slide: &DeckSlide) -> Option<PlacedImage> {
    let source = slide.image.as_ref()?;

    let ext = match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => {
            log::warn!("Skipping image without extension: {}", source.display());
            return None;
        }
    };
    if !matches!(ext.as_str(), "png" | "jpg" | "jpeg") {
        log::warn!("Skipping unsupported image format: {}", source.display());
        return None;
    }

    let (width, height) = match image::image_dimensions(source) {
        Ok(dims) => dims,
        Err(err) => {
            log::warn!("Skipping unreadable image {}: {}", source.display(), err);
            return None;
        }
    };
    if width == 0 || height == 0 {
        return None;
    }

    let cy = style::PICTURE_WIDTH * i64::from(height) / i64::from(width);
    Some(PlacedImage {
        media_name: format!("image{}.{}", slide.number, ext),
        source: source.clone(),
        extent: (style::PICTURE_WIDTH, cy),
    })
}

fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &str) -> Result<()> {
    add_media(zip, name, content.as_bytes())
}

fn add_media<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &[u8]) -> Result<()> {
    zip.start_file(name, FileOptions::default())
        .map_err(|e| Error::ZipError(format!("Failed to add part '{name}': {e}")))?;
    zip.write_all(content)?;
    Ok(())
}

fn esc(text: &str) -> String {
    escape(text).into_owned()
}

fn content_types_xml(deck: &Deck, has_notes: bool) -> String {
    let mut overrides = String::new();

    let mut push_override = |part: &str, content_type: &str| {
        overrides.push_str(&format!(
            "  <Override PartName=\"{part}\" ContentType=\"{content_type}\"/>\n"
        ));
    };

    push_override(
        "/ppt/presentation.xml",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
    );
    push_override(
        "/ppt/slideMasters/slideMaster1.xml",
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml",
    );
    for layout in 1..=2 {
        push_override(
            &format!("/ppt/slideLayouts/slideLayout{layout}.xml"),
            "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml",
        );
    }
    push_override(
        "/ppt/theme/theme1.xml",
        "application/vnd.openxmlformats-officedocument.theme+xml",
    );
    if has_notes {
        push_override(
            "/ppt/notesMasters/notesMaster1.xml",
            "application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml",
        );
    }
    for index in 1..=deck.total_slides() {
        push_override(
            &format!("/ppt/slides/slide{index}.xml"),
            "application/vnd.openxmlformats-officedocument.presentationml.slide+xml",
        );
    }
    for slide in deck.slides.iter().filter(|s| s.notes.is_some()) {
        push_override(
            &format!("/ppt/notesSlides/notesSlide{}.xml", slide.number + 1),
            "application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml",
        );
    }
    push_override(
        "/docProps/core.xml",
        "application/vnd.openxmlformats-package.core-properties+xml",
    );
    push_override(
        "/docProps/app.xml",
        "application/vnd.openxmlformats-officedocument.extended-properties+xml",
    );

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\n  \
         <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\n  \
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>\n  \
         <Default Extension=\"png\" ContentType=\"image/png\"/>\n  \
         <Default Extension=\"jpg\" ContentType=\"image/jpeg\"/>\n  \
         <Default Extension=\"jpeg\" ContentType=\"image/jpeg\"/>\n\
         {overrides}</Types>\n"
    )
}

fn core_props_xml(deck: &Deck) -> String {
    // Deliberately no creation/modification timestamps: a given input must
    // always produce the same bytes.
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
         xmlns:dc=\"http://purl.org/dc/elements/1.1/\" xmlns:dcterms=\"http://purl.org/dc/terms/\" \
         xmlns:dcmitype=\"http://purl.org/dc/dcmitype/\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
         <dc:title>{}</dc:title></cp:coreProperties>\n",
        esc(&deck.title)
    )
}

fn app_props_xml(deck: &Deck) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\" \
         xmlns:vt=\"http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes\">\
         <Application>md2deck</Application><Slides>{}</Slides></Properties>\n",
        deck.total_slides()
    )
}

fn presentation_xml(deck: &Deck, has_notes: bool) -> String {
    let total = deck.total_slides();

    let mut slide_ids = String::new();
    for index in 1..=total {
        slide_ids.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            255 + index,
            index + 1
        ));
    }

    let notes_master_list = if has_notes {
        format!(
            r#"<p:notesMasterIdLst><p:notesMasterId r:id="rId{}"/></p:notesMasterIdLst>"#,
            total + 2
        )
    } else {
        String::new()
    };

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <p:presentation {XMLNS}>\
         <p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>\
         {notes_master_list}\
         <p:sldIdLst>{slide_ids}</p:sldIdLst>\
         <p:sldSz cx=\"{}\" cy=\"{}\"/><p:notesSz cx=\"{}\" cy=\"{}\"/>\
         </p:presentation>\n",
        style::SLIDE_WIDTH,
        style::SLIDE_HEIGHT,
        style::NOTES_WIDTH,
        style::NOTES_HEIGHT
    )
}

fn presentation_rels_xml(deck: &Deck, has_notes: bool) -> String {
    let total = deck.total_slides();

    let mut rels = vec![(
        1,
        REL_SLIDE_MASTER,
        "slideMasters/slideMaster1.xml".to_string(),
    )];
    for index in 1..=total {
        rels.push((index + 1, REL_SLIDE, format!("slides/slide{index}.xml")));
    }
    if has_notes {
        rels.push((
            total + 2,
            REL_NOTES_MASTER,
            "notesMasters/notesMaster1.xml".to_string(),
        ));
    }

    rels_xml(&rels)
}

fn title_slide_rels_xml() -> String {
    rels_xml(&[(
        1,
        REL_SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml".to_string(),
    )])
}

fn content_slide_rels_xml(index: usize, image: Option<&PlacedImage>, has_notes: bool) -> String {
    let mut rels = vec![(
        1,
        REL_SLIDE_LAYOUT,
        "../slideLayouts/slideLayout2.xml".to_string(),
    )];
    if let Some(image) = image {
        rels.push((2, REL_IMAGE, format!("../media/{}", image.media_name)));
    }
    if has_notes {
        rels.push((3, REL_NOTES_SLIDE, format!("../notesSlides/notesSlide{index}.xml")));
    }

    rels_xml(&rels)
}

fn notes_slide_rels_xml(index: usize) -> String {
    rels_xml(&[
        (
            1,
            REL_NOTES_MASTER,
            "../notesMasters/notesMaster1.xml".to_string(),
        ),
        (2, REL_SLIDE, format!("../slides/slide{index}.xml")),
    ])
}

fn rels_xml(rels: &[(usize, &str, String)]) -> String {
    let body: String = rels
        .iter()
        .map(|(id, rel_type, target)| {
            format!(r#"<Relationship Id="rId{id}" Type="{rel_type}" Target="{target}"/>"#)
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">{body}</Relationships>\n"
    )
}

fn title_slide_xml(deck: &Deck) -> String {
    let mut shapes = shape_xml(
        2,
        "Title 1",
        r#"<p:ph type="ctrTitle"/>"#,
        style::DECK_TITLE_REGION,
        &title_paragraph(&deck.title, style::DECK_TITLE_SIZE),
    );
    if !deck.subtitle.is_empty() {
        shapes.push_str(&shape_xml(
            3,
            "Subtitle 2",
            r#"<p:ph type="subTitle" idx="1"/>"#,
            style::DECK_SUBTITLE_REGION,
            &plain_paragraph(&deck.subtitle, style::DECK_SUBTITLE_SIZE),
        ));
    }

    slide_xml(&shapes)
}

fn content_slide_xml(slide: &DeckSlide, image: Option<&PlacedImage>) -> String {
    let mut shapes = shape_xml(
        2,
        "Title 1",
        r#"<p:ph type="title"/>"#,
        style::SLIDE_TITLE_REGION,
        &title_paragraph(&slide.title, style::SLIDE_TITLE_SIZE),
    );

    if !slide.bullets.is_empty() {
        let paragraphs: String = slide.bullets.iter().map(|b| bullet_paragraph(b)).collect();
        shapes.push_str(&shape_xml(
            3,
            "Content 2",
            r#"<p:ph idx="1"/>"#,
            style::SLIDE_BODY_REGION,
            &paragraphs,
        ));
    }

    if let Some(image) = image {
        shapes.push_str(&picture_xml(4, "rId2", image));
    }

    slide_xml(&shapes)
}

fn slide_xml(shapes: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <p:sld {XMLNS}><p:cSld><p:spTree>{SP_TREE_HEADER}{shapes}</p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>\n"
    )
}

fn notes_slide_xml(notes: &str) -> String {
    let paragraphs: String = notes.lines().map(note_paragraph).collect();
    let body = shape_xml(
        2,
        "Notes Placeholder 1",
        r#"<p:ph type="body" idx="1"/>"#,
        style::NOTES_BODY_REGION,
        &paragraphs,
    );

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <p:notes {XMLNS}><p:cSld><p:spTree>{SP_TREE_HEADER}{body}</p:spTree></p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:notes>\n"
    )
}

fn shape_xml(id: u32, name: &str, ph: &str, region: Region, paragraphs: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr><p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"#,
        region.x, region.y, region.cx, region.cy
    )
}

/// A bold title run in the brand color.
fn title_paragraph(text: &str, size: u32) -> String {
    format!(
        r#"<a:p><a:r><a:rPr lang="en-US" sz="{size}" b="1" dirty="0"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:rPr><a:t>{}</a:t></a:r></a:p>"#,
        style::TITLE_COLOR,
        esc(text)
    )
}

fn plain_paragraph(text: &str, size: u32) -> String {
    format!(
        r#"<a:p><a:r><a:rPr lang="en-US" sz="{size}" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
        esc(text)
    )
}

/// A flat (level 0) bullet paragraph with the fixed space-before.
fn bullet_paragraph(text: &str) -> String {
    format!(
        r#"<a:p><a:pPr lvl="0"><a:spcBef><a:spcPts val="{}"/></a:spcBef></a:pPr><a:r><a:rPr lang="en-US" sz="{}" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
        style::BULLET_SPACE_BEFORE,
        style::BULLET_SIZE,
        esc(text)
    )
}

fn note_paragraph(line: &str) -> String {
    format!(
        r#"<a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
        esc(line)
    )
}

fn picture_xml(id: u32, rel_id: &str, image: &PlacedImage) -> String {
    let (cx, cy) = image.extent;
    format!(
        r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
        style::PICTURE_LEFT,
        style::PICTURE_TOP
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{assemble, AssembleOptions};
    use deck_core::parse_markdown;
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use std::io::Read;
    use zip::ZipArchive;

    fn render(markdown: &str, options: &AssembleOptions) -> Vec<u8> {
        let slides = parse_markdown(markdown);
        let deck = assemble(&slides, options).unwrap();
        PptxWriter::new().write_to_bytes(&deck).unwrap()
    }

    fn part_names(bytes: &[u8]) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    /// Collect the text runs of a slide part in document order.
    fn text_runs(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut in_text = false;
        let mut texts = Vec::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"a:t" => in_text = true,
                Ok(Event::End(ref e)) if e.name().as_ref() == b"a:t" => in_text = false,
                Ok(Event::Text(ref e)) if in_text => {
                    texts.push(e.unescape().unwrap().to_string());
                }
                Ok(Event::Eof) => break,
                Err(e) => panic!("XML parsing error: {e}"),
                _ => {}
            }
        }

        texts
    }

    const SAMPLE: &str = "\
# Opening
- first point
- second point
Note: pace yourself

## Closing
- wrap up
";

    #[test]
    fn test_package_contains_expected_parts() {
        let bytes = render(SAMPLE, &AssembleOptions::default());
        let names = part_names(&bytes);

        for expected in [
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
            "ppt/notesMasters/notesMaster1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/slide3.xml",
            "ppt/notesSlides/notesSlide2.xml",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_title_slide_texts() {
        let options = AssembleOptions {
            subtitle: Some("Q3 update".into()),
            ..Default::default()
        };
        let bytes = render(SAMPLE, &options);

        let texts = text_runs(&read_part(&bytes, "ppt/slides/slide1.xml"));
        assert_eq!(texts, vec!["Opening", "Q3 update"]);
    }

    #[test]
    fn test_title_slide_omits_empty_subtitle() {
        let bytes = render(SAMPLE, &AssembleOptions::default());

        let texts = text_runs(&read_part(&bytes, "ppt/slides/slide1.xml"));
        assert_eq!(texts, vec!["Opening"]);
    }

    #[test]
    fn test_content_slide_text_order() {
        let bytes = render(SAMPLE, &AssembleOptions::default());

        let texts = text_runs(&read_part(&bytes, "ppt/slides/slide2.xml"));
        assert_eq!(texts, vec!["Opening", "first point", "second point"]);
    }

    #[test]
    fn test_slide_without_bullets_has_no_body_shape() {
        let bytes = render("# Only A Title\n", &AssembleOptions::default());

        let xml = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(!xml.contains(r#"<p:ph idx="1"/>"#));
        assert_eq!(text_runs(&xml), vec!["Only A Title"]);
    }

    #[test]
    fn test_notes_slide_only_where_notes_exist() {
        let bytes = render(SAMPLE, &AssembleOptions::default());
        let names = part_names(&bytes);

        assert!(names.iter().any(|n| n == "ppt/notesSlides/notesSlide2.xml"));
        assert!(!names.iter().any(|n| n == "ppt/notesSlides/notesSlide3.xml"));

        let texts = text_runs(&read_part(&bytes, "ppt/notesSlides/notesSlide2.xml"));
        assert_eq!(texts, vec!["pace yourself"]);
    }

    #[test]
    fn test_notes_master_absent_without_notes() {
        let bytes = render("# A\n- b\n", &AssembleOptions::default());
        let names = part_names(&bytes);

        assert!(!names.iter().any(|n| n.starts_with("ppt/notesMasters/")));

        let presentation = read_part(&bytes, "ppt/presentation.xml");
        assert!(!presentation.contains("notesMasterIdLst"));
    }

    #[test]
    fn test_presentation_lists_slides_in_order() {
        let bytes = render(SAMPLE, &AssembleOptions::default());
        let presentation = read_part(&bytes, "ppt/presentation.xml");

        assert!(presentation.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(presentation.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(presentation.contains(r#"<p:sldId id="258" r:id="rId4"/>"#));

        let rels = read_part(&bytes, "ppt/_rels/presentation.xml.rels");
        let expected =
            format!(r#"<Relationship Id="rId2" Type="{REL_SLIDE}" Target="slides/slide1.xml"/>"#);
        assert!(rels.contains(&expected));
    }

    #[test]
    fn test_content_types_cover_every_slide() {
        let bytes = render(SAMPLE, &AssembleOptions::default());
        let types = read_part(&bytes, "[Content_Types].xml");

        for part in [
            "/ppt/slides/slide1.xml",
            "/ppt/slides/slide2.xml",
            "/ppt/slides/slide3.xml",
            "/ppt/notesSlides/notesSlide2.xml",
        ] {
            assert!(types.contains(part), "missing override for {part}");
        }
    }

    #[test]
    fn test_image_is_embedded_and_scaled_by_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        image::RgbaImage::new(2, 1).save(&path).unwrap();

        let markdown = format!("# One\n![chart]({})\n- a\n", path.display());
        let bytes = render(&markdown, &AssembleOptions::default());
        let names = part_names(&bytes);

        assert!(names.iter().any(|n| n == "ppt/media/image1.png"));

        // 3.5 in wide at a 2:1 aspect ratio gives half the width as height.
        let xml = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(xml.contains(r#"<a:ext cx="3200400" cy="1600200"/>"#));
        assert!(xml.contains(r#"<a:off x="5486400" y="1828800"/>"#));

        let rels = read_part(&bytes, "ppt/slides/_rels/slide2.xml.rels");
        assert!(rels.contains("../media/image1.png"));
    }

    #[test]
    fn test_unreadable_image_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        let markdown = format!("# One\n![x]({})\n- a\n", path.display());
        let bytes = render(&markdown, &AssembleOptions::default());

        assert!(!part_names(&bytes).iter().any(|n| n.starts_with("ppt/media/")));
        let xml = read_part(&bytes, "ppt/slides/slide2.xml");
        assert!(!xml.contains("<p:pic>"));
    }

    #[test]
    fn test_special_characters_survive_the_round_trip() {
        let markdown = "# R&D <Status>\n- profit \"up\" & costs down\n";
        let options = AssembleOptions {
            title: Some("AT&T <Deck>".into()),
            ..Default::default()
        };
        let bytes = render(markdown, &options);

        let title_texts = text_runs(&read_part(&bytes, "ppt/slides/slide1.xml"));
        assert_eq!(title_texts, vec!["AT&T <Deck>"]);

        let content_texts = text_runs(&read_part(&bytes, "ppt/slides/slide2.xml"));
        assert_eq!(
            content_texts,
            vec!["R&D <Status>", "profit \"up\" & costs down"]
        );
    }

    #[test]
    fn test_output_is_deterministic() {
        let options = AssembleOptions {
            subtitle: Some("same in, same out".into()),
            ..Default::default()
        };
        let first = render(SAMPLE, &options);
        let second = render(SAMPLE, &options);

        assert_eq!(first, second);
    }

    #[test]
    fn test_multiline_notes_become_separate_paragraphs() {
        let markdown = "# T\n- a\nNote: one\nextra prose\nNotes: two\n";
        let bytes = render(markdown, &AssembleOptions::default());

        let texts = text_runs(&read_part(&bytes, "ppt/notesSlides/notesSlide2.xml"));
        assert_eq!(texts, vec!["one", "extra prose", "two"]);
    }
}
