// ABOUTME: PPTX export module for the deckgen application
// ABOUTME: Serializes a deck, theme and layout into a PowerPoint document

use crate::asset::ImageAsset;
use crate::deck::{Deck, Slide};
use crate::errors::{DeckError, Result};
use crate::geometry::Rect;
use crate::layout::Layout;
use crate::regions::{resolve_regions, RegionKind, RegionSet};
use crate::style::HexColor;
use crate::theme::Theme;
use crate::utils;
use log::{debug, info, warn};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::{write::FileOptions, ZipWriter};

/// Filename used when the caller does not choose one.
pub const DEFAULT_OUTPUT_FILE: &str = "AI-Generated-Presentation.pptx";

const TITLE_FONT_SIZE: u32 = 3600;
const BODY_FONT_SIZE: u32 = 1800;
const BULLET_CHAR: &str = "\u{25CF}";

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Escape deck text for an XML text node or attribute. Characters XML 1.0
/// cannot carry at all (most C0 controls, U+FFFE, U+FFFF) are dropped first.
fn xml_text(text: &str) -> String {
    let legal: String = text
        .chars()
        .filter(|&c| {
            matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        })
        .collect();
    escape(legal.as_str()).into_owned()
}

/// Configuration for PPTX generation
pub struct PptxConfig {
    pub title: String,
    pub aspect_ratio: String, // "16:9" or "4:3"
}

impl Default for PptxConfig {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            aspect_ratio: "16:9".to_string(),
        }
    }
}

impl PptxConfig {
    /// Slide size in EMU.
    pub fn frame_size(&self) -> (u64, u64) {
        match self.aspect_ratio.as_str() {
            "16:9" => (9144000, 5143500),
            "4:3" => (9144000, 6858000),
            _ => {
                warn!(
                    "Unsupported aspect ratio: {}. Using 16:9 instead.",
                    self.aspect_ratio
                );
                (9144000, 5143500)
            }
        }
    }
}

/// How a slide's picture is attached to the package.
enum ImagePart {
    Embedded { target: String },
    Linked { target: String },
}

/// Export `deck` as a PPTX document, one slide per deck slide, in order.
pub fn export_deck(
    deck: &Deck,
    theme: &Theme,
    layout: &Layout,
    include_images: bool,
    config: &PptxConfig,
) -> Result<Vec<u8>> {
    info!(
        "Exporting {} slides with theme '{}' and layout '{}'",
        deck.len(),
        theme.name,
        layout.name
    );
    if deck.is_empty() {
        return Err(DeckError::ValidationError(
            "Cannot export a deck with no slides".to_string(),
        ));
    }

    let (cx, cy) = config.frame_size();
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    write_package_parts(&mut zip, deck.len(), config, cx, cy)?;

    for (i, slide) in deck.iter().enumerate() {
        let slide_num = i + 1;
        let regions = resolve_regions(theme, layout, slide, include_images);
        debug!(
            "Slide {} uses '{}' geometry with {} regions",
            slide_num,
            regions.geometry,
            regions.regions.len()
        );

        let image = if regions.image().is_some() {
            attach_image(&mut zip, slide_num, &slide.image_asset)?
        } else {
            None
        };

        info!("Creating slide XML: ppt/slides/slide{}.xml", slide_num);
        add_part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            &slide_rels(slide_num, image.as_ref()),
        )?;
        add_part(
            &mut zip,
            &format!("ppt/slides/slide{}.xml", slide_num),
            &slide_xml(slide, &regions, image.as_ref(), cx, cy),
        )?;

        add_part(
            &mut zip,
            &format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", slide_num),
            &notes_rels(slide_num),
        )?;
        add_part(
            &mut zip,
            &format!("ppt/notesSlides/notesSlide{}.xml", slide_num),
            &notes_xml(&slide.speaker_notes),
        )?;
    }

    info!("Finalizing PPTX file");
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Write exported document bytes to `output_file`.
pub fn write_pptx(bytes: &[u8], output_file: &Path) -> Result<()> {
    utils::ensure_parent_directory_exists(output_file)?;
    fs::write(output_file, bytes).map_err(DeckError::FileReadError)?;
    info!("PPTX file created at {:?}", output_file);
    Ok(())
}

fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &str) -> Result<()> {
    zip.start_file(name, FileOptions::default())?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn attach_image<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    slide_num: usize,
    reference: &str,
) -> Result<Option<ImagePart>> {
    let asset = ImageAsset::parse(reference);
    let ext = asset.extension();
    match asset {
        ImageAsset::Embedded { bytes, .. } => {
            let image_name = format!("image{}.{}", slide_num, ext.unwrap_or("png"));
            info!("Adding image to PPTX: ppt/media/{}", image_name);
            zip.start_file(format!("ppt/media/{}", image_name), FileOptions::default())?;
            zip.write_all(&bytes)?;
            Ok(Some(ImagePart::Embedded {
                target: format!("../media/{}", image_name),
            }))
        }
        ImageAsset::Remote(url) => {
            info!("Linking remote image for slide {}: {}", slide_num, url);
            Ok(Some(ImagePart::Linked {
                target: url.to_string(),
            }))
        }
        ImageAsset::Unsupported(reason) => {
            warn!(
                "Skipping image on slide {}: {}. Text is still exported.",
                slide_num, reason
            );
            Ok(None)
        }
        ImageAsset::Empty => Ok(None),
    }
}

fn write_package_parts<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    slide_count: usize,
    config: &PptxConfig,
    cx: u64,
    cy: u64,
) -> Result<()> {
    info!("Creating PPTX structure: [Content_Types].xml");
    let overrides = (1..=slide_count)
        .map(|n| {
            format!(
                r#"    <Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>
    <Override PartName="/ppt/notesSlides/notesSlide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml"/>"#,
                n = n
            )
        })
        .collect::<Vec<String>>()
        .join("\n");
    add_part(
        zip,
        "[Content_Types].xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="jpeg" ContentType="image/jpeg"/>
    <Default Extension="jpg" ContentType="image/jpeg"/>
    <Default Extension="png" ContentType="image/png"/>
    <Default Extension="gif" ContentType="image/gif"/>
    <Default Extension="bmp" ContentType="image/bmp"/>
    <Default Extension="tiff" ContentType="image/tiff"/>
    <Default Extension="webp" ContentType="image/webp"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/notesMasters/notesMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml"/>
    <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/ppt/theme/theme2.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
{overrides}
</Types>"#,
            overrides = overrides
        ),
    )?;

    info!("Creating PPTX structure: _rels/.rels");
    add_part(
        zip,
        "_rels/.rels",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#,
    )?;

    info!("Creating PPTX structure: docProps");
    add_part(
        zip,
        "docProps/app.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>deckgen</Application>
    <Slides>{}</Slides>
    <Notes>{}</Notes>
</Properties>"#,
            slide_count, slide_count
        ),
    )?;
    add_part(
        zip,
        "docProps/core.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>deckgen</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
            xml_text(&config.title),
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
        ),
    )?;

    // rId1 master, rId2 notes master, rId3 theme, then one per slide
    info!("Creating PPTX structure: ppt/presentation.xml");
    let mut pres_rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    pres_rels.push_str(&format!(
        r#"    <Relationship Id="rId1" Type="{ns}/slideMaster" Target="slideMasters/slideMaster1.xml"/>
    <Relationship Id="rId2" Type="{ns}/notesMaster" Target="notesMasters/notesMaster1.xml"/>
    <Relationship Id="rId3" Type="{ns}/theme" Target="theme/theme1.xml"/>
"#,
        ns = REL_NS
    ));
    for n in 1..=slide_count {
        pres_rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="{}/slide" Target="slides/slide{}.xml"/>"#,
            n + 3,
            REL_NS,
            n
        ));
        pres_rels.push('\n');
    }
    pres_rels.push_str("</Relationships>");
    add_part(zip, "ppt/_rels/presentation.xml.rels", &pres_rels)?;

    let slide_ids = (1..=slide_count)
        .map(|n| format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 255 + n, n + 3))
        .collect::<Vec<String>>()
        .join("\n");
    add_part(
        zip,
        "ppt/presentation.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation {ns}>
    <p:sldMasterIdLst>
        <p:sldMasterId id="2147483648" r:id="rId1"/>
    </p:sldMasterIdLst>
    <p:notesMasterIdLst>
        <p:notesMasterId r:id="rId2"/>
    </p:notesMasterIdLst>
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
            ns = NS,
            slide_ids = slide_ids,
            cx = cx,
            cy = cy
        ),
    )?;

    info!("Creating PPTX structure: master, layout, notes master and themes");
    add_part(
        zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
    <Relationship Id="rId2" Type="{ns}/theme" Target="../theme/theme1.xml"/>
</Relationships>"#,
            ns = REL_NS
        ),
    )?;
    add_part(zip, "ppt/slideMasters/slideMaster1.xml", &slide_master_xml())?;
    add_part(
        zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#,
            ns = REL_NS
        ),
    )?;
    add_part(zip, "ppt/slideLayouts/slideLayout1.xml", &slide_layout_xml())?;
    add_part(
        zip,
        "ppt/notesMasters/_rels/notesMaster1.xml.rels",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/theme" Target="../theme/theme2.xml"/>
</Relationships>"#,
            ns = REL_NS
        ),
    )?;
    add_part(zip, "ppt/notesMasters/notesMaster1.xml", &notes_master_xml())?;
    add_part(zip, "ppt/theme/theme1.xml", &office_theme_xml("Deck Theme"))?;
    add_part(zip, "ppt/theme/theme2.xml", &office_theme_xml("Notes Theme"))?;

    Ok(())
}

fn slide_rels(slide_num: usize, image: Option<&ImagePart>) -> String {
    let image_rel = match image {
        Some(ImagePart::Embedded { target }) => format!(
            r#"
    <Relationship Id="rId3" Type="{}/image" Target="{}"/>"#,
            REL_NS, target
        ),
        Some(ImagePart::Linked { target }) => format!(
            r#"
    <Relationship Id="rId3" Type="{}/image" Target="{}" TargetMode="External"/>"#,
            REL_NS,
            xml_text(target)
        ),
        None => String::new(),
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
    <Relationship Id="rId2" Type="{ns}/notesSlide" Target="../notesSlides/notesSlide{n}.xml"/>{image_rel}
</Relationships>"#,
        ns = REL_NS,
        n = slide_num,
        image_rel = image_rel
    )
}

fn notes_rels(slide_num: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{ns}/notesMaster" Target="../notesMasters/notesMaster1.xml"/>
    <Relationship Id="rId2" Type="{ns}/slide" Target="../slides/slide{n}.xml"/>
</Relationships>"#,
        ns = REL_NS,
        n = slide_num
    )
}

fn xfrm(rect: &Rect, cx: u64, cy: u64) -> String {
    let (x, y, w, h) = rect.scale(cx, cy);
    format!(
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        x, y, w, h
    )
}

fn solid_fill(color: HexColor) -> String {
    format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)
}

fn text_box(id: usize, name: &str, rect: &Rect, paragraphs: &str, cx: u64, cy: u64) -> String {
    format!(
        r#"
            <p:sp>
                <p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
                <p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>
                <p:txBody><a:bodyPr wrap="square" anchor="t"><a:normAutofit/></a:bodyPr><a:lstStyle/>{paragraphs}</p:txBody>
            </p:sp>"#,
        id = id,
        name = name,
        xfrm = xfrm(rect, cx, cy),
        paragraphs = paragraphs
    )
}

fn slide_xml(
    slide: &Slide,
    regions: &RegionSet,
    image: Option<&ImagePart>,
    cx: u64,
    cy: u64,
) -> String {
    let mut shapes = String::new();
    let mut next_id = 2;

    for region in &regions.regions {
        match region.kind {
            RegionKind::Image => {
                let blip = match image {
                    Some(ImagePart::Embedded { .. }) => r#"<a:blip r:embed="rId3"/>"#,
                    Some(ImagePart::Linked { .. }) => r#"<a:blip r:link="rId3"/>"#,
                    None => continue,
                };
                shapes.push_str(&format!(
                    r#"
            <p:pic>
                <p:nvPicPr><p:cNvPr id="{id}" name="Image" descr="{descr}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr>
                <p:blipFill>{blip}<a:stretch><a:fillRect/></a:stretch></p:blipFill>
                <p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>
            </p:pic>"#,
                    id = next_id,
                    descr = xml_text(&slide.image_prompt),
                    blip = blip,
                    xfrm = xfrm(&region.rect, cx, cy)
                ));
            }
            RegionKind::Overlay { fill, transparency } => {
                let alpha = (100 - u32::from(transparency.min(100))) * 1000;
                shapes.push_str(&format!(
                    r#"
            <p:sp>
                <p:nvSpPr><p:cNvPr id="{id}" name="Overlay"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>
                <p:spPr>{xfrm}<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="{fill}"><a:alpha val="{alpha}"/></a:srgbClr></a:solidFill><a:ln><a:noFill/></a:ln></p:spPr>
            </p:sp>"#,
                    id = next_id,
                    xfrm = xfrm(&region.rect, cx, cy),
                    fill = fill,
                    alpha = alpha
                ));
            }
            RegionKind::Title { color } => {
                let paragraph = format!(
                    r#"<a:p><a:pPr algn="l"/><a:r><a:rPr lang="en-US" sz="{sz}" b="1" dirty="0">{fill}</a:rPr><a:t>{text}</a:t></a:r></a:p>"#,
                    sz = TITLE_FONT_SIZE,
                    fill = solid_fill(color),
                    text = xml_text(&slide.title)
                );
                shapes.push_str(&text_box(next_id, "Title", &region.rect, &paragraph, cx, cy));
            }
            RegionKind::Content {
                text_color,
                bullet_color,
            } => {
                let paragraphs = if slide.content.is_empty() {
                    format!(
                        r#"<a:p><a:endParaRPr lang="en-US" sz="{}" dirty="0"/></a:p>"#,
                        BODY_FONT_SIZE
                    )
                } else {
                    slide
                        .content
                        .iter()
                        .map(|point| {
                            format!(
                                r#"<a:p><a:pPr marL="342900" indent="-342900" algn="l"><a:buClr><a:srgbClr val="{bullet}"/></a:buClr><a:buFont typeface="Arial"/><a:buChar char="{glyph}"/></a:pPr><a:r><a:rPr lang="en-US" sz="{sz}" dirty="0">{fill}</a:rPr><a:t>{text}</a:t></a:r></a:p>"#,
                                bullet = bullet_color,
                                glyph = BULLET_CHAR,
                                sz = BODY_FONT_SIZE,
                                fill = solid_fill(text_color),
                                text = xml_text(point)
                            )
                        })
                        .collect::<String>()
                };
                shapes.push_str(&text_box(next_id, "Content", &region.rect, &paragraphs, cx, cy));
            }
        }
        next_id += 1;
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {ns}>
    <p:cSld>
        <p:bg><p:bgPr>{background}<a:effectLst/></p:bgPr></p:bg>
        <p:spTree>
            <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
            <p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>{shapes}
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
        ns = NS,
        background = solid_fill(regions.background),
        shapes = shapes
    )
}

fn notes_xml(notes: &str) -> String {
    let paragraphs = if notes.is_empty() {
        r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#.to_string()
    } else {
        // One paragraph per line, a trailing newline included
        notes
            .split('\n')
            .map(|line| {
                format!(
                    r#"<a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
                    xml_text(line.trim_end_matches('\r'))
                )
            })
            .collect::<String>()
    };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notes {ns}>
    <p:cSld>
        <p:spTree>
            <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
            <p:grpSpPr/>
            <p:sp>
                <p:nvSpPr><p:cNvPr id="2" name="Notes Placeholder"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr>
                <p:spPr/>
                <p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody>
            </p:sp>
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:notes>"#,
        ns = NS,
        paragraphs = paragraphs
    )
}

const CLR_MAP: &str = r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#;

const EMPTY_TREE: &str = r#"<p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree>"#;

fn slide_master_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster {ns}>
    <p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>{tree}</p:cSld>
    {clr_map}
    <p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>
</p:sldMaster>"#,
        ns = NS,
        tree = EMPTY_TREE,
        clr_map = CLR_MAP
    )
}

fn slide_layout_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout {ns} type="blank" preserve="1">
    <p:cSld name="Blank">{tree}</p:cSld>
    <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#,
        ns = NS,
        tree = EMPTY_TREE
    )
}

fn notes_master_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notesMaster {ns}>
    <p:cSld>{tree}</p:cSld>
    {clr_map}
</p:notesMaster>"#,
        ns = NS,
        tree = EMPTY_TREE,
        clr_map = CLR_MAP
    )
}

fn office_theme_xml(name: &str) -> String {
    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let line = r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#;
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="{name}">
    <a:themeElements>
        <a:clrScheme name="{name}">
            <a:dk1><a:srgbClr val="000000"/></a:dk1><a:lt1><a:srgbClr val="FFFFFF"/></a:lt1>
            <a:dk2><a:srgbClr val="1F2937"/></a:dk2><a:lt2><a:srgbClr val="F3F4F6"/></a:lt2>
            <a:accent1><a:srgbClr val="4F46E5"/></a:accent1><a:accent2><a:srgbClr val="0EA5E9"/></a:accent2>
            <a:accent3><a:srgbClr val="10B981"/></a:accent3><a:accent4><a:srgbClr val="F59E0B"/></a:accent4>
            <a:accent5><a:srgbClr val="EF4444"/></a:accent5><a:accent6><a:srgbClr val="8B5CF6"/></a:accent6>
            <a:hlink><a:srgbClr val="2563EB"/></a:hlink><a:folHlink><a:srgbClr val="7C3AED"/></a:folHlink>
        </a:clrScheme>
        <a:fontScheme name="{name}">
            <a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
            <a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
        </a:fontScheme>
        <a:fmtScheme name="{name}">
            <a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst>
            <a:lnStyleLst>{line}{line}{line}</a:lnStyleLst>
            <a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst>
            <a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst>
        </a:fmtScheme>
    </a:themeElements>
</a:theme>"#,
        name = name,
        fill = fill,
        line = line,
        effect = effect
    )
}
