//! Image-to-PDF composition
//!
//! One output page per source image. Each image is decoded to learn its
//! pixel dimensions, fitted onto the page by the layout engine, and drawn
//! through an Image XObject. JPEG data passes through untouched under a
//! `DCTDecode` filter; everything else is decoded to RGB8 and left to the
//! document writer's stream compression.

use crate::constants::mm_to_pt;
use crate::layout::compute_placement;
use crate::options::ConvertOptions;
use crate::types::{PageTarget, Placement, SourceImage};
use crate::Result;
use image::{DynamicImage, ImageFormat};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::builder::DocumentBuilder;

pub fn compose(images: &[SourceImage], options: &ConvertOptions) -> Result<Document> {
    let target = PageTarget::from_options(options)?;
    let mut builder = DocumentBuilder::new();

    for image in images {
        // Note: image.rotation is a preview affordance and is deliberately
        // not applied here.
        let decoded = image::load_from_memory(&image.bytes)?;
        let placement = compute_placement(decoded.width(), decoded.height(), &target)?;

        let xobject_id = add_image_xobject(&mut builder, &image.bytes, &decoded)?;
        add_page(&mut builder, &target, &placement, xobject_id);
    }

    Ok(builder.finish())
}

/// Embed the image as an Image XObject in the output document
fn add_image_xobject(
    builder: &mut DocumentBuilder,
    raw_bytes: &[u8],
    decoded: &DynamicImage,
) -> Result<ObjectId> {
    let is_jpeg = image::guess_format(raw_bytes)
        .map(|f| f == ImageFormat::Jpeg)
        .unwrap_or(false);

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(decoded.width() as i64));
    dict.set("Height", Object::Integer(decoded.height() as i64));
    dict.set("BitsPerComponent", Object::Integer(8));

    let stream = if is_jpeg {
        // JPEG streams embed as-is; the PDF reader runs the DCT decode.
        let color_space = if decoded.color().has_color() {
            b"DeviceRGB".to_vec()
        } else {
            b"DeviceGray".to_vec()
        };
        dict.set("ColorSpace", Object::Name(color_space));
        dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
        let mut stream = Stream::new(dict, raw_bytes.to_vec());
        stream.allows_compression = false;
        stream
    } else {
        dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
        Stream::new(dict, decoded.to_rgb8().into_raw())
    };

    Ok(builder.add_object(stream))
}

/// Append one page sized to the target and draw the XObject at the placement
fn add_page(
    builder: &mut DocumentBuilder,
    target: &PageTarget,
    placement: &Placement,
    xobject_id: ObjectId,
) {
    let page_width_pt = mm_to_pt(target.page_width_mm);
    let page_height_pt = mm_to_pt(target.page_height_mm);

    let content = placement_command("Im0", placement);
    let content_id = builder.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(xobject_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width_pt),
            Object::Real(page_height_pt),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    builder.append_new_page(page_dict);
}

/// Generate the content stream command to draw an image XObject.
///
/// An Image XObject spans the unit square, so the transform scales it to
/// the placement size and translates it to the placement origin.
fn placement_command(xobject_name: &str, placement: &Placement) -> String {
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        mm_to_pt(placement.width_mm),
        mm_to_pt(placement.height_mm),
        mm_to_pt(placement.x_offset_mm),
        mm_to_pt(placement.y_offset_mm),
        xobject_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_command_scales_and_translates() {
        let placement = Placement {
            width_mm: 100.0,
            height_mm: 50.0,
            x_offset_mm: 10.0,
            y_offset_mm: 20.0,
        };
        let cmd = placement_command("Im0", &placement);
        assert!(cmd.starts_with("q "));
        assert!(cmd.contains("/Im0 Do Q"));
        assert!(cmd.contains(&format!("{}", mm_to_pt(100.0))));
        assert!(cmd.contains(&format!("{}", mm_to_pt(20.0))));
    }
}
