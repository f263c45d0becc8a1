//! Layout of the identity slip.
//!
//! Positions are expressed in millimetres from the top-left corner of the page,
//! as on the printed slip, and converted when drawing (PDF measures from the bottom).

use crate::slip::error::SlipError;
use crate::slip::error::SlipError::CantComposeDocument;
use crate::slip::text_wrap::split_text_to_size;
use dto::record::Record;
use image::{DynamicImage, Rgb, RgbImage, Rgba};
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument, PdfLayerReference};

// A5, portrait
const PAGE_WIDTH: f32 = 148.0;
const PAGE_HEIGHT: f32 = 210.0;

const LOGO_X: f32 = -5.0;
const LOGO_Y: f32 = 0.0;
const LOGO_WIDTH: f32 = 160.0;
const LOGO_HEIGHT: f32 = 50.0;
const LOGO_DPI: f32 = 300.0;

const FONT_SIZE: f32 = 15.0;
const LINE_HEIGHT_FACTOR: f32 = 1.15;
const TEXT_X: f32 = 10.0;
const BOOTH_Y: f32 = 120.0;
const BOOTH_MAX_WIDTH: f32 = 130.0;
const MOBILE_OFFSET_PER_BOOTH_LINE: f32 = 8.0;

/// A line of text and the position of its baseline from the top of the page.
#[derive(Debug, PartialEq)]
pub struct SlipLine {
    text: String,
    y: f32,
}

impl SlipLine {
    fn new(text: String, y: f32) -> Self {
        Self { text, y }
    }
}

/// Text lines of the slip, top to bottom.
pub fn layout_lines(record: &Record) -> Vec<SlipLine> {
    let mut lines = vec![
        SlipLine::new(format!("Full Name: {}", record.full_name()), 70.0),
        SlipLine::new(format!("Serial No: {}", record.srno()), 80.0),
        SlipLine::new(format!("Age: {}", record.age()), 90.0),
        SlipLine::new(format!("Sex: {}", record.sex()), 100.0),
        SlipLine::new(format!("Card No: {}", record.card_no()), 110.0),
    ];

    let booth_lines = split_text_to_size(
        &format!("Booth No: {}", record.boot()),
        FONT_SIZE,
        BOOTH_MAX_WIDTH,
    );
    let booth_line_count = booth_lines.len();
    let line_height = FONT_SIZE * LINE_HEIGHT_FACTOR * 25.4 / 72.0;
    lines.extend(
        booth_lines
            .into_iter()
            .enumerate()
            .map(|(index, text)| SlipLine::new(text, BOOTH_Y + index as f32 * line_height)),
    );

    let mobile_y = BOOTH_Y + booth_line_count as f32 * MOBILE_OFFSET_PER_BOOTH_LINE;
    let mobile_number = record.mobile_number_on_file().unwrap_or("Not provided");
    lines.push(SlipLine::new(format!("Mobile No: {mobile_number}"), mobile_y));

    lines
}

/// Build the PDF slip of `record`, topped with `logo`.
pub fn compose_slip(record: &Record, logo: &DynamicImage) -> Result<Vec<u8>, SlipError> {
    let (document, page, layer) = PdfDocument::new(
        format!("{} Details", record.full_name()),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Slip",
    );
    let layer = document.get_page(page).get_layer(layer);
    let font = document
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|error| CantComposeDocument(error.to_string()))?;

    place_logo(&layer, logo);
    for line in layout_lines(record) {
        layer.use_text(
            line.text,
            FONT_SIZE,
            Mm(TEXT_X),
            Mm(PAGE_HEIGHT - line.y),
            &font,
        );
    }

    document
        .save_to_bytes()
        .map_err(|error| CantComposeDocument(error.to_string()))
}

/// Stretch the logo over its fixed box, whatever its size in pixels.
fn place_logo(layer: &PdfLayerReference, logo: &DynamicImage) {
    let logo = DynamicImage::ImageRgb8(flatten_on_white(logo));
    let natural_width = logo.width() as f32 / LOGO_DPI * 25.4;
    let natural_height = logo.height() as f32 / LOGO_DPI * 25.4;

    Image::from_dynamic_image(&logo).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(LOGO_X)),
            translate_y: Some(Mm(PAGE_HEIGHT - LOGO_Y - LOGO_HEIGHT)),
            scale_x: Some(LOGO_WIDTH / natural_width),
            scale_y: Some(LOGO_HEIGHT / natural_height),
            dpi: Some(LOGO_DPI),
            ..Default::default()
        },
    );
}

/// Blend the logo onto the white page, so that transparent parts stay blank.
fn flatten_on_white(logo: &DynamicImage) -> RgbImage {
    let logo = logo.to_rgba8();
    RgbImage::from_fn(logo.width(), logo.height(), |x, y| {
        let Rgba([red, green, blue, alpha]) = *logo.get_pixel(x, y);
        let alpha = u32::from(alpha);
        let blend = |channel: u8| ((u32::from(channel) * alpha + 255 * (255 - alpha)) / 255) as u8;
        Rgb([blend(red), blend(green), blend(blue)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::record::tests::{jane_doe, john_doe};
    use image::RgbaImage;

    fn texts(lines: &[SlipLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn should_lay_record_fields_out() {
        let lines = layout_lines(&john_doe());

        assert_eq!(
            vec![
                "Full Name: John Doe",
                "Serial No: 43",
                "Age: 51",
                "Sex: M",
                "Card No: XYZ987",
                "Booth No: 264 Z. P. School,, Room No. 1, Khochivada",
                "Mobile No: 9123456780",
            ],
            texts(&lines)
        );
        assert_eq!(
            vec![70.0, 80.0, 90.0, 100.0, 110.0, 120.0, 128.0],
            lines.iter().map(|line| line.y).collect::<Vec<_>>()
        );
    }

    #[test]
    fn should_print_placeholder_when_no_mobile_number() {
        let lines = layout_lines(&jane_doe());

        assert_eq!(
            Some(&SlipLine::new("Mobile No: Not provided".to_owned(), 128.0)),
            lines.last()
        );
    }

    #[test]
    fn should_move_mobile_number_below_wrapped_booth() {
        let record = jane_doe().with_boot(
            "264 Z. P. School,, Room No. 1, Khochivada, Taluka Palghar, District Palghar",
        );

        let lines = layout_lines(&record);

        let booth_lines: Vec<&SlipLine> = lines
            .iter()
            .filter(|line| line.y >= BOOTH_Y && !line.text.starts_with("Mobile No"))
            .collect();
        assert_eq!(2, booth_lines.len());
        assert!(booth_lines[1].y > booth_lines[0].y);
        assert_eq!(136.0, lines.last().unwrap().y);
    }

    #[test]
    fn should_print_transparent_logo_parts_white() {
        let mut logo = RgbaImage::from_pixel(3, 1, Rgba([0, 0, 0, 0]));
        logo.put_pixel(1, 0, Rgba([200, 30, 30, 255]));
        logo.put_pixel(2, 0, Rgba([0, 0, 0, 128]));

        let flattened = flatten_on_white(&DynamicImage::ImageRgba8(logo));

        assert_eq!(&Rgb([255, 255, 255]), flattened.get_pixel(0, 0));
        assert_eq!(&Rgb([200, 30, 30]), flattened.get_pixel(1, 0));
        assert_eq!(&Rgb([127, 127, 127]), flattened.get_pixel(2, 0));
    }

    #[test]
    fn should_keep_opaque_logo_unchanged() {
        let logo = RgbImage::from_pixel(2, 2, Rgb([19, 136, 8]));

        let flattened = flatten_on_white(&DynamicImage::ImageRgb8(logo.clone()));

        assert_eq!(logo, flattened);
    }

    #[test]
    fn should_compose_pdf_with_transparent_logo() {
        let logo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(64, 20, Rgba([0, 0, 0, 0])));

        let content = compose_slip(&jane_doe(), &logo).unwrap();

        assert!(content.starts_with(b"%PDF"));
    }

    #[test]
    fn should_compose_pdf() {
        let logo = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 20, Rgb([200, 30, 30])));

        let content = compose_slip(&jane_doe(), &logo).unwrap();

        assert!(content.starts_with(b"%PDF"));
    }
}
