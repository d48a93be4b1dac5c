use pdf_convert::*;

#[test]
fn test_default_options() {
    let options = ConvertOptions::default();
    assert_eq!(options.page_size, PageSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.margin_mm, 10.0);
    assert_eq!(options.filename, DEFAULT_FILENAME);
    assert!(options.validate().is_ok());
}

#[test]
fn test_page_size_dimensions() {
    assert_eq!(PageSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PageSize::Letter.dimensions_mm(), (215.9, 279.4));
}

#[test]
fn test_original_page_size_falls_back_to_a4() {
    assert_eq!(PageSize::Original.dimensions_mm(), PageSize::A4.dimensions_mm());
}

#[test]
fn test_landscape_swaps_dimensions() {
    let (w, h) = PageSize::A4.dimensions_with_orientation(Orientation::Landscape);
    assert_eq!((w, h), (297.0, 210.0));

    let (w, h) = PageSize::Letter.dimensions_with_orientation(Orientation::Portrait);
    assert_eq!((w, h), (215.9, 279.4));
}

#[test]
fn test_excessive_margin_is_invalid() {
    let options = ConvertOptions {
        margin_mm: 105.0, // 2 * 105 = 210 = full A4 width
        ..ConvertOptions::default()
    };
    assert!(matches!(options.validate(), Err(ConvertError::Config(_))));
}

#[test]
fn test_negative_margin_is_invalid() {
    let options = ConvertOptions {
        margin_mm: -1.0,
        ..ConvertOptions::default()
    };
    assert!(matches!(options.validate(), Err(ConvertError::Config(_))));
}

#[test]
fn test_zero_margin_is_valid() {
    let options = ConvertOptions {
        margin_mm: 0.0,
        ..ConvertOptions::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_output_filename_appends_pdf_extension() {
    let mut options = ConvertOptions::default();
    options.filename = "scan".to_string();
    assert_eq!(options.output_filename(), "scan.pdf");

    options.filename = "scan.pdf".to_string();
    assert_eq!(options.output_filename(), "scan.pdf");

    options.filename = String::new();
    assert_eq!(options.output_filename(), format!("{}.pdf", DEFAULT_FILENAME));
}

#[test]
fn test_rotation_cycles_clockwise() {
    let mut rotation = Rotation::None;
    let mut degrees = Vec::new();
    for _ in 0..5 {
        degrees.push(rotation.degrees());
        rotation = rotation.rotated_clockwise();
    }
    assert_eq!(degrees, vec![0, 90, 180, 270, 0]);
}

#[cfg(feature = "serde")]
#[test]
fn test_options_json_round_trip() {
    let options = ConvertOptions {
        page_size: PageSize::Letter,
        orientation: Orientation::Landscape,
        margin_mm: 5.0,
        filename: "report".to_string(),
    };
    let json = serde_json::to_string(&options).unwrap();
    assert!(json.contains("\"letter\""));
    assert!(json.contains("\"landscape\""));

    let parsed: ConvertOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, options);
}

#[test]
fn test_page_target_printable_area() {
    let options = ConvertOptions::default();
    let target = PageTarget::from_options(&options).unwrap();
    assert_eq!(target.printable_width_mm(), 190.0);
    assert_eq!(target.printable_height_mm(), 277.0);
}
