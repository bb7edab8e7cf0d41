use image::{Rgba, RgbaImage};
use std::sync::Arc;
use teestudio_core::{GarmentColor, GarmentPart, RgbaColor};
use teestudio_designer::{
    AssetLoader, Bitmap, DesignEditor, ExportFormat, ExportOptions, MemoryAssetLoader, ShapeType,
};
use teestudio_settings::EditorConfig;

const RED: RgbaColor = RgbaColor::rgb(220, 20, 20);

fn editor(loader: MemoryAssetLoader) -> DesignEditor {
    let loader: Arc<dyn AssetLoader> = Arc::new(loader);
    DesignEditor::new(
        EditorConfig::default(),
        loader,
        GarmentPart::Front,
        GarmentColor::White,
    )
    .unwrap()
}

fn rgb(px: &Rgba<u8>) -> [u8; 3] {
    [px[0], px[1], px[2]]
}

#[test]
fn test_png_export() {
    let ed = editor(MemoryAssetLoader::new());
    let out = ed.export(&ExportOptions::default()).unwrap();
    assert_eq!(out.suggested_name, "tshirt-front.png");
    assert_eq!((out.width, out.height), (600, 700));
    assert!(out.bytes.starts_with(&[0x89, b'P', b'N', b'G']));

    let decoded = image::load_from_memory(&out.bytes).unwrap().to_rgba8();
    assert_eq!(rgb(decoded.get_pixel(0, 0)), [0x2D, 0x37, 0x48]);
}

#[test]
fn test_jpeg_export_uses_active_part_name() {
    let mut ed = editor(MemoryAssetLoader::new());
    ed.set_part(GarmentPart::RightSleeve);
    let out = ed
        .export(&ExportOptions {
            format: ExportFormat::Jpeg { quality: 90 },
            include_guides: false,
        })
        .unwrap();
    assert_eq!(out.suggested_name, "tshirt-right-sleeve.jpg");
    assert_eq!(out.format.mime_type(), "image/jpeg");
    assert!(out.bytes.starts_with(&[0xFF, 0xD8]));
}

#[test]
fn test_render_draws_visible_elements_only() {
    let mut ed = editor(MemoryAssetLoader::new());
    let id = ed.add_shape(ShapeType::Rectangle, RED).unwrap();

    let frame = ed.render().unwrap();
    assert_eq!(rgb(frame.get_pixel(300, 340)), [220, 20, 20]);

    ed.set_visible(id, false);
    let frame = ed.render().unwrap();
    assert_eq!(rgb(frame.get_pixel(300, 340)), [0x2D, 0x37, 0x48]);
}

#[test]
fn test_elements_of_other_parts_are_not_drawn() {
    let mut ed = editor(MemoryAssetLoader::new());
    ed.add_shape(ShapeType::Rectangle, RED);
    ed.set_part(GarmentPart::Back);
    let frame = ed.render().unwrap();
    assert_eq!(rgb(frame.get_pixel(300, 340)), [0x2D, 0x37, 0x48]);
}

#[test]
fn test_guides_excluded_from_export_by_default() {
    let mut ed = editor(MemoryAssetLoader::new());
    ed.add_shape(ShapeType::Rectangle, RED);

    let plain = ed.export(&ExportOptions::default()).unwrap();
    let guided = ed
        .export(&ExportOptions {
            include_guides: true,
            ..Default::default()
        })
        .unwrap();
    assert_ne!(plain.bytes, guided.bytes);

    let plain = image::load_from_memory(&plain.bytes).unwrap().to_rgba8();
    let guided = image::load_from_memory(&guided.bytes).unwrap().to_rgba8();
    // Bottom-right resize handle sits on the element corner.
    assert_eq!(rgb(plain.get_pixel(366, 406)), [0x2D, 0x37, 0x48]);
    assert_ne!(rgb(guided.get_pixel(366, 406)), [0x2D, 0x37, 0x48]);
}

#[tokio::test]
async fn test_missing_artwork_renders_placeholder() {
    let mut ed = editor(MemoryAssetLoader::new());
    assert!(ed.load_artwork().await.is_missing());
    let frame = ed.render().unwrap();
    assert_eq!(rgb(frame.get_pixel(130, 150)), [0x4A, 0x55, 0x68]);
}

#[tokio::test]
async fn test_loaded_artwork_is_scaled_and_centred() {
    let shirt = Bitmap::from_rgba(RgbaImage::from_pixel(60, 70, Rgba([240, 240, 240, 255]))).unwrap();
    let mut ed = editor(MemoryAssetLoader::new().with("/assets/white/front.png", shirt));
    assert!(!ed.load_artwork().await.is_missing());

    let out = ed.export(&ExportOptions::default()).unwrap();
    let frame = image::load_from_memory(&out.bytes).unwrap().to_rgba8();
    let centre = rgb(frame.get_pixel(300, 350));
    assert!(centre.iter().all(|c| c.abs_diff(240) <= 2), "{:?}", centre);
    assert_eq!(rgb(frame.get_pixel(5, 5)), [0x2D, 0x37, 0x48]);
}
