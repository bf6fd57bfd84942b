use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_premultiplies() {
    let img = DecodedImage::decode(&png_bytes(1, 1, [100, 50, 200, 128])).unwrap();
    assert_eq!((img.width, img.height), (1, 1));
    assert_eq!(
        img.rgba8_premul,
        vec![
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn sample_outside_is_transparent() {
    let img = DecodedImage::decode(&png_bytes(2, 2, [9, 9, 9, 255])).unwrap();
    assert_eq!(img.sample(Point::new(1.5, 1.5)), [9, 9, 9, 255]);
    assert_eq!(img.sample(Point::new(-0.1, 0.0)), [0; 4]);
    assert_eq!(img.sample(Point::new(2.0, 0.0)), [0; 4]);
}

#[test]
fn site_absolute_paths_resolve_under_root() {
    let root = AssetRoot::new("/srv/site");
    assert_eq!(root.resolve("/poster.png"), PathBuf::from("/srv/site/poster.png"));
    assert_eq!(root.resolve("img/a.png"), PathBuf::from("/srv/site/img/a.png"));
}

#[test]
fn missing_or_corrupt_images_degrade_to_none() {
    let dir = std::env::temp_dir().join(format!("vitrine-assets-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("bad.png"), b"not a png").unwrap();
    std::fs::write(dir.join("ok.png"), png_bytes(3, 1, [1, 2, 3, 255])).unwrap();

    let root = AssetRoot::new(&dir);
    assert!(root.load_image("/missing.png").is_none());
    assert!(root.load_image("/bad.png").is_none());
    assert_eq!(root.load_image("/ok.png").map(|i| i.width), Some(3));
    let _ = std::fs::remove_dir_all(&dir);
}
