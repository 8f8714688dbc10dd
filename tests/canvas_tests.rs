//! Canvas persistence tests

use std::{fs, path::PathBuf};
use tinyraster::{Canvas, Color, ErrorKind, Position, Rng};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tinyraster-{}-{}.ppm", name, std::process::id()))
}

fn plain_color_round_trip(name: &str, color: Color) {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    canvas.pixels_mut().iter_mut().for_each(|c| *c = color);
    assert!(canvas.pixels().iter().all(|c| *c == color));

    let path = temp_path(name);
    canvas.save_image(&path).unwrap();
    assert!(path.exists());
    assert_eq!(
        fs::metadata(&path).unwrap().len() as usize,
        "P6\n640 480\n255\n".len() + WIDTH * HEIGHT * 3
    );

    canvas.clear(Color::default());
    assert!(canvas.pixels().iter().all(|c| *c == Color::BLACK));

    canvas.load_image(&path).unwrap();
    assert!(canvas.pixels().iter().all(|c| *c == color));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_plain_red_canvas() {
    plain_color_round_trip("red", Color::RED);
}

#[test]
fn test_plain_green_canvas() {
    plain_color_round_trip("green", Color::GREEN);
}

#[test]
fn test_plain_blue_canvas() {
    plain_color_round_trip("blue", Color::BLUE);
}

#[test]
fn test_random_pattern_round_trip() {
    let mut rng = Rng::new(0x5eed);
    let mut canvas = Canvas::new(97, 31);
    canvas
        .pixels_mut()
        .iter_mut()
        .for_each(|c| *c = Color::random(&mut rng));

    let path = temp_path("random");
    canvas.save_image(&path).unwrap();

    let mut loaded = Canvas::new(1, 1);
    loaded.load_image(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded.size(), [97, 31]);
    assert_eq!(loaded, canvas);
}

#[test]
fn test_load_adopts_file_dimensions() {
    let mut small = Canvas::new(3, 2);
    small.set_pixel(Position::new(2, 1), Color::WHITE).unwrap();
    let path = temp_path("resize");
    small.save_image(&path).unwrap();

    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    canvas.load_image(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!((canvas.width(), canvas.height()), (3, 2));
    assert_eq!(canvas.get_pixel(Position::new(2, 1)).unwrap(), Color::WHITE);
    assert!(canvas.get_pixel(Position::new(3, 1)).is_err());
}

#[test]
fn test_failed_load_leaves_canvas_unchanged() {
    let path = temp_path("truncated");
    fs::write(&path, b"P6\n4 4\n255\n\x01\x02\x03").unwrap();

    let mut canvas = Canvas::fill([5, 5], Color::GREEN);
    let err = canvas.load_image(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(canvas, Canvas::fill([5, 5], Color::GREEN));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let mut canvas = Canvas::new(2, 2);
    let err = canvas.load_image(temp_path("does-not-exist")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_unwritable_path_is_an_io_error() {
    let canvas = Canvas::new(2, 2);
    let path = std::env::temp_dir()
        .join(format!("tinyraster-missing-dir-{}", std::process::id()))
        .join("out.ppm");
    let err = canvas.save_image(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_stream_round_trip() {
    let mut rng = Rng::new(99);
    let mut canvas = Canvas::new(8, 8);
    for _ in 0..20 {
        canvas
            .set_pixel(Position::random(8, 8, &mut rng), Color::random(&mut rng))
            .unwrap();
    }

    let mut bytes = Vec::new();
    canvas.write_ppm(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"P6\n8 8\n255\n"));
    assert_eq!(&bytes[bytes.len() - 8 * 8 * 3..], canvas.as_bytes());
    assert_eq!(Canvas::read_ppm(&bytes[..]).unwrap(), canvas);
}

#[test]
fn test_oversized_header_is_a_format_error() {
    let path = temp_path("oversized");
    fs::write(&path, b"P6\n4000000000 1000000000\n255\n\x00\x00\x00").unwrap();

    let mut canvas = Canvas::fill([2, 2], Color::BLUE);
    let err = canvas.load_image(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(canvas.size(), [2, 2]);
    assert!(canvas.pixels().iter().all(|c| *c == Color::BLUE));
}
