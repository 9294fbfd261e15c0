use super::*;
use crate::foundation::core::Canvas;

#[test]
fn frame_names_are_zero_padded() {
    let dir = Path::new("imgs");
    assert_eq!(frame_path(dir, FrameIndex(0)), dir.join("00000.jpg"));
    assert_eq!(frame_path(dir, FrameIndex(69)), dir.join("00069.jpg"));
    assert_eq!(frame_path(dir, FrameIndex(12345)), dir.join("12345.jpg"));
}

#[test]
fn writer_creates_directory_and_jpeg() {
    let dir = PathBuf::from("target")
        .join("unit_frame_writer")
        .join("nested");
    let _ = std::fs::remove_dir_all(&dir);

    let writer = FrameWriter::new(&dir).unwrap();
    assert!(dir.is_dir());

    let frame = FrameRGB::black(Canvas::new(8, 6).unwrap());
    let path = writer.write(FrameIndex(3), &frame).unwrap();
    assert_eq!(path, dir.join("00003.jpg"));

    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (8, 6));
}

#[test]
fn short_buffer_is_rejected() {
    let dir = PathBuf::from("target").join("unit_frame_writer_short");
    let writer = FrameWriter::new(&dir).unwrap();
    let frame = FrameRGB {
        width: 4,
        height: 4,
        data: vec![0; 10],
    };
    assert!(matches!(
        writer.write(FrameIndex(0), &frame),
        Err(HeartError::Encode(_))
    ));
}
