use super::*;
use crate::foundation::core::{Rgba8, Size};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "comedian_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn sample() -> Canvas {
    let mut c = Canvas::blank(Size::new(3, 2));
    c.set_pixel(2, 1, Rgba8::opaque(10, 20, 30));
    c
}

#[test]
fn in_memory_sink_keeps_write_order() {
    let mut sink = InMemorySink::new();
    assert!(!sink.began());
    sink.begin().unwrap();
    sink.write_image("a.png", &sample()).unwrap();
    sink.write_text("b.json", "[]").unwrap();

    assert!(sink.began());
    let names: Vec<&str> = sink.assets().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["a.png", "b.json"]);
    assert_eq!(sink.get("a.png"), Some(&StoredAsset::Image(sample())));
    assert_eq!(sink.get("b.json"), Some(&StoredAsset::Text("[]".to_owned())));
    assert_eq!(sink.get("missing"), None);
}

#[test]
fn in_memory_begin_starts_over() {
    let mut sink = InMemorySink::new();
    sink.write_text("stale.json", "{}").unwrap();
    sink.begin().unwrap();
    assert!(sink.assets().is_empty());
}

#[test]
fn dir_sink_creates_nested_dir_and_writes_png() {
    let root = temp_dir("dir_sink_png");
    let dir = root.join("nested").join("out");
    let mut sink = DirSink::new(&dir);
    sink.begin().unwrap();
    assert!(dir.is_dir());

    sink.write_image("tiny.png", &sample()).unwrap();
    let img = image::open(dir.join("tiny.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(2, 1).0, [10, 20, 30, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);

    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn dir_sink_writes_text_verbatim() {
    let dir = temp_dir("dir_sink_text");
    let mut sink = DirSink::new(&dir);
    sink.begin().unwrap();
    sink.write_text("notes.json", "[\n  1\n]").unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.join("notes.json")).unwrap(),
        "[\n  1\n]"
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn dir_sink_reports_the_failing_path() {
    let root = temp_dir("dir_sink_blocked");
    std::fs::create_dir_all(&root).unwrap();
    let blocker = root.join("file");
    std::fs::write(&blocker, b"x").unwrap();

    let mut sink = DirSink::new(blocker.join("sub"));
    let err = sink.begin().unwrap_err();
    assert!(matches!(err, ComedianError::Io { ref path, .. } if path == &blocker.join("sub")));

    let err = sink.write_image("a.png", &sample()).unwrap_err();
    assert!(matches!(err, ComedianError::Io { .. }), "{err}");

    let _ = std::fs::remove_dir_all(&root);
}
