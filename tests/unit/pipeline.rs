use super::*;
use crate::assets::jokes::Joke;
use crate::encode::sink::{InMemorySink, StoredAsset};

const EXPECTED: [&str; 18] = [
    "comedian_pacing_right_1.png",
    "comedian_pacing_right_2.png",
    "comedian_pacing_right_3.png",
    "comedian_pacing_right_4.png",
    "comedian_pacing_left_1.png",
    "comedian_pacing_left_2.png",
    "comedian_pacing_left_3.png",
    "comedian_pacing_left_4.png",
    "comedian_talking_1.png",
    "comedian_talking_2.png",
    "comedian_talking_3.png",
    "comedian_laughing_1.png",
    "comedian_laughing_2.png",
    "comedian_laughing_3.png",
    "curtain_left.png",
    "curtain_right.png",
    "curtain.png",
    "dadJokes.json",
];

fn run(seed: u64) -> (InMemorySink, GenerationReport) {
    let mut sink = InMemorySink::new();
    let report = generate_into(&mut sink, &Palette::CLASSIC, seed).unwrap();
    (sink, report)
}

fn canvas_of<'a>(sink: &'a InMemorySink, name: &str) -> &'a crate::render::canvas::Canvas {
    match sink.get(name) {
        Some(StoredAsset::Image(c)) => c,
        other => panic!("{name}: expected image, got {other:?}"),
    }
}

#[test]
fn writes_every_asset_once_in_order() {
    let (sink, report) = run(DEFAULT_SEED);
    assert!(sink.began());
    let names: Vec<&str> = sink.assets().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, EXPECTED);
    assert_eq!(report.files, EXPECTED);
    assert_eq!(report.images().count(), 17);
}

#[test]
fn sprites_and_curtains_have_their_sizes() {
    let (sink, report) = run(DEFAULT_SEED);
    for name in report.images() {
        let c = canvas_of(&sink, name);
        let expected = if name.starts_with("curtain") {
            (256, 512)
        } else {
            (96, 96)
        };
        assert_eq!((c.width(), c.height()), expected, "{name}");
    }
}

#[test]
fn joke_file_alternates_setup_and_punchline() {
    let (sink, _) = run(DEFAULT_SEED);
    let Some(StoredAsset::Text(json)) = sink.get(JOKES_FILE) else {
        panic!("joke file missing");
    };
    let jokes: Vec<Joke> = serde_json::from_str(json).unwrap();
    assert_eq!(jokes.len(), 38);
    for (i, joke) in jokes.iter().enumerate() {
        assert_eq!(joke.punchline, i % 2 == 1, "record {i}");
        assert!(!joke.joke.is_empty(), "record {i}");
    }
}

#[test]
fn same_seed_same_output() {
    let (a, _) = run(42);
    let (b, _) = run(42);
    assert_eq!(a.assets(), b.assets());
}

#[test]
fn seed_only_touches_character_texture() {
    let (a, _) = run(1);
    let (b, _) = run(2);
    assert_ne!(
        canvas_of(&a, "comedian_talking_1.png"),
        canvas_of(&b, "comedian_talking_1.png")
    );
    assert_eq!(canvas_of(&a, "curtain.png"), canvas_of(&b, "curtain.png"));
    assert_eq!(a.get(JOKES_FILE), b.get(JOKES_FILE));
}

#[test]
fn default_opts_point_at_the_asset_dir() {
    let opts = GenerateOpts::default();
    assert_eq!(opts.out_dir, PathBuf::from("comedian_assets"));
    assert_eq!(opts.seed, DEFAULT_SEED);
}
