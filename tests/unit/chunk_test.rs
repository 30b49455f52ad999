//! Segmenter behavior through the public API

use logdigest::analyzer::{ChunkConfig, Segmenter};

fn segmenter(size: usize, overlap: usize) -> Segmenter {
    Segmenter::new(ChunkConfig::new(size, overlap).unwrap())
}

fn texts(segmenter: &Segmenter, text: &str) -> Vec<String> {
    segmenter.split(text).map(|c| c.text.to_string()).collect()
}

// ============================================
// Coverage
// ============================================

#[test]
fn chunks_cover_text_and_overlap_exactly() {
    let text: String = (0..1234).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let seg = segmenter(500, 100);
    let chunks: Vec<_> = seg.split(&text).collect();

    assert_eq!(chunks.first().unwrap().start, 0);
    assert_eq!(chunks.last().unwrap().end(), 1234);
    for pair in chunks.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_eq!(b.start, a.start + 400);
        // The last 100 characters of one chunk open the next
        let tail: String = a.text.chars().skip(a.char_len() - 100).collect();
        let head: String = b.text.chars().take(100).collect();
        assert_eq!(tail, head);
    }
    assert!(chunks.iter().all(|c| c.char_len() <= 500));
}

#[test]
fn chunk_count_matches_split() {
    let seg = segmenter(50, 10);
    for n in [0usize, 1, 49, 50, 51, 89, 90, 91, 130, 131, 1000] {
        let text = "z".repeat(n);
        assert_eq!(seg.split(&text).count(), seg.chunk_count(n), "n = {}", n);
    }
}

#[test]
fn last_chunk_ends_at_text_end_without_overlap_tail() {
    let seg = segmenter(500, 100);
    let text = "m".repeat(900);

    let starts: Vec<usize> = seg.split(&text).map(|c| c.start).collect();

    assert_eq!(starts, vec![0, 400]);
    assert_eq!(seg.chunk_count(900), 2);
    assert_eq!(seg.chunk_count(901), 3);
}

#[test]
fn text_of_exact_size_is_one_chunk() {
    let seg = segmenter(500, 100);
    let text = "q".repeat(500);
    assert_eq!(texts(&seg, &text), vec![text]);
}

#[test]
fn empty_text_has_no_chunks() {
    assert_eq!(segmenter(500, 100).split("").count(), 0);
}

#[test]
fn zero_overlap_partitions_text() {
    let seg = segmenter(3, 0);
    assert_eq!(texts(&seg, "abcdefgh"), vec!["abc", "def", "gh"]);
}

#[test]
fn multibyte_text_is_split_on_characters() {
    let seg = segmenter(2, 1);
    assert_eq!(texts(&seg, "日本語"), vec!["日本", "本語"]);
}

// ============================================
// Configuration
// ============================================

#[test]
fn invalid_configs_are_rejected() {
    assert!(ChunkConfig::new(0, 0).is_err());
    assert!(ChunkConfig::new(10, 10).is_err());
    assert!(ChunkConfig::new(10, 11).is_err());
    assert!(ChunkConfig::new(10, 9).is_ok());
}
