use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_insert_assigns_sequential_ids() {
    let map = SourceMap::new();
    let a = map.insert("a.calc", "1 + 2");
    let b = map.insert("b.calc", "3 * 4");
    assert_ne!(a.id(), b.id());
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(a.id()).map(|f| f.id()), Some(a.id()));
}

#[test]
fn test_file_accessors() {
    let map = SourceMap::new();
    let file = map.insert("demo.calc", "12 + 34\n");
    assert_eq!(file.path(), Some("demo.calc"));
    assert_eq!(file.text(), "12 + 34\n");
    assert_eq!(file.line_count(), 2);
}

#[test]
fn test_anonymous_has_no_path() {
    let map = SourceMap::new();
    let file = map.insert_anonymous("x");
    assert_eq!(file.path(), None);
}

#[test]
fn test_span_text() {
    let map = SourceMap::new();
    let file = map.insert_anonymous("12 + 34");
    assert_eq!(file.span_text(Span::new(0, 2)), "12");
    assert_eq!(file.span_text(Span::new(5, 7)), "34");
}

#[test]
fn test_resolve_file_backed() {
    let map = SourceMap::new();
    let file = map.insert("demo.calc", "one\ntwo");
    let loc = file.location(4);
    let resolved = map.resolve(loc);
    assert!(resolved.is_known());
    assert_eq!(resolved.path(), Some("demo.calc"));
    assert_eq!((resolved.line(), resolved.column()), (2, 1));
    assert_eq!(resolved.to_string(), "demo.calc:2:1");
}

#[test]
fn test_resolve_anonymous() {
    let map = SourceMap::new();
    let file = map.insert_anonymous("1 + x");
    let resolved = map.resolve(file.location(4));
    assert_eq!(resolved.to_string(), "1:5");
}

#[test]
fn test_resolve_unknown_location() {
    let map = SourceMap::new();
    map.insert_anonymous("text");
    let resolved = map.resolve(Location::NONE);
    assert!(!resolved.is_known());
    assert_eq!(resolved.to_string(), "");
}

#[test]
fn test_resolve_matches_linear_scan() {
    let map = SourceMap::new();
    let text = "first line\nsecond longer line\n\nfourth after empty\nlast";
    let file = map.insert_anonymous(text);

    for offset in 0..text.len() as u32 {
        let mut line = 1u32;
        let mut line_start = 0usize;
        for (i, byte) in text.bytes().enumerate() {
            if i >= offset as usize {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }
        let column = text[line_start..offset as usize].chars().count() as u32 + 1;

        assert_eq!(
            file.line_col(offset),
            (line, column),
            "mismatch at offset {offset}"
        );
    }
}

#[test]
fn test_shared_map_clones_see_same_files() {
    let shared = SharedSourceMap::new();
    let clone = shared.clone();
    let file = shared.insert_anonymous("abc");
    assert_eq!(clone.len(), 1);
    assert_eq!(clone.resolve(file.location(0)).to_string(), "1:1");
}

#[test]
fn test_end_location() {
    let map = SourceMap::new();
    let file = map.insert_anonymous("ab\nc");
    let resolved = map.resolve(file.end_location());
    assert_eq!((resolved.line(), resolved.column()), (2, 2));
}
