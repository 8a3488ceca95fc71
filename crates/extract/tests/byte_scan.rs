use extract::{scan_readable, Attempt, ByteScanStrategy, ExtractionStrategy, StrategyKind};

#[test]
fn no_null_bytes_yields_nothing() {
    assert_eq!(scan_readable(b"%PDF-1.4 plain ascii with no nulls"), "");
}

#[test]
fn big_endian_pairs() {
    assert_eq!(scan_readable(b"\x00A\x00B"), "AB");
}

#[test]
fn little_endian_pairs() {
    assert_eq!(scan_readable(b"A\x00B\x00"), "AB");
}

#[test]
fn utf16_text_inside_binary_noise() {
    let mut bytes = vec![0xff, 0xfe, 0x89, 0x13];
    for c in "Hello".bytes() {
        bytes.push(0);
        bytes.push(c);
    }
    bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(scan_readable(&bytes), "Hello");
}

#[test]
fn output_is_printable_ascii_only() {
    let bytes: Vec<u8> = (0u8..=255).flat_map(|b| [b, 0]).collect();
    let text = scan_readable(&bytes);
    assert!(!text.is_empty());
    assert!(text.bytes().all(|b| (32..=126).contains(&b)));
}

#[test]
fn strategy_is_always_available() -> anyhow::Result<()> {
    let strategy = ByteScanStrategy;
    assert_eq!(strategy.kind(), StrategyKind::ByteScan);
    match strategy.attempt(b"H\x00i\x00")? {
        Attempt::Extracted(pages) => {
            assert_eq!(pages.len(), 1);
            assert_eq!(strategy.render(&pages), "Hi");
        }
        Attempt::Unavailable => panic!("byte scan must never be unavailable"),
    }
    Ok(())
}
