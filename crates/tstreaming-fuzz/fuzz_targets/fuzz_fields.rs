#![no_main]
use libfuzzer_sys::fuzz_target;
use tstreaming_core::format::{Truncator, print_aligned, print_array};
use tstreaming_core::{ArrayBuf, Print};

// Field shaping over arbitrary text: truncation windows never leak bytes
// outside `skip..skip + width`, and padding only ever adds pad bytes.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let skip = usize::from(data[0] % 32);
    let width = usize::from(data[1] % 32);
    let pad = data[2];
    let text = &data[3..];

    let mut out = Vec::new();
    let n = Truncator::new(&mut out, skip, Some(width)).print(text);
    assert_eq!(n, out.len());
    let start = skip.min(text.len());
    let end = skip.saturating_add(width).min(text.len());
    assert_eq!(out, &text[start..end]);

    out.clear();
    let n = print_aligned(&mut out, text, width, pad);
    assert_eq!(n, out.len());
    assert_eq!(out.len(), text.len().max(width));
    assert!(out[text.len()..].iter().all(|&b| b == pad));

    let mut small = ArrayBuf::<16>::new();
    let n = print_array(&mut small, text, data[0], data[1], |p, b| p.write(*b));
    assert_eq!(n, small.len());
});
