#![no_main]
use libfuzzer_sys::fuzz_target;
use tstreaming_core::format::{print_fixed, print_hex_bits, print_number};
use tstreaming_core::num::{print_float, print_radix};
use tstreaming_core::{ArrayBuf, Null, Print};

// Runtime helpers with arbitrary parameters: no panics, and the count a
// helper returns always equals the bytes that reached the sink.
fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    let value = i64::from_le_bytes(data[..8].try_into().unwrap_or([0; 8]));
    let param = u32::from(data[8]);
    let digits = data[9];
    let scale = u64::from(u16::from_le_bytes([data[10], data[11]]));

    let mut out = Vec::new();
    let n = print_hex_bits(&mut out, value, param);
    assert_eq!(n, out.len());
    assert!(out.iter().all(u8::is_ascii_hexdigit));

    out.clear();
    let n = print_number(&mut out, value, digits, param);
    assert_eq!(n, out.len());
    assert!(out.len() >= usize::from(digits));

    out.clear();
    let n = print_fixed(&mut out, value, scale, usize::from(digits));
    assert_eq!(n, out.len());
    assert!(out.contains(&b'.'));

    out.clear();
    let n = print_radix(&mut out, value, param);
    assert_eq!(n, out.len());

    out.clear();
    let n = print_float(&mut out, f64::from_bits(value as u64), digits);
    assert_eq!(n, out.len());

    // A bounded sink must cut output short, never overflow.
    let mut small = ArrayBuf::<8>::new();
    let n = print_number(&mut small, value, digits, param);
    assert_eq!(n, small.len());
    assert!(small.len() <= 8);

    let mut null = Null;
    assert_eq!(print_radix(&mut null, value, 10), value.to_string().len());
});
