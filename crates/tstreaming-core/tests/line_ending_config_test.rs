// Mutates the process-wide line ending, so everything lives in one test
// inside its own test binary.

use tstreaming_core::{Endl, LineEnding, Print, line_ending, set_line_ending};

fn line(text: &str) -> Vec<u8> {
    let mut out = Vec::new();
    out.put(text).put(Endl);
    out
}

#[test]
fn set_line_ending_switches_every_terminator() {
    let initial = line_ending();
    assert_eq!(line("a"), [b"a".as_slice(), initial.as_bytes()].concat());

    set_line_ending(LineEnding::Lf);
    assert_eq!(line_ending(), LineEnding::Lf);
    assert_eq!(line("a"), b"a\n");

    set_line_ending(LineEnding::Cr);
    let mut out = Vec::new();
    assert_eq!(out.println(), 1);
    assert_eq!(out, b"\r");

    let (mut a, mut b) = (Vec::new(), Vec::new());
    a.and(&mut b).put("x").put(Endl);
    assert_eq!(a, b"x\r");
    assert_eq!(b, b"x\r");

    set_line_ending(LineEnding::CrLf);
    assert_eq!(line("z"), b"z\r\n");
}
