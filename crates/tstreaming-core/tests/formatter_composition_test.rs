use tstreaming_core::{
    Align, Array, ArrayBuf, Char, Dec, Displayed, Fixed, Hex, HexBits, NoFormat, Null, Number,
    Prefix, Print, Printable, Skip, TChar, TNullStr, Truncate, fmt, tstr,
};

tstr!(Label = "T=");
tstr!(Unit = "C");

fn render<T: Printable>(value: T) -> (usize, String) {
    let mut out = Vec::new();
    let n = out.print(&value);
    (n, String::from_utf8(out).unwrap())
}

#[test]
fn register_dump_line() {
    let regs = [0x00u8, 0x7F, 0x80, 0xFF];
    let mut out = Vec::new();
    out.put(fmt::<Align<6>, _>("regs:"))
        .put(fmt::<Array<Hex, b' ', 0>, _>(&regs[..]))
        .put(" n=")
        .put(fmt::<Number<3>, _>(regs.len()));
    assert_eq!(out, b"regs: 00 7F 80 FF n=004");
}

#[test]
fn sensor_reading_with_prefix_and_fixed_point() {
    let v = fmt::<Align<10, b'_'>, _>(fmt::<Prefix<Label, Fixed<16, 2>>, _>(-403i16));
    assert_eq!(render(v), (10, "T=-25.18__".into()));
}

#[test]
fn constants_in_prefix_position() {
    assert_eq!(render(fmt::<Prefix<TChar<'['>>, _>(1u8)), (2, "[1".into()));
    assert_eq!(render(fmt::<Prefix<TNullStr, Hex>, _>(1u8)), (2, "01".into()));
    assert_eq!(render((fmt::<Prefix<Unit>, _>(""), 0u8)), (2, "C0".into()));
}

#[test]
fn skip_and_truncate_cut_a_window() {
    let v = fmt::<Truncate<3>, _>(fmt::<Skip<4>, _>(fmt::<Dec, _>(1234567u32)));
    assert_eq!(render(v), (3, "234".into()));
}

#[test]
fn char_and_hex_bits() {
    let mut out = Vec::new();
    out.put(fmt::<Char, _>(b'O'))
        .put(fmt::<Char, _>(0x4Bu32))
        .put(fmt::<HexBits<4>, _>(0xABu8));
    assert_eq!(out, b"OKB");
}

#[test]
fn nested_arrays() {
    let rows: [[u8; 2]; 2] = [[1, 2], [3, 4]];
    let v = fmt::<Array<Array<NoFormat, b' ', 0>, b'/', 0>, _>(rows);
    assert_eq!(render(v), (7, "1 2/3 4".into()));
}

#[test]
fn tuples_pack_heterogeneous_values() {
    let packed = ("id", fmt::<Hex, _>(0x0Fu8), ':', 2.5f64, Displayed(-3i8));
    assert_eq!(render(packed), (11, "id0F:2.50-3".into()));
}

#[test]
fn counts_match_bytes_for_counting_sink() {
    let value = fmt::<Array<Align<4>>, _>(vec![1u16, 22, 333]);
    let expected = render(&value).1.len();
    let mut null = Null;
    assert_eq!(null.print(&value), expected);
}

#[test]
fn bounded_sink_reports_short_counts() {
    let mut buf = ArrayBuf::<5>::new();
    let n = buf.print(&fmt::<Array, _>([10u8, 20, 30]));
    assert_eq!(n, 5);
    assert_eq!(buf.as_str(), Some("10, 2"));
}

#[cfg(feature = "std")]
#[test]
fn io_print_streams_to_writer() {
    let mut sink = tstreaming_core::IoPrint::new(Vec::new());
    sink.put(fmt::<Fixed<1000, 3>, _>(65535u16)).put('V');
    assert_eq!(sink.into_inner(), b"65.535V");
}
