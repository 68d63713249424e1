//! Diff rendering for fixture comparison.

/// Render a diff between expected and actual output.
///
/// Formatter output is usually a single line, so besides per-line hunks the
/// first differing byte offset is reported.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::from("[identical]");
    }

    let mut out = String::new();
    out.push_str("--- expected\n");
    out.push_str("+++ actual\n");
    let offset = expected
        .bytes()
        .zip(actual.bytes())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.len().min(actual.len()));
    out.push_str(&format!(
        "@@ first difference at byte {offset} (expected {} bytes, got {}) @@\n",
        expected.len(),
        actual.len()
    ));

    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    for i in 0..expected_lines.len().max(actual_lines.len()) {
        let e = expected_lines.get(i).copied();
        let a = actual_lines.get(i).copied();
        if e != a {
            out.push_str(&format!("@@ line {} @@\n", i + 1));
            if let Some(e) = e {
                out.push_str(&format!("-{}\n", e.escape_debug()));
            }
            if let Some(a) = a {
                out.push_str(&format!("+{}\n", a.escape_debug()));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs() {
        assert_eq!(render_diff("0A", "0A"), "[identical]");
    }

    #[test]
    fn reports_first_byte_offset() {
        let d = render_diff("12.34", "12.35");
        assert!(d.contains("first difference at byte 4"));
        assert!(d.contains("-12.34\n"));
        assert!(d.contains("+12.35\n"));
    }

    #[test]
    fn prefix_mismatch_reports_length() {
        let d = render_diff("abc", "ab");
        assert!(d.contains("byte 2 (expected 3 bytes, got 2)"));
    }

    #[test]
    fn control_bytes_are_escaped() {
        let d = render_diff("x\r", "x");
        assert!(d.contains("-x\\r\n"));
    }
}
