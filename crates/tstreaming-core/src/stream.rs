//! Stream terminators.

use crate::print::{Print, Printable};

/// Ends the current line with the configured line ending.
///
/// ```
/// use tstreaming_core::{Endl, Print};
///
/// let mut out = Vec::new();
/// out.put("done").put(Endl);
/// assert_eq!(out, b"done\r\n");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Endl;

impl Printable for Endl {
    #[inline]
    fn print_to<P: Print>(&self, p: &mut P) -> usize {
        p.println()
    }
}
