//! Output rendering and diagnostics
//!
//! - `style` - The single-line renderings of the path list
//! - `diagnostics` - Warning and error lines on standard error

mod diagnostics;
mod style;

pub use diagnostics::Diagnostics;
pub use style::{OutputStyle, StyleSelection, style_list};

use std::io::{self, Write};

/// Write the rendered result as the single line of normal output.
pub fn write_line<W: Write>(out: &mut W, rendered: &[u8]) -> io::Result<()> {
    out.write_all(rendered)?;
    out.write_all(b"\n")?;
    out.flush()
}
