//! Markdown layout of the consolidated document.
//!
//! The document has three regions in fixed order: the description header, the optional
//! directory tree, then one fenced section per included file.

use crate::types::FileSection;
use std::io::{self, Write};

pub const TREE_HEADING: &str = "#### Project Directory Tree";
pub const FENCE: &str = "```";

/// Writes the description block naming the scan target, followed by a blank line.
pub fn write_header<W: Write>(out: &mut W, target_name: &str) -> io::Result<()> {
    writeln!(
        out,
        "This markdown file consolidates the project directory structure and source code contents for analysis by a large language model."
    )?;
    writeln!(out, "Target project directory: '{}'.", target_name)?;
    writeln!(
        out,
        "Each file's content is enclosed in its own markdown code block for better clarity."
    )?;
    out.write_all(b"\n\n")
}

/// Writes the tree heading and the tree lines inside a fenced block.
pub fn write_tree<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    write!(out, "{}\n\n{}\n", TREE_HEADING, FENCE)?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    write!(out, "{}\n\n", FENCE)
}

/// Writes one `===== path =====` header and the file content in a fenced block.
pub fn write_section<W: Write>(out: &mut W, section: &FileSection) -> io::Result<()> {
    writeln!(out, "===== {} =====", section.path.display())?;
    writeln!(out, "{}", FENCE)?;
    out.write_all(section.content.as_bytes())?;
    write!(out, "\n{}\n\n", FENCE)
}
