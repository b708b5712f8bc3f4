use std::io::{self, Write};

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{
    NodeId,
    error::{Error, Result},
    geom::Rect,
    style::Position,
    tree::LayoutTree,
};

/// Render a subtree as an indented, ANSI-colored listing of node ids,
/// status flags and rects. This is a debug function.
pub fn dump(tree: &LayoutTree, root: NodeId) -> Result<String> {
    let mut buffer = Buffer::ansi();
    dump_into(&mut buffer, tree, root)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Same as [`dump`], without color codes.
pub fn dump_plain(tree: &LayoutTree, root: NodeId) -> Result<String> {
    let mut buffer = Buffer::no_color();
    dump_into(&mut buffer, tree, root)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Fill a buffer, converting write failures into internal errors.
fn dump_into(buffer: &mut Buffer, tree: &LayoutTree, root: NodeId) -> Result<()> {
    if !tree.contains(root) {
        return Err(Error::NodeNotFound(root));
    }
    dump_node(buffer, tree, root, 0).map_err(|e| Error::Internal(e.to_string()))
}

/// Write an indented, colored label followed by a value.
fn write_field(buffer: &mut Buffer, indent: &str, label: &str, value: &str) -> io::Result<()> {
    write!(buffer, "{indent}  ")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(buffer, "{label}")?;
    buffer.reset()?;
    writeln!(buffer, " {value}")
}

/// Rect fields as `x: .., y: .., w: .., h: ..`.
fn format_rect(r: Rect) -> String {
    format!("x: {}, y: {}, w: {}, h: {}", r.x, r.y, r.width, r.height)
}

/// Walk a node subtree and emit formatted debug output.
fn dump_node(buffer: &mut Buffer, tree: &LayoutTree, node_id: NodeId, level: usize) -> io::Result<()> {
    let Some(node) = tree.node(node_id) else {
        return Ok(());
    };
    let indent = "    ".repeat(level);

    write!(buffer, "{indent}")?;
    buffer.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    write!(buffer, "{node_id:?}")?;
    buffer.reset()?;

    let style = node.style();
    let mut indicators = Vec::new();
    if node.is_dirty() {
        indicators.push(("dirty", Color::Magenta));
    }
    if !style.is_displayed() {
        indicators.push(("hidden", Color::Yellow));
    }
    if style.position == Position::Absolute {
        indicators.push(("absolute", Color::Blue));
    }
    for (i, (label, color)) in indicators.iter().enumerate() {
        write!(buffer, "{}", if i == 0 { " " } else { ", " })?;
        buffer.set_color(ColorSpec::new().set_fg(Some(*color)))?;
        write!(buffer, "{label}")?;
        buffer.reset()?;
    }
    writeln!(buffer)?;

    write_field(buffer, &indent, "rect:", &format_rect(node.rect()))?;
    if !node.children().is_empty() {
        write_field(
            buffer,
            &indent,
            "flex:",
            &format!(
                "{:?} {:?} {:?}",
                style.direction, style.justify_content, style.align_items
            ),
        )?;
    }

    for child in node.children() {
        dump_node(buffer, tree, *child, level + 1)?;
    }
    Ok(())
}
