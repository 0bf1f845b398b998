//! ANSI terminal rendering of the grid.

use crate::color::Rgba;
use crate::format::ColorFormat;
use crate::interpolate::Grid;

/// Text drawn on each solid color cell.
pub const CELL_BLOCK: &str = "  ";

/// How each cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOptions {
    /// Spaces after every cell within a row.
    pub cell_spacing: usize,
    /// Print the hex code as plain text instead of a colored block.
    pub show_hex: bool,
    /// Draw each block with its grid index `(slice, row, col)`.
    /// Ignored when `show_hex` is set.
    pub show_labels: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            cell_spacing: 1,
            show_hex: false,
            show_labels: false,
        }
    }
}

impl TerminalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cell_spacing(mut self, spaces: usize) -> Self {
        self.cell_spacing = spaces;
        self
    }

    #[inline]
    pub fn show_hex(mut self, enabled: bool) -> Self {
        self.show_hex = enabled;
        self
    }

    #[inline]
    pub fn show_labels(mut self, enabled: bool) -> Self {
        self.show_labels = enabled;
        self
    }

    fn cell(&self, color: Rgba, label: impl FnOnce() -> String) -> String {
        let body = if self.show_hex {
            color.to_hex()
        } else if self.show_labels {
            color.glyph(&format!(" {} ", label()))
        } else {
            color.glyph(CELL_BLOCK)
        };
        format!("{body}{}", " ".repeat(self.cell_spacing))
    }
}

/// Grid index of a cell, each coordinate zero-padded to the width of the
/// largest index: "012" at depth 6, "00_10_03" at depth 12.
fn index_label(depth: usize, slice: usize, row: usize, col: usize) -> String {
    let width = (depth - 1).to_string().len();
    if width == 1 {
        format!("{slice}{row}{col}")
    } else {
        format!("{slice:0width$}_{row:0width$}_{col:0width$}")
    }
}

/// Render every slice of `grid` as rows of terminal text.
///
/// The result is indexed `[slice][row]`, matching
/// [`export_raster`](super::export_raster).
///
/// ```
/// use cube_lerp::{export_terminal, interpolate, ColorFormat, CornerInput, TerminalOptions};
///
/// let grid = interpolate(&CornerInput::debug_cube().vectors(), 2).unwrap();
/// let planes = export_terminal(&grid, ColorFormat::Rgba, &TerminalOptions::new().show_hex(true));
/// assert_eq!(planes[1][1], "#ffff00 #ffffff ");
/// ```
pub fn export_terminal(
    grid: &Grid,
    format: ColorFormat,
    options: &TerminalOptions,
) -> Vec<Vec<String>> {
    let depth = grid.depth();
    (0..depth)
        .map(|d| {
            grid.rows(d)
                .enumerate()
                .map(|(r, row)| {
                    row.iter()
                        .enumerate()
                        .map(|(c, &cell)| {
                            options.cell(format.encode(cell), || index_label(depth, d, r, c))
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}

/// Arrangement of slices when printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneLayout {
    /// Slices printed side by side in one block.
    pub planes_per_row: usize,
    /// Spaces between neighboring slices.
    pub plane_spacing: usize,
    /// Blank lines after each block.
    pub block_spacing: usize,
}

impl Default for PlaneLayout {
    fn default() -> Self {
        Self {
            planes_per_row: 3,
            plane_spacing: 2,
            block_spacing: 1,
        }
    }
}

/// Join rendered slices into printable text, `planes_per_row` slices per
/// block. The last block holds whatever slices remain.
pub fn layout_planes(planes: &[Vec<String>], layout: &PlaneLayout) -> String {
    let gap = " ".repeat(layout.plane_spacing);
    let mut out = String::new();

    for block in planes.chunks(layout.planes_per_row.max(1)) {
        let rows = block.iter().map(Vec::len).max().unwrap_or(0);
        for row in 0..rows {
            let line: Vec<&str> = block
                .iter()
                .map(|plane| plane.get(row).map_or("", String::as_str))
                .collect();
            out.push_str(&line.join(&gap));
            out.push('\n');
        }
        out.push_str(&"\n".repeat(layout.block_spacing));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corners::CornerInput;
    use crate::interpolate::interpolate;

    fn plane(label: &str, rows: usize) -> Vec<String> {
        (0..rows).map(|r| format!("{label}{r}")).collect()
    }

    #[test]
    fn test_block_cells() {
        let grid = interpolate(&CornerInput::debug_cube().vectors(), 2).unwrap();
        let planes = export_terminal(&grid, ColorFormat::Rgba, &TerminalOptions::new());

        assert_eq!(planes.len(), 2);
        assert!(planes.iter().all(|p| p.len() == 2));
        let black = Rgba::opaque(0, 0, 0).glyph(CELL_BLOCK);
        let blue = Rgba::opaque(0, 0, 255).glyph(CELL_BLOCK);
        assert_eq!(planes[0][0], format!("{black} {blue} "));
    }

    #[test]
    fn test_hex_cells_are_plain_text() {
        let grid = interpolate(&CornerInput::debug_cube().vectors(), 3).unwrap();
        let options = TerminalOptions::new().show_hex(true).cell_spacing(0);
        let planes = export_terminal(&grid, ColorFormat::Rgba, &options);

        assert!(!planes[1][1].contains('\x1b'));
        assert_eq!(planes[0][0], "#000000#000080#0000ff");
    }

    #[test]
    fn test_labelled_cells_show_grid_index() {
        let grid = interpolate(&CornerInput::debug_cube().vectors(), 2).unwrap();
        let options = TerminalOptions::new().show_labels(true);
        let planes = export_terminal(&grid, ColorFormat::Rgba, &options);

        let red = Rgba::opaque(255, 0, 0).glyph(" 100 ");
        let white = Rgba::opaque(255, 255, 255).glyph(" 111 ");
        assert!(planes[1][0].starts_with(&red));
        assert_eq!(planes[1][1], format!("{} {} ", Rgba::opaque(255, 255, 0).glyph(" 110 "), white));
    }

    #[test]
    fn test_hex_wins_over_labels() {
        let grid = interpolate(&CornerInput::debug_cube().vectors(), 2).unwrap();
        let options = TerminalOptions::new().show_labels(true).show_hex(true);
        let planes = export_terminal(&grid, ColorFormat::Rgba, &options);
        assert_eq!(planes[0][0], "#000000 #0000ff ");
    }

    #[test]
    fn test_index_label_width() {
        assert_eq!(index_label(6, 0, 1, 2), "012");
        assert_eq!(index_label(10, 9, 9, 9), "999");
        assert_eq!(index_label(12, 0, 10, 3), "00_10_03");
        assert_eq!(index_label(1, 0, 0, 0), "000");
    }

    #[test]
    fn test_layout_groups_three_planes() {
        let planes: Vec<_> = ["a", "b", "c", "d"].iter().map(|l| plane(l, 2)).collect();
        let text = layout_planes(&planes, &PlaneLayout::default());
        assert_eq!(text, "a0  b0  c0\na1  b1  c1\n\nd0\nd1\n\n");
    }

    #[test]
    fn test_layout_two_remaining_planes() {
        let planes: Vec<_> = ["a", "b", "c", "d", "e"].iter().map(|l| plane(l, 1)).collect();
        let layout = PlaneLayout {
            plane_spacing: 1,
            block_spacing: 0,
            ..PlaneLayout::default()
        };
        assert_eq!(layout_planes(&planes, &layout), "a0 b0 c0\nd0 e0\n");
    }
}
