use cube_lerp::{ColorFormat, CornerPosition, Corners, Vector};

/// Grid coordinate label of a corner, e.g. "050" for the front-bottom-left
/// corner of a depth-6 cube.
fn corner_label(position: CornerPosition, depth: usize) -> String {
    let last = depth.saturating_sub(1);
    let (d, v, h) = position.axes();
    format!("{}{}{}", d * last, v * last, h * last)
}

fn corner_glyph(
    corners: &Corners<Vector>,
    position: CornerPosition,
    format: ColorFormat,
    depth: usize,
) -> String {
    let label = format!(" {} ", corner_label(position, depth));
    format.encode(corners[position]).glyph(&label)
}

/// Verbose description of a run: the eight working-space corners drawn as
/// labelled color blocks, front face left, back face right.
pub fn describe_input(corners: &Corners<Vector>, depth: usize, format: ColorFormat) -> String {
    use CornerPosition::*;

    let pair = |left, right| {
        format!(
            "{}{}",
            corner_glyph(corners, left, format, depth),
            corner_glyph(corners, right, format, depth)
        )
    };

    format!(
        "Interpolating {depth} times, in {format} format, between: \n{}   {}\n{}   {}\n",
        pair(FrontTopLeft, FrontTopRight),
        pair(BackTopLeft, BackTopRight),
        pair(FrontBottomLeft, FrontBottomRight),
        pair(BackBottomLeft, BackBottomRight),
    )
}
