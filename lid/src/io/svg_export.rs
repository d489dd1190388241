use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;

use polydec::geometry::SPolygon;

use crate::io::svg_util::SvgDrawOptions;

/// Renders the polygon as a single closed path, viewport fitted to its
/// bounding box. Degenerate shapes (a decimated ring can hold as little as one
/// vertex) still get a visible viewport.
pub fn polygon_to_svg(polygon: &SPolygon, options: SvgDrawOptions) -> Document {
    let bbox = polygon.bbox();
    let margin_x = (bbox.width() as f64 * options.margin_frac).max(1.0);
    let margin_y = (bbox.height() as f64 * options.margin_frac).max(1.0);

    let vbox = (
        bbox.x_min as f64 - margin_x,
        bbox.y_min as f64 - margin_y,
        bbox.width() as f64 + 2.0 * margin_x,
        bbox.height() as f64 + 2.0 * margin_y,
    );
    let stroke_width =
        (f64::min(vbox.2, vbox.3) * 0.001 * options.stroke_width_multiplier).max(0.1);

    let data = polygon
        .vertices
        .iter()
        .enumerate()
        .fold(Data::new(), |data, (i, p)| match i {
            0 => data.move_to((p.0 as f64, p.1 as f64)),
            _ => data.line_to((p.0 as f64, p.1 as f64)),
        })
        .close();

    let path = Path::new()
        .set("d", data)
        .set("fill", options.theme.fill())
        .set("stroke", options.theme.stroke())
        .set("stroke-width", stroke_width);

    Document::new().set("viewBox", vbox).add(path)
}
