//! SVG rendering of a packing surface.
//!
//! Presentation only: nothing here touches the packing state. The view covers
//! the bounding square plus `margin` world units on each side. World y points
//! up, SVG y points down, so squares appear rotated by `-angle` on screen.

use std::fmt::Write as _;
use std::path::Path;

use crate::geom::Position;
use crate::surface::PackingSurface;

#[derive(Clone, Copy, Debug)]
pub struct RenderCfg {
    /// Width and height of the image in pixels.
    pub size_px: u32,
    /// World units of padding around the bounding square.
    pub margin: f64,
}

impl Default for RenderCfg {
    fn default() -> Self {
        Self {
            size_px: 600,
            margin: 1.0,
        }
    }
}

struct View {
    x0: f64,
    y1: f64,
    scale: f64,
}

impl View {
    #[inline]
    fn map(&self, p: Position) -> (f64, f64) {
        ((p.x - self.x0) * self.scale, (self.y1 - p.y) * self.scale)
    }

    fn points(&self, ps: &[Position]) -> String {
        ps.iter()
            .map(|&p| {
                let (x, y) = self.map(p);
                format!("{x:.3},{y:.3}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Render every placed square and the bounding square outline as an SVG document.
pub fn to_svg(surface: &PackingSurface, cfg: &RenderCfg) -> String {
    let bound = surface.minimal_bounding_square();
    let margin = cfg.margin.max(0.0);
    let extent = (bound.side_len() + 2.0 * margin).max(1e-9);
    let size = cfg.size_px.max(1);
    let view = View {
        x0: bound.min_x - margin,
        y1: bound.min_y + bound.side_len() + margin,
        scale: f64::from(size) / extent,
    };

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    if !bound.is_degenerate() {
        let _ = writeln!(
            svg,
            r#"<polygon class="bound" points="{}" fill="none" stroke="gray" stroke-dasharray="4"/>"#,
            view.points(&bound.corners())
        );
    }
    for sq in surface.squares() {
        let _ = writeln!(
            svg,
            r#"<polygon class="square" points="{}" fill="steelblue" stroke="navy"/>"#,
            view.points(&sq.corners())
        );
    }
    let _ = writeln!(
        svg,
        r#"<text x="8" y="20" font-family="monospace" font-size="14">n={} side={:.4} density={:.4}</text>"#,
        surface.len(),
        bound.side_len(),
        surface.packing_density()
    );
    svg.push_str("</svg>\n");
    svg
}

/// Write `to_svg(surface, cfg)` to `path`.
pub fn write_svg<P: AsRef<Path>>(
    path: P,
    surface: &PackingSurface,
    cfg: &RenderCfg,
) -> std::io::Result<()> {
    std::fs::write(path, to_svg(surface, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_polygon_per_square() {
        let mut env = PackingSurface::new();
        assert_eq!(env.place_square(0.0, 0.0, 0.0), Ok(true));
        assert_eq!(env.place_square(2.0, 0.0, 0.5), Ok(true));
        assert_eq!(env.place_square(-3.0, 2.0, 1.2), Ok(true));
        let svg = to_svg(&env, &RenderCfg::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="square""#).count(), 3);
        assert_eq!(svg.matches(r#"class="bound""#).count(), 1);
    }

    #[test]
    fn empty_surface_renders_without_squares() {
        let svg = to_svg(&PackingSurface::new(), &RenderCfg::default());
        assert_eq!(svg.matches("<polygon").count(), 0);
        assert!(svg.contains("n=0"));
    }

    #[test]
    fn y_axis_is_flipped() {
        let mut env = PackingSurface::new();
        assert_eq!(env.place_square(0.0, 0.0, 0.0), Ok(true));
        let cfg = RenderCfg {
            size_px: 300,
            margin: 1.0,
        };
        // View spans [-1, 2] in both axes at 100 px per unit; (0,0) maps to (100,200).
        let svg = to_svg(&env, &cfg);
        assert!(svg.contains(r#"points="100.000,200.000 100.000,100.000 200.000,100.000 200.000,200.000""#));
    }
}
