use termrast::prelude::*;
use termrast::render::ProjectedTriangle;
use termrast::scene::{QUAD_TRIANGLES, QUAD_VERTICES};
use termrast::screen::to_cartesian;

const WIDTH: usize = 150;
const HEIGHT: usize = 50;

fn render_quad(shader: Shader, domain: RasterDomain) -> Engine {
    let mut engine = Engine::new(WIDTH, HEIGHT, shader).unwrap();
    engine.set_domain(domain);
    engine.draw_all(&QUAD_TRIANGLES).unwrap();
    engine
}

fn projected_quad(engine: &Engine) -> Vec<ProjectedTriangle> {
    QUAD_TRIANGLES
        .iter()
        .map(|&tri| ProjectedTriangle::project(engine.projection(), tri).unwrap())
        .collect()
}

#[test]
fn quad_covers_exactly_its_footprint() {
    let engine = render_quad(Shader::Monochrome, RasterDomain::BoundingBox);
    let triangles = projected_quad(&engine);
    let frame = engine.frame();

    let mut covered = 0;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let (nx, ny) = (to_cartesian(x, WIDTH), to_cartesian(y, HEIGHT));
            let inside = triangles.iter().any(|t| t.contains(nx, ny));
            assert_eq!(frame.is_covered(x, y), inside, "pixel ({x}, {y})");
            covered += usize::from(inside);
        }
    }
    assert!(covered > WIDTH * HEIGHT / 4, "only {covered} cells covered");

    // center of the screen sits inside the quad
    assert!(frame.is_covered(WIDTH / 2, HEIGHT / 2));
    // corners of the screen lie outside the projected quad
    assert!(!frame.is_covered(0, 0));
    assert!(!frame.is_covered(WIDTH - 1, HEIGHT - 1));
}

/// Signed distances from `(x, y)` to each edge of the quad whose corners are
/// the scene vertices divided by their depth. The default frustum maps
/// camera `(x, y, z)` to screen `(x / z, y / z)`.
fn quad_edge_distances(x: f32, y: f32) -> [f32; 4] {
    let corners = QUAD_VERTICES.map(|v| (v.x / v.z, v.y / v.z));
    let mut out = [0.0; 4];
    for (i, d) in out.iter_mut().enumerate() {
        let (x0, y0) = corners[i];
        let (x1, y1) = corners[(i + 1) % 4];
        let (ex, ey) = (x1 - x0, y1 - y0);
        *d = (ex * (y - y0) - ey * (x - x0)) / (ex * ex + ey * ey).sqrt();
    }
    out
}

#[test]
fn coverage_matches_projected_corner_polygon() {
    let engine = render_quad(Shader::Monochrome, RasterDomain::BoundingBox);
    let frame = engine.frame();
    // pixels this close to an edge may fall either way
    let margin = 1e-3;

    let (mut inside, mut outside) = (0, 0);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let d = quad_edge_distances(to_cartesian(x, WIDTH), to_cartesian(y, HEIGHT));
            // the corners wind one way; accept either orientation
            if d.iter().all(|&e| e > margin) || d.iter().all(|&e| e < -margin) {
                assert!(frame.is_covered(x, y), "pixel ({x}, {y}) inside the quad is blank");
                inside += 1;
            } else if d.iter().any(|&e| e > margin) && d.iter().any(|&e| e < -margin) {
                assert!(!frame.is_covered(x, y), "pixel ({x}, {y}) outside the quad is shaded");
                outside += 1;
            }
        }
    }
    assert!(inside > WIDTH * HEIGHT / 4, "only {inside} pixels inside");
    assert!(outside > WIDTH * HEIGHT / 4, "only {outside} pixels outside");
}

#[test]
fn glyphs_vary_smoothly_across_the_surface() {
    let engine = render_quad(Shader::Monochrome, RasterDomain::BoundingBox);
    let frame = engine.frame();

    let mut seen = std::collections::BTreeSet::new();
    for (y, row) in frame.rows().enumerate() {
        for x in 0..WIDTH {
            if !frame.is_covered(x, y) {
                continue;
            }
            let glyph = row[x].glyph;
            assert!(glyph.is_ascii_digit(), "unexpected glyph {glyph:?}");
            seen.insert(glyph);

            if x + 1 < WIDTH && frame.is_covered(x + 1, y) {
                let step = (row[x + 1].glyph as i32 - glyph as i32).abs();
                assert!(step <= 1, "jump of {step} at ({x}, {y})");
            }
        }
    }
    assert!(seen.len() >= 5, "too few depth levels: {seen:?}");
}

#[test]
fn domains_render_identical_frames() {
    let boxed = render_quad(Shader::Monochrome, RasterDomain::BoundingBox);
    let full = render_quad(Shader::Monochrome, RasterDomain::FullBuffer);
    assert_eq!(boxed.frame(), full.frame());

    let boxed = render_quad(Shader::gray(), RasterDomain::BoundingBox);
    let full = render_quad(Shader::gray(), RasterDomain::FullBuffer);
    assert_eq!(boxed.frame(), full.frame());
}

#[test]
fn monochrome_output_is_bordered() {
    let engine = render_quad(Shader::Monochrome, RasterDomain::BoundingBox);
    let mut out = Vec::new();
    engine.render(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), HEIGHT + 2);
    let border = format!("+{}+", "-".repeat(WIDTH));
    assert_eq!(lines[0], border);
    assert_eq!(lines[HEIGHT + 1], border);
    for line in &lines[1..=HEIGHT] {
        assert_eq!(line.len(), WIDTH + 2);
        assert!(line.starts_with('|') && line.ends_with('|'));
    }
}

#[test]
fn color_output_has_one_line_per_row() {
    let engine = render_quad(Shader::gray(), RasterDomain::BoundingBox);
    let mut out = Vec::new();
    engine.render(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), HEIGHT);
    for line in lines {
        assert_eq!(line.matches("\x1b[0;00m").count(), WIDTH);
    }
    assert!(text.contains('█'));
}
