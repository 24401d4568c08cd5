//! 2D outlines built from cubic bezier segments, filled with lyon.

use lyon::geom::{point, CubicBezierSegment};
use lyon::math::Point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, TessellationError, VertexBuffers,
};
use smallvec::SmallVec;

pub type CubicSegment = CubicBezierSegment<f32>;

/// Closed outline assembled with `move_to` / `bezier_to`.
#[derive(Clone, Debug)]
pub struct Outline {
    cursor: Point,
    segments: SmallVec<[CubicSegment; 8]>,
}

impl Outline {
    pub fn move_to(x: f32, y: f32) -> Self {
        Self {
            cursor: point(x, y),
            segments: SmallVec::new(),
        }
    }

    pub fn bezier_to(mut self, c1: [f32; 2], c2: [f32; 2], to: [f32; 2]) -> Self {
        let seg = CubicBezierSegment {
            from: self.cursor,
            ctrl1: Point::from(c1),
            ctrl2: Point::from(c2),
            to: Point::from(to),
        };
        self.cursor = seg.to;
        self.segments.push(seg);
        self
    }

    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Sample every segment at `divisions + 1` evenly spaced parameters.
    /// Consecutive duplicates and the closing point (if it repeats the first)
    /// are dropped.
    pub fn sample(&self, divisions: usize) -> Vec<[f32; 2]> {
        let divisions = divisions.max(1);
        let mut points: Vec<Point> = Vec::with_capacity(self.segments.len() * (divisions + 1));
        for seg in &self.segments {
            for d in 0..=divisions {
                let p = seg.sample(d as f32 / divisions as f32);
                if points
                    .last()
                    .map_or(true, |last| (p - *last).square_length() > 1.0e-12)
                {
                    points.push(p);
                }
            }
        }
        if points.len() > 1 {
            let (first, last) = (points[0], points[points.len() - 1]);
            if (first - last).square_length() <= 1.0e-12 {
                points.pop();
            }
        }
        points.into_iter().map(|p| p.to_array()).collect()
    }
}

/// Triangulated interior of a closed polygon.
#[derive(Clone, Debug, Default)]
pub struct Fill {
    pub positions: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

/// Fill the polygon through `points` (implicitly closed). Fewer than three
/// points give an empty fill.
pub fn fill_polygon(points: &[[f32; 2]]) -> Result<Fill, TessellationError> {
    if points.len() < 3 {
        return Ok(Fill::default());
    }
    let mut builder = Path::builder();
    builder.begin(Point::from(points[0]));
    for p in &points[1..] {
        builder.line_to(Point::from(*p));
    }
    builder.close();
    let path = builder.build();

    let mut buffers: VertexBuffers<[f32; 2], u32> = VertexBuffers::new();
    FillTessellator::new().tessellate_path(
        &path,
        &FillOptions::default(),
        &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| v.position().to_array()),
    )?;
    Ok(Fill {
        positions: buffers.vertices,
        indices: buffers.indices,
    })
}
