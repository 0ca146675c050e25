use log::trace;

use super::geo;

/// Branch selector for the line-circle intersection formula.
///
/// Unlike [`f64::signum`], zero maps to `+1.0`, so a horizontal segment
/// still produces two distinct candidates.
fn signum(n: f64) -> f64 {
    if n == 0.0 { 1.0 } else { 1.0_f64.copysign(n) }
}

/// Strictly between the two bounds, in either order.
fn within(v: f64, a: f64, b: f64) -> bool { a.min(b) < v && v < a.max(b) }

/// Intersections of the infinite line through `line` with a circle of radius
/// `r` centered on the origin.
///
/// `line` must already be translated so the circle center is the origin.
/// Returns `None` for zero-length segments and for lines that miss the
/// circle.
fn line_circ_intersect(line: geo::Line, r: f64) -> Option<(geo::Point, geo::Point)> {
    let p1 = line.point1;
    let p2 = line.point2;
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let d = (dx * dx + dy * dy).sqrt();
    if d == 0.0 {
        return None;
    }
    let cross = p1.x * p2.y - p2.x * p1.y;
    let discriminant = r * r * d * d - cross * cross;
    if discriminant < 0.0 || p1 == p2 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let d2 = d * d;
    let x1 = (cross * dy + signum(dy) * dx * sqrt_d) / d2;
    let x2 = (cross * dy - signum(dy) * dx * sqrt_d) / d2;
    let y1 = (-cross * dx + dy.abs() * sqrt_d) / d2;
    let y2 = (-cross * dx - dy.abs() * sqrt_d) / d2;
    Some((geo::Point::new(x1, y1), geo::Point::new(x2, y2)))
}

/// A candidate counts as on the segment when it falls inside the segment's
/// x-range or inside its y-range. One axis is enough.
fn on_segment(pt: geo::Point, line: geo::Line) -> bool {
    let (p1, p2) = (line.point1, line.point2);
    within(pt.x, p1.x, p2.x) || within(pt.y, p1.y, p2.y)
}

/// Lookahead candidate contributed by a single segment, in world
/// coordinates.
///
/// When both intersections lie on the segment, the one further along the
/// segment (nearer its end point) wins.
fn segment_lookahead(line: geo::Line, cir: &geo::Circle) -> Option<geo::Point> {
    let local = line.translate(cir.center());
    let (c1, c2) = line_circ_intersect(local, cir.r)?;
    let end = local.point2;

    let mut target = None;
    if on_segment(c1, local) {
        target = Some(c1);
    }
    if on_segment(c2, local)
        && (target.is_none()
            || (c1.x - end.x).abs() > (c2.x - end.x).abs()
            || (c1.y - end.y).abs() > (c2.y - end.y).abs())
    {
        target = Some(c2);
    }
    target.map(|pt| geo::Point::new(pt.x + cir.x, pt.y + cir.y))
}

/// Calculates the lookahead point for a follower.
///
/// Every segment is scanned in path order and the last segment with a valid
/// intersection decides the result. If the final point of the path is
/// within the circle (inclusive), it is returned instead, so the follower
/// is steered onto the literal end of the path.
///
/// A negative radius is treated as zero.
///
/// # Arguments
///
/// * `path` - The path being followed.
/// * `cir` - A circle centered on the follower with radius = lookahead distance.
///
/// # Returns
///
/// The point the follower should move toward, or `None` when the circle
/// touches no segment and the end of the path is out of reach.
pub fn lookahead_point(path: &geo::Path, cir: geo::Circle) -> Option<geo::Point> {
    let cir = geo::Circle { r: cir.r.max(0.0), ..cir };

    let mut target = None;
    for (index, line) in path.lines().enumerate() {
        if let Some(pt) = segment_lookahead(line, &cir) {
            trace!("Segment {} intersects at {}", index, pt);
            target = Some(pt);
        }
    }

    if let Some(end) = path.last() {
        if end.dist(cir.center()) <= cir.r {
            return Some(end);
        }
    }
    target
}
