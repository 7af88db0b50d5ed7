/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

/// One axis tick: its pixel position along the axis and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub pos: f64,
    pub label: String,
}

/// Builds an SVG path string (`M x y L x y ...`) through the points.
pub(crate) fn path_through(points: &[ScenePoint]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        path.push_str(&format!("{op} {:.2} {:.2}", p.x, p.y));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_moves_then_draws_lines() {
        let points = [
            ScenePoint { x: 0.0, y: 250.0 },
            ScenePoint { x: 300.0, y: 125.0 },
            ScenePoint { x: 600.0, y: 0.0 },
        ];
        assert_eq!(path_through(&points), "M 0.00 250.00 L 300.00 125.00 L 600.00 0.00");
    }

    #[test]
    fn empty_point_list_gives_empty_path() {
        assert_eq!(path_through(&[]), "");
    }
}
