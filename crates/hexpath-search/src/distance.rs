use hexpath_core::Coord;

/// Euclidean (L2) distance between two cell coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f32 {
    let dr = (b.row - a.row) as f32;
    let dc = (b.col - a.col) as f32;
    (dr * dr + dc * dc).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_symmetric() {
        let pairs = [
            (Coord::new(0, 0), Coord::new(2, 2)),
            (Coord::new(1, 5), Coord::new(4, 1)),
            (Coord::new(-3, 2), Coord::new(0, 0)),
        ];
        for (a, b) in pairs {
            assert_eq!(euclidean(a, b), euclidean(b, a));
        }
    }

    #[test]
    fn euclidean_known_values() {
        assert_eq!(euclidean(Coord::new(0, 0), Coord::new(0, 0)), 0.0);
        assert_eq!(euclidean(Coord::new(0, 0), Coord::new(0, 3)), 3.0);
        assert_eq!(euclidean(Coord::new(0, 0), Coord::new(3, 4)), 5.0);
    }
}
