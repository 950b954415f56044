use crate::bounds::expand;
use crate::BoundingBox;

/// Upper bound on the number of positions visited by [`from_coordinates`], not counting the
/// forced final position.
pub const MAX_SAMPLED_POSITIONS: usize = 1000;

/// The bounding box of a sequence of GeoJSON positions.
///
/// Long sequences are sampled at a fixed stride so that at most ~[`MAX_SAMPLED_POSITIONS`]
/// positions are visited, regardless of length. The first and last positions are always
/// included, but an excursion that falls between two sampled positions may be missed, so for
/// long sequences the result can be tighter than the true extent.
///
/// Returns `None` for an empty sequence.
pub fn from_coordinates<P: AsRef<[f64]>>(coordinates: &[P]) -> Option<BoundingBox> {
    let stride = coordinates.len().div_ceil(MAX_SAMPLED_POSITIONS);
    if stride > 1 {
        trace!(
            "sampling {} positions with stride {stride}",
            coordinates.len()
        );
    }

    let sampled = coordinates.iter().step_by(stride.max(1));
    // The strided pass can step over the final position.
    let last = coordinates.last().filter(|_| stride > 1);

    sampled
        .chain(last)
        .fold(None, |bbox: Option<BoundingBox>, position| {
            // Positions with fewer than two components don't move the box.
            expand(position.as_ref(), bbox.as_ref()).or(bbox)
        })
}
