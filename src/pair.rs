//! Pair identifiers.
//!
//! COLMAP keys its image-pair tables (`matches`, `two_view_geometries`) by a
//! single integer packing both image ids: `pair_id = MAX_NUM_IMAGES * id1 + id2`
//! with `id1 <= id2`.

use crate::config::MAX_NUM_IMAGES;

/// Splits a pair id into its two image ids `(image_id1, image_id2)`.
///
/// `image_id2 = pair_id mod MAX_NUM_IMAGES` and
/// `image_id1 = (pair_id - image_id2) / MAX_NUM_IMAGES`, in integer arithmetic.
/// The modulus is the floored one, so `image_id2` is never negative.
pub fn pair_id_to_image_ids(pair_id: i64) -> (i64, i64) {
    let image_id2 = pair_id.rem_euclid(MAX_NUM_IMAGES);
    let image_id1 = (pair_id - image_id2) / MAX_NUM_IMAGES;
    (image_id1, image_id2)
}

/// Packs two image ids into a pair id, smaller id first.
///
/// The pair id does not depend on argument order.
pub fn image_ids_to_pair_id(image_id1: i64, image_id2: i64) -> i64 {
    let (low, high) = if image_id1 > image_id2 {
        (image_id2, image_id1)
    } else {
        (image_id1, image_id2)
    };
    MAX_NUM_IMAGES * low + high
}
