//! LSD radix sort over node ids, with caller-supplied scratch.
//!
//! Used by the traversal engine to keep each BFS frontier in ascending id
//! order, which makes the next level's CSR reads walk memory mostly forward.

use super::NodeId;

const RADIX: u32 = 8;
const KEY_BITS: u32 = 32;
const BUCKETS: usize = 1 << RADIX;

/// Sorts `x` ascending with a four-pass byte radix sort, scattering between
/// `x` and `scratch`.
///
/// A histogram pass that finds the input already in order short-circuits; if
/// that happens after an odd number of scatters the data is copied back so
/// the result always lands in `x`. `scratch` contents are unspecified on
/// return.
///
/// # Panics
///
/// Panics if `scratch.len() < x.len()`.
pub fn sort_nodes(x: &mut [NodeId], scratch: &mut [NodeId]) {
    assert!(
        scratch.len() >= x.len(),
        "scratch buffer smaller than input"
    );
    if x.len() < 2 {
        return;
    }

    let len = x.len();
    let mut from: &mut [NodeId] = x;
    let mut to: &mut [NodeId] = &mut scratch[..len];

    for key_offset in (0..KEY_BITS).step_by(RADIX as usize) {
        let mut offsets = [0usize; BUCKETS];
        let mut in_order = true;
        let mut prev: NodeId = 0;

        for &elem in from.iter() {
            offsets[((elem >> key_offset) & 0xff) as usize] += 1;
            if in_order {
                in_order = elem >= prev;
                prev = elem;
            }
        }

        if in_order {
            // After an odd number of scatters the data lives in the scratch
            // side; one copy restores it into the caller's buffer.
            if (key_offset / RADIX) % 2 == 1 {
                to.copy_from_slice(from);
            }
            return;
        }

        let mut watermark = 0;
        for count in &mut offsets {
            let bucket_start = watermark;
            watermark += *count;
            *count = bucket_start;
        }

        for &elem in from.iter() {
            let key = ((elem >> key_offset) & 0xff) as usize;
            to[offsets[key]] = elem;
            offsets[key] += 1;
        }

        std::mem::swap(&mut from, &mut to);
    }
}
