/// Split `0..len` into contiguous half-open ranges according to a cut mask.
///
/// Bit `len - 2 - i` of `cut_mask` set means the sequence is cut between
/// positions `i` and `i + 1`. Bits above `len - 2` are ignored.
pub fn partition_ranges(len: usize, cut_mask: u32) -> Vec<(usize, usize)> {
    if len == 0 {
        return Vec::new();
    }

    let mut ranges = Vec::with_capacity(len);
    let mut start = 0;

    for i in 0..len - 1 {
        let bit = len - 2 - i;
        if bit < u32::BITS as usize && cut_mask & (1 << bit) != 0 {
            ranges.push((start, i + 1));
            start = i + 1;
        }
    }
    ranges.push((start, len));

    ranges
}
