// Delta creation: the sliding-window matcher.
//
// The source is indexed once into landmark blocks (hash/table). The target
// is then scanned with a rolling NHASH-byte window; each window position
// probes the index and walks the collision chain, extending every candidate
// block forwards and backwards to the widest region that still matches.
// A copy record is emitted only when it encodes in no more bytes than the
// literal text it replaces; everything else becomes insert records.
//
// Creation never fails: the worst case for any input pair is a single
// insert record covering the whole target.

use log::debug;

use crate::checksum::checksum;
use crate::format::base64::digit_count;
use crate::format::writer::DeltaWriter;
use crate::hash::rolling::{NHASH, RollingHash};
use crate::hash::table::LandmarkIndex;

/// Cap on collision-chain entries examined per probe position. Bounds the
/// worst case to O(target_len * CHAIN_LIMIT) on adversarial inputs.
const CHAIN_LIMIT: usize = 250;

/// Punctuation bytes a copy record spends beyond its digits: the preceding
/// insert's ':' terminator, the '@', and the ','.
const COPY_PUNCTUATION: usize = 3;

/// Create a delta that transforms `source` into `target`.
///
/// The delta starts with the target size record, carries interleaved
/// copy/insert records, and ends with the checksum record.
pub fn create(source: &[u8], target: &[u8]) -> Vec<u8> {
    let mut w = DeltaWriter::with_capacity(target.len() / 4 + 64);
    w.put_int(target.len() as u64);
    w.put_byte(b'\n');

    // A source with no room for a landmark can never yield a copy; emit the
    // whole target as one literal segment.
    let Some(index) = LandmarkIndex::build(source) else {
        put_insert(&mut w, target);
        put_trailer(&mut w, target);
        return w.into_bytes();
    };
    debug!(
        "indexed {} bytes of source into {} buckets",
        source.len(),
        index.bucket_count()
    );

    let mut base = 0usize;
    'scan: while base + NHASH < target.len() {
        let mut hash = RollingHash::new(target, base);
        // Probe offset: the window currently covers target[base+i ..].
        let mut i = 0usize;
        loop {
            let mut best_len = 0usize;
            let mut best_ofst = 0usize;
            let mut best_lit = 0usize;

            let mut limit = CHAIN_LIMIT;
            let mut block = index.head(hash.value());
            while let Some(blk) = block {
                if limit == 0 {
                    break;
                }
                limit -= 1;

                // Anchor at source[i_src] / target[base+i]; widen to the
                // largest region that matches, bounded below by the current
                // record base and by the start of the source.
                let i_src = blk * NHASH;
                let probe = base + i;
                let fwd = common_prefix(&source[i_src..], &target[probe..]);
                let back = common_suffix(&source[..i_src], &target[base..probe]);
                let len = fwd + back;
                let ofst = i_src - back;
                let lit = i - back;

                // The copy must pay for its own encoding.
                let cost = digit_count(lit as u64)
                    + digit_count(len as u64)
                    + digit_count(ofst as u64)
                    + COPY_PUNCTUATION;
                if len >= cost && len > best_len {
                    best_len = len;
                    best_ofst = ofst;
                    best_lit = lit;
                }

                block = index.next(blk);
            }

            if best_len > 0 {
                if best_lit > 0 {
                    put_insert(&mut w, &target[base..base + best_lit]);
                    base += best_lit;
                }
                put_copy(&mut w, best_len, best_ofst);
                base += best_len;
                continue 'scan;
            }

            if base + i + NHASH >= target.len() {
                // No match and no room to keep probing: the rest of the
                // target is literal.
                put_insert(&mut w, &target[base..]);
                base = target.len();
                continue 'scan;
            }

            hash.slide(target[base + i + NHASH]);
            i += 1;
        }
    }

    if base < target.len() {
        put_insert(&mut w, &target[base..]);
    }
    put_trailer(&mut w, target);
    w.into_bytes()
}

/// Emit `<len>':'<bytes>`. Also used for the degenerate empty-target case,
/// which still carries a zero-length literal record.
fn put_insert(w: &mut DeltaWriter, bytes: &[u8]) {
    w.put_int(bytes.len() as u64);
    w.put_byte(b':');
    w.put_slice(bytes);
}

/// Emit `<len>'@'<ofst>','`.
fn put_copy(w: &mut DeltaWriter, len: usize, ofst: usize) {
    w.put_int(len as u64);
    w.put_byte(b'@');
    w.put_int(ofst as u64);
    w.put_byte(b',');
}

/// Emit the terminal `<checksum>';'` record.
fn put_trailer(w: &mut DeltaWriter, target: &[u8]) {
    w.put_int(u64::from(checksum(target)));
    w.put_byte(b';');
}

/// Length of the common prefix of `a` and `b`, 8 bytes at a time.
fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    let n = a.len().min(b.len());
    let mut i = 0;
    while i + 8 <= n {
        let x = u64::from_le_bytes(a[i..i + 8].try_into().unwrap())
            ^ u64::from_le_bytes(b[i..i + 8].try_into().unwrap());
        if x != 0 {
            return i + (x.trailing_zeros() / 8) as usize;
        }
        i += 8;
    }
    while i < n && a[i] == b[i] {
        i += 1;
    }
    i
}

/// Length of the common suffix of `a` and `b`.
fn common_suffix(a: &[u8], b: &[u8]) -> usize {
    let n = a.len().min(b.len());
    let mut k = 0;
    while k < n && a[a.len() - 1 - k] == b[b.len() - 1 - k] {
        k += 1;
    }
    k
}
