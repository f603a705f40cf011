// Delta application: the strict-format decoder.
//
// Parses the record stream against a source buffer and reconstructs the
// target, validating every record before acting on it. Malformed or
// adversarial deltas fail with a structured error; no input can read out
// of bounds or wrap an accumulator.

use log::debug;

use crate::checksum::checksum;
use crate::error::DeltaError;
use crate::format::reader::DeltaReader;

/// Cap on the upfront output reservation. A forged size record cannot force
/// a huge allocation; the running total is still enforced per record and
/// the vector grows normally past this.
const MAX_PREALLOC: usize = 1 << 26; // 64 MiB

/// Apply `delta` to `source`, reconstructing the target.
///
/// With `verify_checksum` set, the reconstructed buffer's checksum is
/// compared against the delta's terminal record.
pub fn apply(source: &[u8], delta: &[u8], verify_checksum: bool) -> Result<Vec<u8>, DeltaError> {
    let mut r = DeltaReader::new(delta);

    let declared = to_usize(r.read_int()?)?;
    if r.read_byte()? != b'\n' {
        return Err(DeltaError::MalformedSizeTerminator);
    }

    let mut out = Vec::with_capacity(declared.min(MAX_PREALLOC));
    let mut total = 0usize;

    while r.has_more() {
        let cnt = r.read_int()?;
        match r.read_byte()? {
            b'@' => {
                let cnt = to_usize(cnt)?;
                let ofst = to_usize(r.read_int()?)?;
                // The ',' is only required when more input follows; a copy
                // record truncated right after its offset is accepted.
                if r.has_more() {
                    let term = r.read_byte()?;
                    if r.has_more() && term != b',' {
                        return Err(DeltaError::MalformedCopyTerminator);
                    }
                }
                total = total
                    .checked_add(cnt)
                    .filter(|&t| t <= declared)
                    .ok_or(DeltaError::CopyExceedsOutput)?;
                let end = ofst
                    .checked_add(cnt)
                    .filter(|&e| e <= source.len())
                    .ok_or(DeltaError::CopyExceedsSource)?;
                out.extend_from_slice(&source[ofst..end]);
            }
            b':' => {
                let cnt = to_usize(cnt)?;
                total = total
                    .checked_add(cnt)
                    .filter(|&t| t <= declared)
                    .ok_or(DeltaError::InsertExceedsOutput)?;
                if cnt > r.remaining() {
                    return Err(DeltaError::InsertExceedsDelta);
                }
                out.extend_from_slice(r.take(cnt)?);
            }
            b';' => {
                if verify_checksum {
                    let actual = checksum(&out);
                    if u64::from(actual) != cnt {
                        return Err(DeltaError::ChecksumMismatch {
                            expected: cnt,
                            actual: u64::from(actual),
                        });
                    }
                }
                if total != declared {
                    return Err(DeltaError::SizeMismatch {
                        declared,
                        actual: total,
                    });
                }
                debug!("applied {}-byte delta into {} bytes", delta.len(), out.len());
                return Ok(out);
            }
            op => return Err(DeltaError::UnknownOperator(op)),
        }
    }
    Err(DeltaError::UnterminatedDelta)
}

/// Predicted output length of `delta`: the leading size record alone.
///
/// Lets a caller allocate before applying, without decoding anything.
pub fn output_size(delta: &[u8]) -> Result<usize, DeltaError> {
    let mut r = DeltaReader::new(delta);
    let size = r.read_int()?;
    if r.read_byte()? != b'\n' {
        return Err(DeltaError::MalformedSizeTerminator);
    }
    to_usize(size)
}

#[inline]
fn to_usize(v: u64) -> Result<usize, DeltaError> {
    usize::try_from(v).map_err(|_| DeltaError::IntegerOverflow)
}
