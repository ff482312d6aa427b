//! WINDOW_UPDATE batching for received DATA.
//!
//! Instead of acknowledging every DATA frame, wait until the effective received
//! length reaches half of the local window, then acknowledge all of it at once.

use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

/// WINDOW_UPDATE frame type (RFC 7540 Section 6.9)
pub const WINDOW_UPDATE: u8 = 0x8;

/// Flow-control counters kept by the HTTP/2 session.
///
/// Stream id 0 addresses the connection. `None` means the value is not known
/// (for example, the stream is already closed).
pub trait FlowControlAccounting {
    /// Bytes received and not yet acknowledged with WINDOW_UPDATE.
    fn effective_recv_data_length(&self, stream_id: u32) -> Option<u32>;

    /// Local window size currently advertised to the peer.
    fn effective_local_window_size(&self, stream_id: u32) -> Option<u32>;
}

/// Amount to acknowledge now, if any.
///
/// Returns `recv_length` once it reaches half of `window_size`; `None` when
/// either value is unknown or the threshold is not reached yet.
pub fn determine_window_update_transmission(
    recv_length: Option<u32>,
    window_size: Option<u32>,
) -> Option<u32> {
    let (recv_length, window_size) = (recv_length?, window_size?);
    let update = (recv_length >= window_size / 2).then_some(recv_length);
    trace!(recv_length, window_size, ?update, "window update decision");
    update
}

/// [`determine_window_update_transmission`] with values read from the session.
pub fn advise_window_update_for<A>(accounting: &A, stream_id: u32) -> Option<u32>
where
    A: FlowControlAccounting + ?Sized,
{
    determine_window_update_transmission(
        accounting.effective_recv_data_length(stream_id),
        accounting.effective_local_window_size(stream_id),
    )
}

/// Encode a WINDOW_UPDATE frame. Stream id 0 updates the connection window.
pub fn window_update_frame(stream_id: u32, increment: u32) -> Bytes {
    let mut frame = BytesMut::with_capacity(13);
    // Length: 4 bytes
    frame.put_slice(&[0, 0, 4]);
    frame.put_u8(WINDOW_UPDATE);
    // Flags: none
    frame.put_u8(0);
    frame.put_u32(stream_id & 0x7FFF_FFFF);
    frame.put_u32(increment & 0x7FFF_FFFF);
    frame.freeze()
}
