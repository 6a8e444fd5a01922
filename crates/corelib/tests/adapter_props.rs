use bytefeed_corelib::{ByteSink, ByteSinkAdapter, PrimitiveSink, PutError};

/// Logs every call it receives, so tests can tell range and byte paths apart.
#[derive(Debug, Default)]
struct CallLog {
    bytes: Vec<u8>,
    ranges: Vec<usize>,
}

impl ByteSink for CallLog {
    fn accept_byte(&mut self, b: u8) {
        self.bytes.push(b);
    }

    fn accept_range(&mut self, bytes: &[u8]) {
        self.ranges.push(bytes.len());
        self.bytes.extend_from_slice(bytes);
    }
}

fn adapter() -> ByteSinkAdapter<CallLog> {
    ByteSinkAdapter::new(CallLog::default())
}

#[test]
fn put_bytes_forwards_input_unchanged() {
    let input: Vec<u8> = (0..=255).collect();
    let snapshot = input.clone();
    let mut a = adapter();
    a.put_bytes(&input);
    let log = a.into_inner();
    assert_eq!(log.bytes, snapshot);
    assert_eq!(log.ranges, vec![256]);
    assert_eq!(input, snapshot);
}

#[test]
fn every_in_bounds_window_is_forwarded_exactly() {
    let data = [1u8, 2, 3, 4, 5, 6];
    for off in 0..=data.len() {
        for len in 0..=(data.len() - off) {
            let mut a = adapter();
            a.put_bytes_range(&data, off, len).unwrap();
            assert_eq!(a.into_inner().bytes, &data[off..off + len]);
        }
    }
}

#[test]
fn out_of_bounds_windows_forward_nothing() {
    let data = [0u8; 4];
    for (off, len) in [(0, 5), (3, 2), (5, 0), (1, usize::MAX)] {
        let mut a = adapter();
        let err = a.put_bytes_range(&data, off, len).unwrap_err();
        assert_eq!(err, PutError::IndexOutOfRange { off, len, size: 4 });
        let log = a.into_inner();
        assert!(log.bytes.is_empty());
        assert!(log.ranges.is_empty());
    }
}

#[test]
fn primitives_go_through_one_range_each() {
    let mut a = adapter();
    a.put_short(1).put_int(1).put_long(1).put_char('c');
    let log = a.into_inner();
    assert_eq!(log.ranges, vec![2, 4, 8, 2]);
}

#[test]
fn supplementary_char_is_two_unit_puts() {
    let mut a = adapter();
    a.put_char('\u{1f600}');
    let log = a.into_inner();
    assert_eq!(log.ranges, vec![2, 2]);
    assert_eq!(log.bytes, vec![0x3d, 0xd8, 0x00, 0xde]);
}

#[test]
fn single_byte_uses_byte_path() {
    let mut a = adapter();
    a.put_byte(0xab);
    let log = a.into_inner();
    assert_eq!(log.bytes, vec![0xab]);
    assert!(log.ranges.is_empty());
}

#[test]
fn consecutive_ints_do_not_leak() {
    let mut a = adapter();
    a.put_int(1).put_int(2);
    assert_eq!(a.into_inner().bytes, vec![1, 0, 0, 0, 2, 0, 0, 0]);
}

#[test]
fn long_after_short_has_no_residue() {
    let mut a = adapter();
    a.put_long(0x1122_3344_5566_7788).put_short(0);
    assert_eq!(
        a.into_inner().bytes,
        vec![0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0, 0]
    );
}

#[test]
fn absent_bytes_forward_nothing() {
    let mut a = adapter();
    assert!(matches!(
        a.put_maybe_bytes(None),
        Err(PutError::InvalidArgument(_))
    ));
    assert!(a.into_inner().bytes.is_empty());
}

#[test]
fn sink_is_reachable_mid_session() {
    let mut a = adapter();
    a.put_byte(1);
    assert_eq!(a.sink().bytes, vec![1]);
    a.sink_mut().bytes.clear();
    a.put_byte(2);
    assert_eq!(a.into_inner().bytes, vec![2]);
}
