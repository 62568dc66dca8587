//! Integration test: buffer ownership transfer across handles.
//!
//! Exercises the copy/move/swap protocol end to end: deep-copy isolation,
//! exact buffer transplant on move, donor reuse after transfer, and
//! from-buffer adoption of caller memory without copying.

use spanvec::{ScalarOrd, SpanVec};

#[test]
fn from_buffer_then_move_chain_preserves_storage() {
    let buffer: Vec<u8> = [10u32, 20, 30]
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect();
    let original_ptr = buffer.as_ptr();

    let mut first = SpanVec::from_buffer(buffer, 4).unwrap();
    first.set_value(1, 99u32);

    // Ownership hops through two more handles; the storage never moves.
    let mut second = first.take();
    let mut third = SpanVec::new(2, 8).unwrap();
    third.move_assign(&mut second);

    assert_eq!(third.as_bytes().as_ptr(), original_ptr);
    assert_eq!(third.elem_size(), 4);
    assert_eq!(third.get_value::<u32>(0), 10);
    assert_eq!(third.get_value::<u32>(1), 99);
    assert_eq!(third.get_value::<u32>(2), 30);

    // Both donors ended empty and reusable.
    for donor in [&mut first, &mut second] {
        assert_eq!(donor.len(), 0);
        assert_eq!(donor.capacity(), 0);
        donor.push_value(1u32).unwrap();
        assert_eq!(donor.get_value::<u32>(0), 1);
    }
}

#[test]
fn copy_assign_failure_free_path_is_strongly_isolated() {
    let mut source = SpanVec::from_values(&[1u32, 2, 3]).unwrap();
    source.reserve(16).unwrap();

    let mut dest = SpanVec::from_values(&[9u64]).unwrap();
    dest.copy_assign(&source).unwrap();

    // Destination adopted shape and contents, including headroom.
    assert_eq!(dest.elem_size(), 4);
    assert_eq!(dest.len(), 3);
    assert_eq!(dest.capacity(), 16);

    // Independent buffers: mutating one never shows in the other.
    dest.set_value(0, 100u32);
    source.set_value(2, 300u32);
    assert_eq!(source.get_value::<u32>(0), 1);
    assert_eq!(dest.get_value::<u32>(2), 3);
}

#[test]
fn swap_is_a_full_state_exchange() {
    let mut ints = SpanVec::from_values(&[1u32, 2]).unwrap();
    let mut floats = SpanVec::from_values(&[1.5f64, 2.5, 3.5]).unwrap();
    let ints_ptr = ints.as_bytes().as_ptr();
    let floats_ptr = floats.as_bytes().as_ptr();

    ints.swap(&mut floats);

    assert_eq!(ints.as_bytes().as_ptr(), floats_ptr);
    assert_eq!(floats.as_bytes().as_ptr(), ints_ptr);
    assert_eq!(ints.get_value::<f64>(2), 3.5);
    assert_eq!(floats.get_value::<u32>(1), 2);

    // Swapping back restores everything.
    ints.swap(&mut floats);
    assert_eq!(ints.elem_size(), 4);
    assert!(ints.eq_by(
        &SpanVec::from_values(&[1u32, 2]).unwrap(),
        &ScalarOrd::<u32>::new()
    ));
}

#[test]
fn clone_of_moved_out_handle_is_empty_but_valid() {
    let mut vec = SpanVec::from_values(&[5u32, 6]).unwrap();
    let _moved = vec.take();

    let clone = vec.try_clone().unwrap();
    assert_eq!(clone.len(), 0);
    assert_eq!(clone.capacity(), 0);
    assert_eq!(clone.elem_size(), 4);
}
