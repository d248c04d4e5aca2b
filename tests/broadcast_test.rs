//! Broadcast Integration Test - Satu Broadcaster, Banyak Listener
//!
//! Satu broadcaster, beberapa listener dengan address berbeda.
//! Admission control harus memfilter persis berdasarkan address tag,
//! dan nilai yang diterima harus byte-exact dengan yang dikirim.
//!
//! Usage:
//!   cargo test --test broadcast_test

use fixcast::core::{Codec, EncodeError};
use fixcast::protocol::{Packet, PACKET_SIZE};

#[test]
fn test_three_listeners_accept_reject_accept() {
    let codec = Codec::build();

    let (x, y, z) = (1.2345, -2.3456, 3.2767);
    let packet = Packet::pack(&codec, x, y, z, 10).unwrap();

    // Listener 10: accept
    assert_eq!(packet.unpack_if_addressed(&codec, 10), Some((x, y, z)));
    // Listener 25: reject
    assert_eq!(packet.unpack_if_addressed(&codec, 25), None);
    // Listener 10 lagi: packet immutable, hasil sama
    assert_eq!(packet.unpack_if_addressed(&codec, 10), Some((x, y, z)));
}

#[test]
fn test_four_digit_inputs_are_out_of_range() {
    // Input dengan 4 digit sebelum koma melebihi ±3.2767: dengan
    // kebijakan range-checked, pack menolak, bukan alias via truncation.
    let codec = Codec::build();

    let result = Packet::pack(&codec, 1234.5678, -2345.6789, 3456.789, 10);
    assert_eq!(result, Err(EncodeError::UnrepresentableValue(1234.5678)));
}

#[test]
fn test_broadcast_over_wire_bytes() {
    // Simulasi interchange: serialize di sisi broadcaster, parse di
    // sisi listener, lalu admission control + decode.
    let codec = Codec::build();

    let packet = Packet::pack(&codec, 0.0001, -3.2767, 2.5, 200).unwrap();
    let wire = packet.to_bytes();
    assert_eq!(wire.len(), PACKET_SIZE);

    let received = Packet::from_bytes(&wire).unwrap();
    assert_eq!(
        received.unpack_if_addressed(&codec, 200),
        Some((0.0001, -3.2767, 2.5))
    );
    assert_eq!(received.unpack_if_addressed(&codec, 0), None);
}

#[test]
fn test_wire_format_golden_bytes() {
    // Pin layout interchange byte-for-byte (big-endian):
    //   x =  1.2345 -> scaled  12_345 = 0x3039
    //   y = -2.3456 -> scaled -23_456 = 0xA460 (two's complement)
    //   z =  3.2767 -> scaled  32_767 = 0x7FFF
    let codec = Codec::build();

    let packet = Packet::pack(&codec, 1.2345, -2.3456, 3.2767, 10).unwrap();
    let expected = [0x0Au8, 0x00, 0x30, 0x39, 0xA4, 0x60, 0x7F, 0xFF];
    assert_eq!(packet.to_bytes(), expected);

    // Arah sebaliknya: bytes literal yang sama harus decode ke triple itu
    let parsed = Packet::from_bytes(&expected).unwrap();
    assert_eq!(
        parsed.unpack_if_addressed(&codec, 10),
        Some((1.2345, -2.3456, 3.2767))
    );
}

#[test]
fn test_all_addresses_filter_correctly() {
    // Properti: untuk semua address a, accept iff a == packet.address
    let codec = Codec::build();
    let packet = Packet::pack(&codec, 1.0, 2.0, 3.0, 127).unwrap();

    for a in 0u8..=255 {
        let result = packet.unpack_if_addressed(&codec, a);
        if a == 127 {
            assert_eq!(result, Some((1.0, 2.0, 3.0)));
        } else {
            assert_eq!(result, None, "address {} should reject", a);
        }
    }
}

#[test]
fn test_many_triples_roundtrip_through_packets() {
    // Sweep nilai di seluruh representable range, lewat pack/unpack penuh
    let codec = Codec::build();

    for n in (-32_767i32..=32_767).step_by(97) {
        let v = n as f32 / 10_000.0;
        let packet = Packet::pack(&codec, v, -v, 0.0, 33).unwrap();
        let (x, y, z) = packet.unpack_if_addressed(&codec, 33).unwrap();
        assert_eq!(x, v);
        assert_eq!(y, -v);
        assert_eq!(z, 0.0);
    }
}

#[test]
fn test_one_codec_many_packets() {
    // Table dibangun sekali, dipakai ulang untuk banyak packet
    let codec = Codec::build();

    let packets: Vec<Packet> = (0..100)
        .map(|i| {
            let v = i as f32 / 1_000.0;
            Packet::pack(&codec, v, -v, v, (i % 256) as u8).unwrap()
        })
        .collect();

    for (i, packet) in packets.iter().enumerate() {
        let v = i as f32 / 1_000.0;
        assert_eq!(
            packet.unpack_if_addressed(&codec, (i % 256) as u8),
            Some((v, -v, v))
        );
    }
}
