//! FixCast Demo - Broadcast Satu Packet ke Beberapa Listener
//!
//! Skenario:
//! - Build decode table (sekali, timed)
//! - Broadcast triple (x, y, z) di address 10
//! - Tiga listener: 10 (accept), 25 (reject), 10 (accept)
//! - Tunjukkan kebijakan range check untuk input out-of-range
//! - Benchmark encode/decode/pack latency

use fixcast::core::Codec;
use fixcast::protocol::{Packet, PACKET_SIZE};
use std::time::Instant;

const BROADCASTER_ADDRESS: u8 = 10;

fn main() {
    println!("🚀 FixCast Codec - Demo v0.1");
    println!("============================\n");

    // Build table sekali saat startup
    let start = Instant::now();
    let codec = Codec::build();
    println!(
        "📦 Decode table built: {} entries in {:.2} ms\n",
        codec.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    demo_broadcast(&codec);
    demo_range_check(&codec);
    benchmark_codec(&codec);

    println!("\n✅ Demo complete!");
}

fn demo_broadcast(codec: &Codec) {
    println!("📡 Broadcast Demo (address filtering)");
    println!("-------------------------------------");

    let (x, y, z) = (1.2345, -2.3456, 3.2767);
    let packet = match Packet::pack(codec, x, y, z, BROADCASTER_ADDRESS) {
        Ok(p) => p,
        Err(e) => {
            println!("  Broadcast failed: {}", e);
            return;
        }
    };

    println!(
        "  Broadcaster {} sent {} bytes: {:02X?}",
        BROADCASTER_ADDRESS,
        PACKET_SIZE,
        packet.to_bytes()
    );

    for listener in [10u8, 25, 10] {
        listen(codec, &packet, listener);
    }
    println!();
}

/// Listener side: admission control lalu decode
fn listen(codec: &Codec, packet: &Packet, listener_address: u8) {
    match packet.unpack_if_addressed(codec, listener_address) {
        Some((x, y, z)) => println!(
            "  Listener {} accepted data: {:.4}, {:.4}, {:.4}",
            listener_address, x, y, z
        ),
        None => println!("  Listener {} rejected data.", listener_address),
    }
}

fn demo_range_check(codec: &Codec) {
    println!("🛡️  Range Check Demo (no truncate-and-wrap)");
    println!("-------------------------------------------");

    // Input out-of-range: scaled value tidak muat 16-bit.
    // Truncate-and-wrap akan alias ke kode nilai lain; di sini ditolak.
    match Packet::pack(codec, 1234.5678, -2345.6789, 3456.789, BROADCASTER_ADDRESS) {
        Ok(_) => println!("  Unexpected: out-of-range input accepted"),
        Err(e) => println!("  Rejected: {}", e),
    }
    println!();
}

fn benchmark_codec(codec: &Codec) {
    println!("📊 Codec Benchmark");
    println!("------------------");

    const ITERATIONS: usize = 1_000_000;
    let values: Vec<f32> = (0..256).map(|n| (n as f32 - 128.0) / 100.0).collect();

    // Benchmark encode
    let start = Instant::now();
    let mut acc = 0u64;
    for i in 0..ITERATIONS {
        if let Ok(code) = codec.encode(values[i & 255]) {
            acc = acc.wrapping_add(code as u64);
        }
    }
    let encode_duration = start.elapsed();

    // Benchmark decode
    let start = Instant::now();
    let mut sum = 0.0f64;
    for i in 0..ITERATIONS {
        if let Some(v) = codec.decode((i & 0x7FFF) as u16) {
            sum += v as f64;
        }
    }
    let decode_duration = start.elapsed();

    // Benchmark pack + unpack roundtrip
    let start = Instant::now();
    for i in 0..ITERATIONS {
        let v = values[i & 255];
        if let Ok(packet) = Packet::pack(codec, v, -v, 0.5, BROADCASTER_ADDRESS) {
            if let Some((x, _, _)) = packet.unpack_if_addressed(codec, BROADCASTER_ADDRESS) {
                sum += x as f64;
            }
        }
    }
    let roundtrip_duration = start.elapsed();

    let encode_ns = encode_duration.as_nanos() as f64 / ITERATIONS as f64;
    let decode_ns = decode_duration.as_nanos() as f64 / ITERATIONS as f64;
    let roundtrip_ns = roundtrip_duration.as_nanos() as f64 / ITERATIONS as f64;

    println!("  Operations: {} (checksum {} / {:.1})", ITERATIONS, acc, sum);
    println!("  Encode latency:    {:.2} ns/op", encode_ns);
    println!("  Decode latency:    {:.2} ns/op", decode_ns);
    println!("  Pack+Unpack:       {:.2} ns/op", roundtrip_ns);
    println!(
        "  Encode throughput: {:.2} M ops/sec",
        ITERATIONS as f64 / encode_duration.as_secs_f64() / 1_000_000.0
    );
}
