// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: stage layer data for a simulated device upload.
//!
//! Demonstrates the intended deployment shape: an arena sized from
//! configuration hands out staging buffers for each layer's data, host
//! code fills them by coordinate, and a bulk-copy collaborator drains
//! them through the slice view.
//!
//! ```bash
//! cargo run -p buffer-arena --example staging_demo
//! ```

use buffer_arena::{ArenaConfig, BufferArena};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt().with_env_filter("debug").init();

    let config = ArenaConfig::from_toml(
        r#"
budget = "4M"
reuse_storage = true
"#,
    )?;
    let arena = BufferArena::with_config(&config)?;
    println!("Arena budget: {}\n", arena.budget());

    // Layer-shaped staging buffers for a small dense network.
    let layer_extents = [(784usize, 128usize), (128, 128), (128, 10)];

    println!("{:<12} {:>10} {:>12}", "Layer", "Extent", "Bytes");
    println!("{}", "-".repeat(38));

    let mut device = Vec::new();
    for (i, (dim_x, dim_y)) in layer_extents.iter().enumerate() {
        let mut staging = arena.allocate(*dim_x, *dim_y)?;

        // Host-side fill by coordinate: x ranges over dim_y, y over dim_x.
        for x in 0..staging.dim_y() {
            for y in 0..staging.dim_x() {
                staging.set(x, y, (i + 1) as f32 * 0.01);
            }
        }

        // Bulk copy to the "device" through the bounded view.
        device.push(staging.as_slice().to_vec());

        println!(
            "{:<12} {:>10} {:>12}",
            format!("layer.{i}"),
            format!("{}", staging.extent()),
            staging.size_bytes(),
        );
        // `staging` drops here; its storage returns to the arena and the
        // next layer of the same extent would reuse it.
    }

    println!("\nUploaded {} layers to the device.", device.len());
    println!("Live bytes after upload: {}", arena.live_bytes());
    println!("Arena: {}", arena.stats().summary());

    Ok(())
}
