use std::fs;

use anyhow::{bail, Context, Result};
use capimg_core::walker::list_segments;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize)]
struct SegmentRecord {
    offset: usize,
    marker: String,
    name: String,
    payload_len: usize,
}

pub fn execute(input: &str, json: bool, output: Option<&str>) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    info!("Inspecting {} ({} bytes)", input, data.len());

    let segments = match list_segments(&data)? {
        Some(segments) => segments,
        None => bail!("Not a JPEG file: {}", input),
    };

    // Bytes after the last enumerated segment: entropy-coded data + EOI.
    let tail_start = segments
        .last()
        .map(|s| s.offset + s.total_size())
        .unwrap_or(data.len());
    let tail_len = data.len().saturating_sub(tail_start);

    let records: Vec<SegmentRecord> = segments
        .iter()
        .map(|s| SegmentRecord {
            offset: s.offset,
            marker: format!("0x{:02X}", s.marker),
            name: s.name().to_string(),
            payload_len: s.payload_len,
        })
        .collect();

    if json || output.is_some() {
        let rendered =
            serde_json::to_string_pretty(&records).context("Failed to serialize segments")?;
        if let Some(output_path) = output {
            fs::write(output_path, rendered)
                .with_context(|| format!("Failed to write output file: {}", output_path))?;
            info!("Segment listing written to: {}", output_path);
        } else {
            println!("{}", rendered);
        }
    } else {
        println!("\n=== Segments of {} ===", input);
        for record in &records {
            println!(
                "{:>8}  {}  {:<7} {} bytes",
                record.offset, record.marker, record.name, record.payload_len
            );
        }
        println!("\nEntropy-coded tail: {} bytes", tail_len);
    }

    Ok(())
}
