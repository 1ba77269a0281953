use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use capimg_core::description::read_description;
use capimg_core::packet::build_packet;
use capimg_core::walker::write_xmp;
use capimg_core::WriteOutcome;
use tempfile::NamedTempFile;
use tracing::info;

/// Write a description into a JPEG.
///
/// The rewrite is staged through a temp file in the destination
/// directory and persisted atomically, then verified by re-reading; the
/// original is never partially overwritten.
pub fn execute(input: &str, description: &str, output: Option<&str>) -> Result<()> {
    let packet = build_packet(description);

    let dest = output.unwrap_or(input);
    let dest_dir = Path::new(dest).parent().filter(|p| !p.as_os_str().is_empty());

    let file = File::open(input).with_context(|| format!("Failed to open input file: {}", input))?;
    let mut reader = BufReader::new(file);

    let mut staged = match dest_dir {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new(),
    }
    .context("Failed to create staging file")?;

    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        match write_xmp(&mut reader, &mut writer, &packet)? {
            WriteOutcome::NotJpeg => bail!("Not a JPEG file: {}", input),
            WriteOutcome::Rewritten => {}
        }
        writer.flush()?;
    }

    staged
        .persist(dest)
        .with_context(|| format!("Failed to replace {}", dest))?;

    verify(dest, description)?;

    info!("Wrote description to {}", dest);
    println!("Description written to {}", dest);
    Ok(())
}

/// Re-read the destination and compare; some writers downstream strip
/// metadata, and a silent mismatch must not pass as success.
fn verify(dest: &str, description: &str) -> Result<()> {
    let file = File::open(dest).with_context(|| format!("Failed to reopen {}", dest))?;
    let mut reader = BufReader::new(file);
    let read_back = read_description(&mut reader)?;

    let expected = {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    if read_back != expected {
        bail!("Verification failed: {} does not read back the written description", dest);
    }
    Ok(())
}
