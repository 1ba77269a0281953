use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use capimg_core::walker::strip_xmp;
use capimg_core::WriteOutcome;
use tempfile::NamedTempFile;
use tracing::info;

pub fn execute(input: &str, output: Option<&str>) -> Result<()> {
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
        match strip_xmp(&mut reader, &mut writer)? {
            WriteOutcome::NotJpeg => bail!("Not a JPEG file: {}", input),
            WriteOutcome::Rewritten => {}
        }
        writer.flush()?;
    }

    staged
        .persist(dest)
        .with_context(|| format!("Failed to replace {}", dest))?;

    info!("Stripped XMP segments from {}", input);
    println!("XMP segments removed: {}", dest);
    Ok(())
}
