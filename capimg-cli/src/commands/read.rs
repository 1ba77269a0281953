use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};
use capimg_core::packet::extract_description;
use capimg_core::walker::read_xmp;
use capimg_core::ReadOutcome;
use tracing::info;

pub fn execute(input: &str, raw: bool) -> Result<()> {
    let file = File::open(input).with_context(|| format!("Failed to open input file: {}", input))?;
    let mut reader = BufReader::new(file);

    match read_xmp(&mut reader)? {
        ReadOutcome::NotJpeg => bail!("Not a JPEG file: {}", input),
        ReadOutcome::NoXmp => {
            info!("No XMP segment in {}", input);
            println!("(no XMP description)");
        }
        ReadOutcome::Xmp(packet) => {
            if raw {
                println!("{}", packet);
            } else {
                match extract_description(&packet) {
                    Some(description) => println!("{}", description),
                    None => println!("(no XMP description)"),
                }
            }
        }
    }

    Ok(())
}
