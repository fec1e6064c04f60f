use std::fs;
use std::path::PathBuf;

use badgeforge::{png, render, BadgeConfig, Error, Result};
use clap::Parser;

/// Render the badge icon set and write one PNG file per size.
#[derive(Parser, Debug)]
#[command(name = "badgeforge", version, about)]
struct Args {
    /// Directory the PNG files are written into
    #[arg(long, default_value = "icons")]
    out_dir: PathBuf,

    /// Icon sizes to render, in pixels
    #[arg(long, value_delimiter = ',', default_values_t = vec![16u32, 48, 128])]
    sizes: Vec<u32>,

    /// Background color override as hex RGB, e.g. 4d9fff
    #[arg(long)]
    background: Option<String>,
}

fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(Error::ConfigError(format!(
            "expected 6 hex digits, got '{}'",
            hex
        )));
    }
    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|e| Error::ConfigError(format!("bad hex color '{}': {}", hex, e)))
    };
    Ok((parse(0..2)?, parse(2..4)?, parse(4..6)?))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = BadgeConfig::default();
    if let Some(hex) = &args.background {
        config.background = parse_hex_color(hex)?;
    }

    fs::create_dir_all(&args.out_dir)?;

    for &size in &args.sizes {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        let buffer = render(size, &config);
        let bytes = png::encode(buffer.width, buffer.height, &buffer.data);
        let path = args.out_dir.join(format!("icon{}.png", size));
        fs::write(&path, &bytes)?;
        println!("Created {} ({} bytes)", path.display(), bytes.len());
    }

    println!("Done!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_hex_color;

    #[test]
    fn parses_brand_hex() {
        assert_eq!(parse_hex_color("4d9fff").unwrap(), (77, 159, 255));
        assert_eq!(parse_hex_color("#4d9fff").unwrap(), (77, 159, 255));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(parse_hex_color("4d9f").is_err());
        assert!(parse_hex_color("zzzzzz").is_err());
    }
}
