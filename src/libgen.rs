//! Demo library generator.
//!
//! Writes a folder tree of generated PNG images that the picker can open
//! as a folder source: a handful of album subdirectories, each holding
//! procedurally colored images. Useful for trying the GUI without
//! pointing it at a real photo collection.

use anyhow::Result;
use image::{Rgba, RgbaImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const ALBUM_NAMES: &[&str] = &["Travel", "Family", "Screenshots", "Misc"];

struct Config {
    output_dir: PathBuf,
    num_albums: usize,
    images_per_album: usize,
    image_size: u32,
    seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("demo_library"),
            num_albums: 3,
            images_per_album: 40,
            image_size: 256,
            seed: 42,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a directory argument");
                }
                config.output_dir = PathBuf::from(&args[i]);
            }
            "-num_albums" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-num_albums requires an argument");
                }
                config.num_albums = args[i].parse()?;
            }
            "-num_images" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-num_images requires an argument");
                }
                config.images_per_album = args[i].parse()?;
            }
            "-size" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-size requires an argument");
                }
                config.image_size = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Demo Media Library Generator");
    println!("Usage: picker-libgen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -out <DIR>         Output directory (default: demo_library)");
    println!("  -num_albums <N>    Number of album subdirectories (default: 3)");
    println!("  -num_images <N>    Images per album (default: 40)");
    println!("  -size <PX>         Image side length in pixels (default: 256)");
    println!("  -seed <N>          Random seed (default: 42)");
    println!("  -h, -help, --help  Show this help message");
}

fn main() -> Result<()> {
    let config = parse_args()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    fs::create_dir_all(&config.output_dir)?;

    let mut total = 0usize;
    for album_idx in 0..config.num_albums {
        let name = ALBUM_NAMES
            .get(album_idx)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("Album {}", album_idx + 1));
        let album_dir = config.output_dir.join(&name);
        fs::create_dir_all(&album_dir)?;

        for image_idx in 0..config.images_per_album {
            let path = album_dir.join(format!("img_{:04}.png", image_idx));
            write_image(&path, config.image_size, &mut rng)?;
            total += 1;
        }
    }

    println!(
        "Wrote {} images across {} albums to {}",
        total,
        config.num_albums,
        config.output_dir.display()
    );
    Ok(())
}

/// Writes one gradient image with a random base hue.
fn write_image(path: &Path, size: u32, rng: &mut StdRng) -> Result<()> {
    let base = [
        rng.gen_range(40u8..220),
        rng.gen_range(40u8..220),
        rng.gen_range(40u8..220),
    ];
    let image = RgbaImage::from_fn(size, size, |x, y| {
        let fx = x as f32 / size as f32;
        let fy = y as f32 / size as f32;
        Rgba([
            (base[0] as f32 * (0.4 + 0.6 * fx)) as u8,
            (base[1] as f32 * (0.4 + 0.6 * fy)) as u8,
            (base[2] as f32 * (0.4 + 0.6 * (1.0 - fx * fy))) as u8,
            255,
        ])
    });
    image.save(path)?;
    Ok(())
}
