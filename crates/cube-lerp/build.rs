use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Number of entries in each gamma table.
const LUT_SIZE: usize = 4096;

/// IEC 61966-2-1 gamma expansion: encoded sRGB to linear light
fn decode_gamma(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 gamma compression: linear light to encoded sRGB
fn encode_gamma(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

fn write_table(out: &mut impl Write, name: &str, doc: &str, f: fn(f64) -> f64) -> io::Result<()> {
    writeln!(out, "/// {doc}")?;
    writeln!(out, "/// Index: input * {}.0", LUT_SIZE - 1)?;
    writeln!(out, "pub static {name}: [f32; {LUT_SIZE}] = [")?;
    for (i, chunk) in (0..LUT_SIZE).collect::<Vec<_>>().chunks(8).enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        for &step in chunk {
            let value = f(step as f64 / (LUT_SIZE - 1) as f64);
            write!(out, "    {:.9},", value as f32)?;
        }
    }
    writeln!(out, "\n];")?;
    writeln!(out)
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").unwrap();
    let mut file = File::create(Path::new(&out_dir).join("gamma_lut.rs"))?;

    write_table(
        &mut file,
        "SRGB_TO_LINEAR",
        "Gamma expansion table (encoded sRGB to linear light)",
        decode_gamma,
    )?;
    write_table(
        &mut file,
        "LINEAR_TO_SRGB",
        "Gamma compression table (linear light to encoded sRGB)",
        encode_gamma,
    )?;

    println!("cargo::rerun-if-changed=build.rs");
    Ok(())
}
