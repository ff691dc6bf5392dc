//! Prints the cross product of two vectors.
//!
//! Without arguments the vectors `(1, 2, 3)` and `(4, 5, 6)` are used. Otherwise exactly six
//! numbers are expected: the components of the first vector followed by the components of the
//! second one.

use anyhow::{bail, Context};
use mikelib_vec::Vec3;

const DEFAULT_OPERANDS: [f64; 6] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

fn parse_operands(args: &[String]) -> anyhow::Result<(Vec3, Vec3)> {
    let components = match args.len() {
        0 => DEFAULT_OPERANDS,
        6 => {
            let mut components = [0.0; 6];
            for (component, arg) in components.iter_mut().zip(args) {
                *component = arg
                    .parse()
                    .with_context(|| format!("invalid vector component '{arg}'"))?;
            }
            components
        }
        n => bail!("expected 0 or 6 vector components, got {n}"),
    };

    let [ax, ay, az, bx, by, bz] = components;
    Ok((Vec3::new(ax, ay, az), Vec3::new(bx, by, bz)))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (a, b) = parse_operands(&args)?;

    log::debug!("Computing {a} x {b}");
    println!("{}", a.cross(&b));

    Ok(())
}
