//! Samples a small ball-and-stick scene and reports visible point counts.
//!
//! Usage:
//! ```text
//! cargo run --example sample_scene                 # default seed
//! cargo run --example sample_scene -- 42 round     # seed, bond cap type
//! RUST_LOG=geosample=trace cargo run --example sample_scene
//! ```

use geosample::geometry::{CapType, Cylinder, Sphere};
use geosample::math::Point3;
use geosample::operations::query::BoundingBox;
use geosample::sampling::SamplingParams;
use geosample::{Result, Solid};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the demo and the kernel.
    // Override with RUST_LOG (e.g. RUST_LOG=geosample=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sample_scene=info".parse().unwrap_or_default())
        .add_directive("geosample=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(7);
    let cap_type: CapType = args.next().as_deref().unwrap_or("flat").parse()?;

    let oxygen = Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.52)?;
    let hydrogen_a = Sphere::new(Point3::new(2.4, 1.6, 0.3), 1.2)?;
    let hydrogen_b = Sphere::new(Point3::new(-2.4, 1.6, -0.3), 1.2)?;

    let atoms: Vec<Solid> = vec![oxygen.into(), hydrogen_a.into(), hydrogen_b.into()];
    let bonds: Vec<Solid> = vec![
        Cylinder::new(*oxygen.center(), *hydrogen_a.center(), 0.25, cap_type)?.into(),
        Cylinder::new(*oxygen.center(), *hydrogen_b.center(), 0.25, cap_type)?.into(),
    ];

    let params = SamplingParams::default();
    let mut rng = StdRng::seed_from_u64(seed);

    for (index, solid) in atoms.iter().chain(&bonds).enumerate() {
        let samples = solid.sample(&params, &mut rng)?;
        let hidden = samples
            .iter()
            .filter(|pt| {
                atoms
                    .iter()
                    .chain(&bonds)
                    .enumerate()
                    .any(|(other, s)| other != index && s.contains(pt))
            })
            .count();
        let aabb = BoundingBox::new(solid).execute();
        info!(
            index,
            samples = samples.len(),
            hidden,
            min = %aabb.min,
            max = %aabb.max,
            "sampled solid"
        );
    }

    Ok(())
}
