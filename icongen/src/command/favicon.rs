use crate::GenEnv;
use anyhow::Result;
use icompose::ScalerOpts;
use std::fs::File;
use std::io::BufWriter;

pub const FAVICON_SIZES: [u32; 4] = [16, 32, 48, 64];

fn fill_ratio(size: u32) -> f64 {
    match size {
        0..=16 => 0.95,
        17..=32 => 0.92,
        _ => 0.88,
    }
}

pub fn favicon(env: &GenEnv) -> Result<()> {
    let docs = env.docs_dir();
    std::fs::create_dir_all(&docs)?;
    for size in FAVICON_SIZES {
        let path = docs.join(format!("favicon-{}x{}.png", size, size));
        let mut icon = BufWriter::new(File::create(&path)?);
        env.scaler()
            .write(&mut icon, ScalerOpts::with_fill_ratio(size, fill_ratio(size)))?;
        log::info!("created {} ({}x{})", path.display(), size, size);
    }

    let opts = FAVICON_SIZES
        .iter()
        .map(|&size| ScalerOpts::with_fill_ratio(size, fill_ratio(size)))
        .collect::<Vec<_>>();
    let path = docs.join("favicon.ico");
    let mut ico = BufWriter::new(File::create(&path)?);
    env.scaler().write_ico(&mut ico, &opts)?;
    log::info!("created {} ({} sizes)", path.display(), opts.len());

    // 32x32 fallback for plain <link rel="icon"> consumers
    let path = docs.join("favicon.png");
    let mut icon = BufWriter::new(File::create(&path)?);
    env.scaler()
        .write(&mut icon, ScalerOpts::with_fill_ratio(32, fill_ratio(32)))?;
    log::info!("created {} (32x32)", path.display());
    Ok(())
}
