use std::{
    error::Error,
    io::{BufWriter, Write},
};

use byteorder::{LittleEndian, WriteBytesExt};
use indicatif::{ProgressBar, ProgressStyle};
use nalgebra::{vector, Vector3};
use rayon::prelude::*;

use crate::{
    config::{Config, GeneratorConfig},
    file::open_create_file,
    header::generate_header,
};

mod gradient;
mod noise;
mod solid;
mod sphere;

/// Generates one sample at a time, at any location
pub trait SampleGenerator: Sync {
    fn sample_at(&self, coords: Vector3<u32>) -> u16;
}

pub fn get_sample_generator(config: &Config) -> Box<dyn SampleGenerator> {
    match config.generator {
        GeneratorConfig::Solid { sample } => {
            Box::new(solid::SolidGenerator::new(config.dims, sample))
        }
        GeneratorConfig::Sphere { sample } => {
            Box::new(sphere::SphereGenerator::new(config.dims, sample))
        }
        GeneratorConfig::Gradient { sample } => {
            Box::new(gradient::GradientGenerator::new(config.dims, sample))
        }
        GeneratorConfig::Noise { max } => {
            let seed = config.seed.unwrap_or_else(|| fastrand::u64(..));
            Box::new(noise::NoiseGenerator::new(max, seed))
        }
    }
}

/// Samples of slice `z`, x fastest
pub fn generate_slice(sg: &dyn SampleGenerator, dims: Vector3<u32>, z: u32) -> Vec<u16> {
    (0..dims.x * dims.y)
        .into_par_iter()
        .map(|i| {
            let x = i % dims.x;
            let y = i / dims.x;
            sg.sample_at(vector![x, y, z])
        })
        .collect()
}

/// Write header and all samples into `writer`
pub fn write_volume<W>(
    sg: &dyn SampleGenerator,
    config: &Config,
    writer: &mut W,
    progress: &ProgressBar,
) -> Result<(), Box<dyn Error>>
where
    W: Write,
{
    writer.write_all(&generate_header(config))?;

    for z in 0..config.dims.z {
        let slice = generate_slice(sg, config.dims, z);
        for sample in slice {
            writer.write_u16::<LittleEndian>(sample)?;
        }
        progress.inc(1);
    }

    writer.flush()?;
    Ok(())
}

pub fn generate_vol(config: &Config) -> Result<(), Box<dyn Error>> {
    let gen = get_sample_generator(config);
    let file = open_create_file(&config.file_name)?;
    let mut writer = BufWriter::new(file);

    let progress = ProgressBar::new(config.dims.z as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{bar:40} {pos}/{len} slices ({eta})"),
    );

    write_volume(gen.as_ref(), config, &mut writer, &progress)?;
    progress.finish();

    log::info!("Generating finished, result in {:?}", config.file_name);
    Ok(())
}

#[cfg(test)]
mod test {

    use volcast::VoxelGrid;

    use super::*;

    fn config(generator: GeneratorConfig, dims: Vector3<u32>) -> Config {
        Config {
            dims,
            generator,
            file_name: "unused.dat".into(),
            seed: Some(42),
        }
    }

    fn generate(cfg: &Config) -> VoxelGrid {
        let gen = get_sample_generator(cfg);
        let mut bytes = Vec::new();
        write_volume(gen.as_ref(), cfg, &mut bytes, &ProgressBar::hidden()).unwrap();
        VoxelGrid::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn written_volume_loads() {
        let cfg = config(GeneratorConfig::Solid { sample: 4095 }, vector![12, 13, 14]);
        let grid = generate(&cfg);
        assert_eq!(grid.size(), 12 * 13 * 14);
        assert_eq!(grid.voxel(6, 6, 6).value(), 1.0);
        assert_eq!(grid.voxel(0, 0, 0).value(), 0.0);
    }

    #[test]
    fn slice_order_is_x_fastest() {
        struct Coords;
        impl SampleGenerator for Coords {
            fn sample_at(&self, c: Vector3<u32>) -> u16 {
                (c.x + 10 * c.y + 100 * c.z) as u16
            }
        }
        let slice = generate_slice(&Coords, vector![3, 2, 5], 4);
        assert_eq!(slice, vec![400, 401, 402, 410, 411, 412]);
    }

    #[test]
    fn noise_is_reproducible() {
        let cfg = config(GeneratorConfig::Noise { max: 4095 }, vector![8, 8, 8]);
        let a = generate(&cfg);
        let b = generate(&cfg);
        assert_eq!(a.voxels(), b.voxels());
    }
}
