use std::{ffi::OsString, str::FromStr};

use clap::ArgMatches;
use nalgebra::{vector, Vector3};

/// Transform `Values` into `Vector`
fn values_to_vector3<T>(args: &ArgMatches, key: &str) -> Result<Vector3<T>, String>
where
    T: FromStr + Copy,
{
    let vals = args
        .values_of(key)
        .ok_or(format!("Missing argument {key}"))?
        .map(|v| v.parse::<T>().map_err(|_| format!("Cannot parse {key}")))
        .collect::<Result<Vec<T>, String>>()?;

    match vals[..] {
        [x, y, z] => Ok(vector![x, y, z]),
        _ => Err(format!("{key} needs 3 values")),
    }
}

/// App configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct Config {
    /// Dimensions of volume
    pub dims: Vector3<u32>,
    /// Type of generator to be used
    pub generator: GeneratorConfig,
    /// Output file name
    pub file_name: OsString,
    /// Optional seed for RNG, to replicate results
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_args(args: ArgMatches) -> Result<Config, String> {
        let dims = values_to_vector3(&args, "dims")?;
        let generator = GeneratorConfig::from_args(&args)?;
        let file_name = args
            .value_of_os("output-file")
            .ok_or("Missing output file")?
            .into();
        let seed = args
            .value_of("seed")
            .map(|s| s.parse().map_err(|_| "Cannot parse seed".to_string()))
            .transpose()?;

        Ok(Config {
            dims,
            generator,
            file_name,
            seed,
        })
    }
}

/// Settings specific to generator variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorConfig {
    /// Solid block with empty border
    Solid { sample: u16 },
    /// Ball in the middle of the volume
    Sphere { sample: u16 },
    /// Values rising with depth, zero at the front
    Gradient { sample: u16 },
    /// Random values up to `max`
    Noise { max: u16 },
}

impl GeneratorConfig {
    pub fn from_args(args: &ArgMatches) -> Result<GeneratorConfig, String> {
        let name = args.value_of("generator").ok_or("Missing generator")?;
        let sample: u16 = args
            .value_of("sample")
            .ok_or("Missing sample")?
            .parse()
            .map_err(|_| "Cannot parse sample".to_string())?;

        match name {
            "solid" => Ok(GeneratorConfig::Solid { sample }),
            "sphere" => Ok(GeneratorConfig::Sphere { sample }),
            "gradient" => Ok(GeneratorConfig::Gradient { sample }),
            "noise" => Ok(GeneratorConfig::Noise { max: sample }),
            _ => Err(format!("Unknown generator {name}")),
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::args::get_command;

    #[test]
    fn config_from_args() {
        let args = get_command()
            .try_get_matches_from([
                "vol_gen",
                "--dims=10,20,30",
                "-g",
                "noise",
                "--sample",
                "100",
                "--seed",
                "7",
                "-o",
                "out.dat",
            ])
            .unwrap();
        let cfg = Config::from_args(args).unwrap();

        assert_eq!(cfg.dims, vector![10, 20, 30]);
        assert_eq!(cfg.generator, GeneratorConfig::Noise { max: 100 });
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.file_name, OsString::from("out.dat"));
    }
}
