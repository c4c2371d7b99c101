//! Argument parsing and validation
//! Uses library `clap`

use std::ffi::OsStr;

use clap::{Arg, Command, ValueHint};
use volcast::defaults::{MAX_DIMENSION, RAW_SAMPLE_MAX};

pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u64>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

/// Volume dimension, `<1;1000>`
pub fn is_dimension(num: &str) -> Result<(), String> {
    is_positive_number(num)?;
    match num.parse::<usize>() {
        Ok(n) if n <= MAX_DIMENSION => Ok(()),
        _ => Err(format!("Dimension must not exceed {MAX_DIMENSION}")),
    }
}

/// 12bit sample, `<0;4095>`
pub fn is_sample(num: &str) -> Result<(), String> {
    let max = RAW_SAMPLE_MAX as u16;
    match num.parse::<u16>() {
        Ok(n) if n <= max => Ok(()),
        _ => Err(format!("Sample must be in range <0;{max}>")),
    }
}

pub const GENERATOR_NAMES: &[&str] = &["solid", "sphere", "gradient", "noise"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("Vol-gen")
        .version("0.1.0")
        .about("Generator of 16bit volume files")
        .arg(
            Arg::new("dims")
                .help("Dimensions of volume")
                .long("dims")
                .short('d')
                .required(true)
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .validator(is_dimension),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generator")
                .long("generator")
                .short('g')
                .required(true)
                .takes_value(true)
                .value_name("NAME")
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("sample")
                .help("Value of generated object, maximum for noise")
                .long("sample")
                .value_name("VALUE")
                .default_value("4095")
                .validator(is_sample),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .value_name("SEED")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("output-file")
                .help("File name to output")
                .long("output-file")
                .short('o')
                .value_name("FILE")
                .allow_invalid_utf8(true)
                .value_hint(ValueHint::FilePath)
                .default_value_os(OsStr::new("a.dat")),
        )
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn validators() {
        assert!(is_dimension("1").is_ok());
        assert!(is_dimension("1000").is_ok());
        assert!(is_dimension("0").is_err());
        assert!(is_dimension("1001").is_err());
        assert!(is_dimension("x").is_err());

        assert!(is_sample("0").is_ok());
        assert!(is_sample("4095").is_ok());
        assert!(is_sample("4096").is_err());
    }

    #[test]
    fn parses_command_line() {
        let matches = get_command()
            .try_get_matches_from(["vol_gen", "--dims=4,5,6", "-g", "sphere"])
            .unwrap();
        let dims: Vec<&str> = matches.values_of("dims").unwrap().collect();
        assert_eq!(dims, ["4", "5", "6"]);
        assert_eq!(matches.value_of("sample"), Some("4095"));
    }

    #[test]
    fn rejects_large_dims() {
        let res = get_command().try_get_matches_from(["vol_gen", "--dims=4,5,1001", "-g", "solid"]);
        assert!(res.is_err());
    }
}
