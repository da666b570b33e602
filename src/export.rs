//! Tabular export of Saltykov results
//!
//! Persists the unfolded distribution as delimited text: `;`-separated for
//! `.csv` files and tab-separated for `.txt` files, with the same columns
//! and rounding the interactive workflow prints.

use grainsize_core::{Error, Result};
use grainsize_stereology::SaltykovResult;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SaltykovRow {
    mid_points: f64,
    freqs: f64,
    freqs2one: f64,
    cum_vol: f64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Write the midpoints, class frequencies, and cumulative volumes of a
/// Saltykov run to a delimited text file
///
/// The delimiter is chosen by extension: `;` for `.csv`, tab for `.txt`.
/// Any other extension is an `InvalidParameter` error.
pub fn write_saltykov_table<P: AsRef<Path>>(path: P, result: &SaltykovResult) -> Result<()> {
    let path = path.as_ref();
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => b';',
        Some("txt") => b'\t',
        _ => {
            return Err(Error::InvalidParameter(
                "the output file must be specified as .csv or .txt".to_string(),
            ));
        }
    };

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| Error::Other(e.into()))?;

    let percents = result.cumulative_volume.percents();
    for ((&mid, &freq), &cum) in result
        .mid_points
        .iter()
        .zip(&result.frequencies)
        .zip(percents)
    {
        writer
            .serialize(SaltykovRow {
                mid_points: round_to(mid, 3),
                freqs: round_to(freq, 4),
                freqs2one: round_to(freq * result.bin_width, 3),
                cum_vol: round_to(cum, 2),
            })
            .map_err(|e| Error::Other(e.into()))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grainsize_stereology::{saltykov, SaltykovConfig};

    fn result() -> SaltykovResult {
        let diameters = vec![5.0, 8.0, 10.0, 10.0, 12.0, 15.0, 15.0, 15.0, 20.0, 25.0];
        saltykov(&diameters, &SaltykovConfig::with_count(5)).unwrap()
    }

    #[test]
    fn test_csv_export() {
        let path = std::env::temp_dir().join("grainsize_export_test.csv");
        write_saltykov_table(&path, &result()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "mid_points;freqs;freqs2one;cum_vol");
        assert_eq!(lines.count(), 5);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_txt_export_is_tab_separated() {
        let path = std::env::temp_dir().join("grainsize_export_test.txt");
        write_saltykov_table(&path, &result()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.lines().next().unwrap().contains('\t'));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let path = std::env::temp_dir().join("grainsize_export_test.dat");
        let err = write_saltykov_table(&path, &result()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }
}
