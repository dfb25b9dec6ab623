use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Serialize};

use crate::{error::CliError, settings::OutputFormat};

pub fn to_string<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Ron => ron::to_string(value)?,
    })
}

pub fn print<T: Serialize>(value: &T, format: OutputFormat) -> Result<(), CliError> {
    println!("{}", to_string(value, format)?);
    Ok(())
}

/// Format is picked by extension: `.ron` is RON, anything else JSON.
pub fn format_of(path: &Path) -> OutputFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("ron") => OutputFormat::Ron,
        _ => OutputFormat::Json,
    }
}

pub fn from_str<T: DeserializeOwned>(text: &str, format: OutputFormat) -> Result<T, CliError> {
    Ok(match format {
        OutputFormat::Json => serde_json::from_str(text)?,
        OutputFormat::Ron => ron::from_str(text)?,
    })
}

pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    from_str(&text, format_of(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazecore::{generate, Algorithm, Coord, Grid};
    use std::path::PathBuf;

    #[test]
    fn format_by_extension() {
        assert_eq!(format_of(&PathBuf::from("maze.ron")), OutputFormat::Ron);
        assert_eq!(format_of(&PathBuf::from("maze.RON")), OutputFormat::Ron);
        assert_eq!(format_of(&PathBuf::from("maze.json")), OutputFormat::Json);
        assert_eq!(format_of(&PathBuf::from("maze")), OutputFormat::Json);
    }

    #[test]
    fn grid_round_trips_through_both_formats() {
        let grid = generate(5, Algorithm::Automata, Some(8)).unwrap();
        for format in [OutputFormat::Json, OutputFormat::Ron] {
            let text = to_string(&grid, format).unwrap();
            let restored: Grid = from_str(&text, format).unwrap();
            assert_eq!(restored, grid);
        }
    }

    #[test]
    fn paths_parse_as_pairs() {
        let path: Vec<Coord> = from_str("[[0, 0], [0, 1]]", OutputFormat::Json).unwrap();
        assert_eq!(path, vec![Coord(0, 0), Coord(0, 1)]);

        let path: Vec<Coord> = from_str("[(0, 0), (1, 0)]", OutputFormat::Ron).unwrap();
        assert_eq!(path, vec![Coord(0, 0), Coord(1, 0)]);
    }

    #[test]
    fn malformed_grid_is_rejected() {
        assert!(from_str::<Grid>("[[2, 0], [0, 0]]", OutputFormat::Json).is_err());
    }
}
