//! Reading configuration files.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

/// Reads and returns the content of the specified text file.
pub fn read_text_file(file_path: impl AsRef<Path>) -> io::Result<String> {
    let file = File::open(file_path)?;
    let mut text = String::new();
    let _ = BufReader::new(file).read_to_string(&mut text)?;
    Ok(text)
}

/// Reads the RON (Rusty Object Notation) file at the given path and
/// deserializes the contents into an object of type `T`.
#[cfg(feature = "ron")]
pub fn parse_ron_file<T>(file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: for<'de> serde::de::Deserialize<'de>,
{
    use anyhow::Context;

    let file_path = file_path.as_ref();
    log::debug!("Parsing RON file {}", file_path.display());

    let text = read_text_file(file_path)
        .map_err(anyhow::Error::from)
        .with_context(|| format!("Could not open {}", file_path.display()))?;

    ron::from_str::<T>(&text)
        .map_err(anyhow::Error::from)
        .with_context(|| format!("Invalid syntax in {}", file_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs, process};

    fn temporary_file_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("freelook_math_{}_{name}", process::id()))
    }

    #[test]
    fn reading_written_text_file_gives_same_text() {
        let path = temporary_file_path("text.txt");
        fs::write(&path, "near = 0.1").unwrap();

        let text = read_text_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(text, "near = 0.1");
    }

    #[test]
    fn reading_missing_text_file_fails() {
        assert!(read_text_file(temporary_file_path("missing.txt")).is_err());
    }

    #[cfg(feature = "ron")]
    #[test]
    fn parsing_ron_file_with_invalid_syntax_reports_path() {
        let path = temporary_file_path("invalid.ron");
        fs::write(&path, "(unclosed: 1.0").unwrap();

        let error = parse_ron_file::<std::collections::HashMap<String, f32>>(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(format!("{error:#}").contains("Invalid syntax"));
    }
}
