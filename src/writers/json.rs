use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Indentation used by the small config descriptors
pub const CONFIG_INDENT: &[u8] = b"    ";
/// Indentation used by STAC documents
pub const STAC_INDENT: &[u8] = b"  ";

/// Serialize `value` as pretty-printed JSON to `path`, replacing any existing file
pub fn write_json<T: Serialize>(path: &Path, value: &T, indent: &[u8]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let formatter = PrettyFormatter::with_indent(indent);
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut serializer)?;

    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_four_space_indent() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");

        write_json(&path, &json!({"bbox": [1.0, 2.0, 3.0, 4.0]}), CONFIG_INDENT)?;

        let content = std::fs::read_to_string(&path)?;
        assert!(content.starts_with("{\n    \"bbox\": [\n        1.0,"));
        assert!(content.ends_with("}\n"));
        Ok(())
    }
}
