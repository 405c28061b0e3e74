use crate::validation::Path;

/// Normalize a directive and make sure it compiles.
pub fn handle_normalize(raw: &str) -> crate::Result<String> {
    Ok(Path::new(raw)?.query().to_string())
}
