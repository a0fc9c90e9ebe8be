use crate::catalog::{Catalog, SetOrigin};
use std::io::{self, Write};

/// Write one line per frame set: name, frame count, width and origin
pub fn execute(catalog: &Catalog, out: &mut impl Write) -> io::Result<()> {
    let name_width = catalog.iter().map(|set| set.name.len()).max().unwrap_or(0);

    for set in catalog.iter() {
        let origin = match set.origin {
            SetOrigin::Builtin => "builtin",
            SetOrigin::Config => "config",
        };
        writeln!(
            out,
            "{:<name_width$}  {:>3} frames  {:>3} cols  {origin}",
            set.name,
            set.frames.len(),
            set.display_width(),
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_builtin_sets() {
        let catalog = Catalog::builtin().unwrap();
        let mut out = Vec::new();
        execute(&catalog, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), catalog.len());
        assert!(text.lines().any(|l| l.starts_with("loading") && l.contains("10 frames")));
    }
}
