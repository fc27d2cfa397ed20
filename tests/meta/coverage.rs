//! Keeps `tests/unit/` aligned with `src/` and wired into the `unit` test target

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const UNIT_ROOT: &str = "tests/unit.rs";

    /// Relative paths of every `.rs` file below `base`, skipping `mod.rs`
    fn source_files(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs")
                    && path.file_name().is_some_and(|name| name != "mod.rs")
                    && let Ok(relative) = path.strip_prefix(base)
                {
                    files.insert(relative.to_string_lossy().into_owned());
                }
            }
        }

        Ok(files)
    }

    fn module_directories(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut dirs = BTreeSet::new();
        for entry in fs::read_dir(base)? {
            let path = entry?.path();
            if path.is_dir()
                && let Some(name) = path.file_name()
            {
                dirs.insert(name.to_string_lossy().into_owned());
            }
        }
        Ok(dirs)
    }

    // Tests each library source file has exactly one unit test file and vice versa
    // Verified by deleting tests/unit/spatial/grid.rs
    #[test]
    fn test_unit_tests_mirror_sources() {
        let sources = source_files(Path::new(SRC_DIR)).expect("readable src");
        let units = source_files(Path::new(UNIT_DIR)).expect("readable tests/unit");

        let expected: BTreeSet<String> = sources
            .into_iter()
            .filter(|path| path != "lib.rs" && path != "main.rs")
            .collect();

        let missing: Vec<_> = expected.difference(&units).collect();
        let orphaned: Vec<_> = units.difference(&expected).collect();
        assert!(missing.is_empty(), "sources without unit tests: {missing:?}");
        assert!(orphaned.is_empty(), "unit tests without sources: {orphaned:?}");
    }

    // Tests every unit test directory is reachable from the unit test root
    // Verified by dropping the #[path] attribute for the io module
    #[test]
    fn test_unit_root_declares_every_directory() {
        let root = fs::read_to_string(UNIT_ROOT).expect("readable unit root");

        for dir in module_directories(Path::new(UNIT_DIR)).expect("readable tests/unit") {
            let declaration = format!("#[path = \"unit/{dir}/mod.rs\"]\nmod {dir};");
            assert!(root.contains(&declaration), "{UNIT_ROOT} does not load tests/unit/{dir}");
        }
    }

    // Tests each module file declares every test file beside it
    // Verified by removing `mod planner;` from tests/unit/algorithm/mod.rs
    #[test]
    fn test_module_files_declare_their_tests() {
        for dir in module_directories(Path::new(UNIT_DIR)).expect("readable tests/unit") {
            let dir_path = Path::new(UNIT_DIR).join(&dir);
            let module = fs::read_to_string(dir_path.join("mod.rs")).expect("readable mod.rs");

            for file in source_files(&dir_path).expect("readable module directory") {
                let name = file.trim_end_matches(".rs");
                assert!(
                    module.contains(&format!("mod {name};")),
                    "tests/unit/{dir}/mod.rs does not declare {name}"
                );
            }
        }
    }

    // Tests unit test files actually contain tests
    // Verified by emptying tests/unit/math/statistics.rs
    #[test]
    fn test_unit_files_contain_tests() {
        let units = source_files(Path::new(UNIT_DIR)).expect("readable tests/unit");

        let empty: Vec<_> = units
            .iter()
            .filter(|file| {
                !fs::read_to_string(Path::new(UNIT_DIR).join(file))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .collect();
        assert!(empty.is_empty(), "unit test files without tests: {empty:?}");
    }
}
