//! Property-based tests for index preservation and stem mapping

use pagebundle::restructure;
use pagebundle::tree::path::{bundle_stem, is_index_like};
use proptest::prelude::*;
use std::ffi::OsStr;
use std::fs;
use tempfile::TempDir;

fn page_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,8}(\\.[a-z0-9]{1,4}){0,2}".prop_map(|stem| format!("{}.md", stem))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The destination index is byte-identical after any run.
    #[test]
    fn destination_index_survives(
        original in any::<Vec<u8>>(),
        merged in proptest::collection::vec(any::<Vec<u8>>(), 0..4),
    ) {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("docs");
        let dest = temp.path().join("content");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("_index.md"), &original).unwrap();

        for (i, contents) in merged.iter().enumerate() {
            let dir = source.join(format!("level{}", i));
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(format!("index{}.md", i)), contents).unwrap();
        }
        fs::create_dir_all(&source).unwrap();

        let report = restructure(&source, &dest).unwrap();

        prop_assert_eq!(report.index_merges.len(), merged.len());
        prop_assert_eq!(fs::read(dest.join("_index.md")).unwrap(), original);
    }

    /// Every page lands in a directory named by its stem with its exact contents.
    #[test]
    fn pages_land_under_their_stem(
        name in page_name(),
        contents in any::<Vec<u8>>(),
    ) {
        prop_assume!(!is_index_like(OsStr::new(&name)));

        let temp = TempDir::new().unwrap();
        let source = temp.path().join("docs");
        let dest = temp.path().join("content");
        fs::create_dir_all(source.join("nested")).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("_index.md"), "OLD").unwrap();
        fs::write(source.join("nested").join(&name), &contents).unwrap();

        restructure(&source, &dest).unwrap();

        let stem = bundle_stem(OsStr::new(&name)).unwrap();
        prop_assert_eq!(format!("{}.md", stem.to_string_lossy()), name.clone());
        prop_assert_eq!(fs::read(dest.join(stem).join("_index.md")).unwrap(), contents);
    }
}
