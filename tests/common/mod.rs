#![allow(dead_code)]

pub mod temp_files {
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A compiled artifact and its sibling documentation file in a fresh
    /// temporary directory.
    pub struct ArtifactDir {
        pub dir: TempDir,
        pub artifact: PathBuf,
        pub doc: PathBuf,
    }

    impl ArtifactDir {
        /// Artifact `name.dll` with no documentation written yet.
        pub fn new(name: &str) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let artifact = dir.path().join(format!("{name}.dll"));
            std::fs::write(&artifact, b"\0").unwrap();
            let doc = dir.path().join(format!("{name}.xml"));
            ArtifactDir { dir, artifact, doc }
        }

        /// Artifact plus documentation content.
        pub fn with_doc(name: &str, xml: &str) -> Self {
            let artifact = Self::new(name);
            artifact.write_doc(xml);
            artifact
        }

        pub fn write_doc(&self, xml: &str) {
            std::fs::write(&self.doc, xml).unwrap();
        }

        pub fn write(&self, file: &str, content: &str) -> PathBuf {
            let path = self.dir.path().join(file);
            std::fs::write(&path, content).unwrap();
            path
        }

        pub fn path(&self) -> &Path {
            self.dir.path()
        }
    }

    /// Documentation XML with one `<member>` per `(name, summary)` pair.
    pub fn doc_xml(members: &[(&str, &str)]) -> String {
        let mut xml = String::from("<?xml version=\"1.0\"?>\n<doc>\n    <assembly><name>Api</name></assembly>\n    <members>\n");
        for (name, summary) in members {
            xml.push_str(&format!(
                "        <member name=\"{name}\">\n            <summary>\n            {summary}\n            </summary>\n        </member>\n"
            ));
        }
        xml.push_str("    </members>\n</doc>\n");
        xml
    }
}
