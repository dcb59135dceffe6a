use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_node-license-auditor").to_string();

        Self { dir, binary_path }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_manifest(&self, prod: &[&str], dev: &[&str]) {
        let table = |names: &[&str]| {
            names
                .iter()
                .map(|name| (name.to_string(), serde_json::Value::from("*")))
                .collect::<serde_json::Map<_, _>>()
        };
        let manifest = serde_json::json!({
            "name": "fixture-app",
            "version": "1.0.0",
            "dependencies": table(prod),
            "devDependencies": table(dev),
        });
        fs::write(self.root().join("package.json"), manifest.to_string()).unwrap();
    }

    pub fn write_policy(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.root().join(file_name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Install a package into node_modules; `None` writes a manifest without
    /// a license field.
    pub fn install(&self, package: &str, license: Option<&str>) {
        let dir = self.root().join("node_modules").join(package);
        fs::create_dir_all(&dir).unwrap();
        let manifest = match license {
            Some(license) => serde_json::json!({ "name": package, "license": license }),
            None => serde_json::json!({ "name": package }),
        };
        fs::write(dir.join("package.json"), manifest.to_string()).unwrap();
    }

    /// Run the auditor from the project root
    pub fn run_auditor(&self, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run node-license-auditor")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Pull the JSON value that follows `label` in text output
pub fn block_after(text: &str, label: &str) -> serde_json::Value {
    let start = text.find(label).expect("label present") + label.len();
    let rest = &text[start..];
    let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<serde_json::Value>();
    stream.next().expect("a JSON block").expect("valid JSON")
}
