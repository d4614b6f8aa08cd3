use crate::common::file::{FileSpec, create_directory, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Empty project with a `.git` marker so the project root is the temp dir
#[fixture]
pub fn project_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    create_directory(&dir.path().join(".git"));
    dir
}

#[fixture]
pub fn app_ts() -> String {
    "export const app = () => 'hello';\n".to_string()
}

/// Project with a few tracked files, some ignored ones and a stored snapshot
#[fixture]
pub fn indexed_project_dir(project_dir: TempDir, app_ts: String) -> TempDir {
    let root = project_dir.path();

    write_file(FileSpec::new(root.join("src").join("app.ts"), app_ts));
    write_file(FileSpec::new(
        root.join("src").join("components").join("button.tsx"),
        "export const Button = () => <button />;\n".to_string(),
    ));
    write_file(FileSpec::new(
        root.join("src").join("components").join("button.test.tsx"),
        "it('renders', () => {});\n".to_string(),
    ));
    write_file(FileSpec::new(
        root.join("styles").join("main.css"),
        "body { margin: 0; }\n".to_string(),
    ));
    write_file(FileSpec::new(root.join("README.md"), "# demo\n".to_string()));
    write_file(FileSpec::new(
        root.join(".git").join("config.json"),
        "{}".to_string(),
    ));

    run_indexer_command(root, &["index", "."]).assert().success();

    project_dir
}

pub fn run_indexer_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("project-indexer")
        .expect("Failed to find project-indexer binary");
    cmd.env_remove("PROJECT_INDEXER_FILE");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run project-indexer");
    String::from_utf8(output.stdout).expect("stdout is not UTF-8")
}
