use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn cli_exe() -> &'static str {
    env!("CARGO_BIN_EXE_metsval")
}

fn good_workspace() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("metsval-core")
        .join("tests")
        .join("fixtures")
        .join("workspaces")
        .join("good")
}

fn good_manifest() -> PathBuf {
    good_workspace().join("mets.xml")
}

fn run(args: &[&str]) -> Output {
    Command::new(cli_exe())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run metsval")
}

fn copy_workspace(to: &Path) {
    let from = good_workspace();
    for dir in ["", "OCR-D-IMG", "OCR-D-GT-SEG"] {
        std::fs::create_dir_all(to.join(dir)).expect("create dir");
        for entry in std::fs::read_dir(from.join(dir)).expect("read dir").flatten() {
            if entry.path().is_file() {
                std::fs::copy(entry.path(), to.join(dir).join(entry.file_name()))
                    .expect("copy fixture");
            }
        }
    }
}

#[test]
fn validate_command_reports_valid() {
    let manifest = good_manifest();
    let output = run(&["validate", "--manifest", manifest.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "validate command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("VALID"));
    assert!(!stdout.contains("warning:"));
}

#[test]
fn validate_command_checks_pages_on_request() {
    let manifest = good_manifest();
    let output = run(&["validate", "--manifest", manifest.to_str().unwrap(), "--pages"]);

    assert!(
        output.status.success(),
        "validate --pages failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pages checked: 2"));
}

#[test]
fn validate_command_prints_warnings() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_workspace(dir.path());
    let manifest = dir.path().join("mets.xml");
    let xml = std::fs::read_to_string(&manifest).expect("read manifest");
    let start = xml.find("<mods:genre").expect("genre element");
    let end = xml[start..].find("</mods:genre>").expect("genre end") + start + "</mods:genre>".len();
    std::fs::write(&manifest, format!("{}{}", &xml[..start], &xml[end..])).expect("write manifest");

    let output = run(&["validate", "--manifest", manifest.to_str().unwrap()]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("warning: genre is missing or empty"));
}

#[test]
fn validate_command_fails_with_reason() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_workspace(dir.path());
    std::fs::remove_file(dir.path().join("OCR-D-IMG").join("OCR-D-IMG_0002.png"))
        .expect("remove image");
    let manifest = dir.path().join("mets.xml");

    let output = run(&["validate", "--manifest", manifest.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File does not exist"), "stderr: {stderr}");
    assert!(stderr.contains("OCR-D-IMG_0002.png"));
}

#[test]
fn validate_command_rejects_bad_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("metsval.toml");
    std::fs::write(&config, "no_such_key = true\n").expect("write config");
    let manifest = good_manifest();

    let output = run(&[
        "validate",
        "--manifest",
        manifest.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("metsval.toml"));
}

#[test]
fn check_page_command_accepts_registered_image() {
    let page = good_workspace()
        .join("OCR-D-GT-SEG")
        .join("OCR-D-GT-SEG_0001.xml");
    let manifest = good_manifest();
    let output = run(&[
        "check-page",
        "--page",
        page.to_str().unwrap(),
        "--manifest",
        manifest.to_str().unwrap(),
    ]);

    assert!(
        output.status.success(),
        "check-page failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn check_page_command_rejects_unknown_image() {
    let dir = tempfile::tempdir().expect("tempdir");
    let page = dir.path().join("page.xml");
    std::fs::write(
        &page,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<pc:PcGts xmlns:pc="http://schema.primaresearch.org/PAGE/gts/pagecontent/2019-07-15">
  <pc:Page imageFilename="OCR-D-IMG/elsewhere.png" imageWidth="1" imageHeight="1"/>
</pc:PcGts>
"#,
    )
    .expect("write page");
    let manifest = good_manifest();

    let output = run(&[
        "check-page",
        "--page",
        page.to_str().unwrap(),
        "--manifest",
        manifest.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Wrong image URL"));
}

#[test]
fn labels_command_filters_by_prefix() {
    let output = run(&["labels", "--prefix", "condition/preservation/chemical-damage"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines = stdout.lines().collect::<Vec<_>>();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| line.contains("\tcondition/preservation/chemical-damage")));
    assert!(stdout.contains("condition/preservation/chemical-damage/foxing"));
}

#[test]
fn labels_command_lists_whole_vocabulary() {
    let output = run(&["labels"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 352);
}

#[test]
fn schemas_command_lists_bundled_namespaces() {
    let output = run(&["schemas"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("http://www.loc.gov/METS/"));
    for revision in ["2013-07-15", "2017-07-15", "2018-07-15", "2019-07-15"] {
        assert!(
            stdout.contains(&format!(
                "http://schema.primaresearch.org/PAGE/gts/pagecontent/{revision}"
            )),
            "missing PAGE {revision}: {stdout}"
        );
    }
    assert!(!stdout.contains("xlink"));
}
