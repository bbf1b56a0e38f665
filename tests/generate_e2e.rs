// tests/generate_e2e.rs
use std::fs;
use std::path::PathBuf;

use ag_scrape::file::write_atomic;
use ag_scrape::pygen;
use ag_scrape::scrape::extract;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ag_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const PAGE: &str = r##"<!DOCTYPE html>
<html>
<head><title>Aggressor Script Functions</title></head>
<body>
<div class="row">
<div class="col-lg-12">
<h2><a href="#-is64">-is64</a></h2>
<div>Checks if x64.
Args: none.</div>
<h2><a href="#bshell">bshell</a></h2>
<div>Run a command via the Beacon shell.
Arguments
$1 - beacon id
$2 - the command</div>
</div>
</div>
</body>
</html>"##;

#[test]
fn scrape_render_write_roundtrip() {
    let dir = tmp_dir("roundtrip");
    let out = dir.join("aggressor.py");

    let set = extract(PAGE).unwrap();
    write_atomic(&out, &pygen::render(&set)).unwrap();

    let written = fs::read_to_string(&out).unwrap();

    // doc comment sits directly above its stub, original name is the
    // dispatch key, identifier lost the hyphen
    assert!(written.contains(
        "# Checks if x64.\n# Args: none.\ndef is64(*args):\n    return communicate.call('-is64', args)\n"
    ));
    assert!(written.contains("def bshell(*args):\n    return communicate.call('bshell', args)\n"));

    // builtins trail with no doc above them
    assert!(written.contains("\ndef print(*args):\n    return communicate.call('print', args)\n"));
    assert!(written.contains("\ndef println(*args):\n    return communicate.call('println', args)\n"));
    assert!(!written.contains("# print"));

    // generated-file banner and the one import
    assert!(written.starts_with("#\n# For calling aggressor functions\n"));
    assert!(written.contains("\nimport communicate\n"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn same_page_twice_is_byte_identical() {
    let dir = tmp_dir("idempotent");
    let out = dir.join("aggressor.py");

    write_atomic(&out, &pygen::render(&extract(PAGE).unwrap())).unwrap();
    let first = fs::read(&out).unwrap();

    write_atomic(&out, &pygen::render(&extract(PAGE).unwrap())).unwrap();
    let second = fs::read(&out).unwrap();

    assert_eq!(first, second);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn write_replaces_existing_file_and_leaves_no_temp() {
    let dir = tmp_dir("replace");
    let out = dir.join("aggressor.py");
    fs::write(&out, "stale content from an older run").unwrap();

    write_atomic(&out, &pygen::render(&extract(PAGE).unwrap())).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(!written.contains("stale content"));
    assert!(written.contains("def is64(*args):"));

    // nothing but the output file in the directory
    let names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["aggressor.py"]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn write_creates_missing_parent_directories() {
    let dir = tmp_dir("parents");
    let out = dir.join("gen").join("aggressor.py");

    write_atomic(&out, &pygen::render(&extract(PAGE).unwrap())).unwrap();
    assert!(out.is_file());

    let _ = fs::remove_dir_all(&dir);
}
