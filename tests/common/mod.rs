use std::fs;
use std::path::Path;

/// Writes `<root>/<package>/<module>.info` with the given body.
pub fn write_info(root: &Path, package: &str, module: &str, body: &str) {
    let dir = root.join(package);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.info", module)), body).unwrap();
}

pub fn info_body(name: &str, version_line: &str) -> String {
    format!(
        "name = {}\ndescription = Contrib module\ncore = 7.x\n{}\nproject = \"{}\"\ndatestamp = \"1500000000\"\n",
        name,
        version_line,
        name.to_lowercase()
    )
}
