use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub const LIBRARY_CSV: &str = "\
title,author,genre,description
Dune,Frank Herbert,SciFi,desert planet spice empire and giant worms
Foundation,Isaac Asimov,SciFi,galactic empire collapse and psychohistory
Pride and Prejudice,Jane Austen,Romance,marriage manners and pride in the english countryside
Emma,Jane Austen,Romance,matchmaking and manners in a country village
Neuromancer,William Gibson,Cyberpunk,hackers and artificial intelligence in cyberspace
Hyperion,Dan Simmons,SciFi,pilgrims travel to a distant planet
";

/// Bookmatch command isolated from the caller's environment and config
///
/// `BOOKMATCH_CONFIG_DIR` points inside `dir` so no user-wide config leaks in.
#[allow(dead_code)]
pub fn bookmatch(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("bookmatch");
    cmd.current_dir(dir)
        .env("BOOKMATCH_CONFIG_DIR", dir.join("global-config"))
        .env_remove("BOOKMATCH_CATALOG")
        .env_remove("BOOKMATCH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `dir/name` and return the path
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

/// Write the English sample library and return its path
#[allow(dead_code)]
pub fn write_library(dir: &Path) -> PathBuf {
    write_file(dir, "library.csv", LIBRARY_CSV)
}
