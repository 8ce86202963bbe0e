use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Columns the dashboard cannot start without, as (source, canonical) names.
const REQUIRED_COLUMNS: [(&str, &str); 4] = [
    ("datetime", "Date"),
    ("temp", "Temperature"),
    ("humidity", "Humidity"),
    ("conditions", "Condition"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("weather_data.csv");

    // WEATHER_CSV overrides the bundled fixture
    let src = env::var_os("WEATHER_CSV")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("../fixtures/weather_data.csv"));

    if src.exists() {
        // Fail the build early on a file the app would refuse at startup anyway.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_path(&src)
            .expect("failed to open weather CSV");
        let headers = rdr.headers().expect("weather CSV has no header row").clone();
        for (column, canonical) in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column || h == canonical) {
                panic!("{} is missing required column `{}`", src.display(), column);
            }
        }
        fs::copy(&src, &dest).unwrap();
    } else {
        println!("cargo:warning=weather CSV {} not found; embedding an empty dataset", src.display());
        fs::write(&dest, "datetime,temp,humidity,conditions\n").unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", src.display());
    println!("cargo:rerun-if-env-changed=WEATHER_CSV");
}
