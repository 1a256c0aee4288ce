const SECRETS_FILE: &str = "secrets.local.rs";

/// Constants copied from the secrets file into `SKYLIGHT_*` build env vars.
const SECRET_CONSTS: &[&str] = &[
    "WIFI_SSID",
    "WIFI_PASS",
    "WIFI_SSID_ALT",
    "WIFI_PASS_ALT",
    "N2YO_API_KEY",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", SECRETS_FILE);
    for name in SECRET_CONSTS {
        println!("cargo:rerun-if-env-changed=SKYLIGHT_{}", name);
    }
    emit_secrets();
    embuild::espidf::sysenv::output();
}

fn emit_secrets() {
    let Ok(src) = std::fs::read_to_string(SECRETS_FILE) else {
        println!(
            "cargo:warning={} not found; relying on SKYLIGHT_* environment variables",
            SECRETS_FILE
        );
        return;
    };

    for name in SECRET_CONSTS {
        if let Some(v) = extract_rust_str_const(&src, name) {
            println!("cargo:rustc-env=SKYLIGHT_{}={}", name, v);
        }
    }
}

fn extract_rust_str_const(src: &str, name: &str) -> Option<String> {
    let needle = format!("pub const {}:", name);
    for line in src.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || !trimmed.starts_with(&needle) {
            continue;
        }
        let start = trimmed.find('"')?;
        let end = trimmed[start + 1..].find('"')? + start + 1;
        return Some(trimmed[start + 1..end].to_string());
    }
    None
}
