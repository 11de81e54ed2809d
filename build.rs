use indoc::indoc;
use std::env;
use std::fs;
use std::path::Path;

const CONFIG_REL: &str = "assets/default_config.json";

fn main() {
    let manifest = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let config_basename = Path::new(CONFIG_REL)
        .file_name()
        .and_then(|s| s.to_str())
        .expect("invalid config asset filename");
    let config_path = Path::new(&manifest).join(CONFIG_REL);
    // Re-run build if the default config changes
    println!("cargo:rerun-if-changed={}", config_path.display());

    // Copy the asset into OUT_DIR so the compiled crate can include it with
    // `include_bytes!(concat!(env!("OUT_DIR"), "/<basename>"))`, keeping
    // generated artifacts out of the tracked source tree.
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let config_dest = Path::new(&out_dir).join(config_basename);
    fs::copy(&config_path, &config_dest).expect("failed to copy default config to OUT_DIR");

    let gen_path = Path::new(&out_dir).join("generated_config.rs");
    let gen_src = format!(
        indoc!(
            r#"
                pub struct EmbeddedConfig {{ pub content: &'static [u8] }}

                pub const EMBEDDED_DEFAULT_CONFIG: EmbeddedConfig = EmbeddedConfig {{
                    content: include_bytes!(concat!(env!("OUT_DIR"), "/{basename}")),
                }};
            "#
        ),
        basename = config_basename,
    );
    fs::write(&gen_path, gen_src).expect("failed to write generated_config.rs to OUT_DIR");
}
