// Regenerates the bundler configuration consumed by the ui build.
//
// Usage: gen_bundler_config [output-path]

use std::path::PathBuf;

use live_tda::core::bundler::BundlerConfig;
use live_tda::core::config::Environment;

fn main() -> std::io::Result<()> {
    let output = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("ui/bundler.config.json"), PathBuf::from);

    let env = Environment::detect();
    let config = BundlerConfig::for_env(env);
    config.write(&output)?;
    println!("Wrote {:?} bundler config to {:?}", env, output);
    Ok(())
}
