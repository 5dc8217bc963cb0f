use anyhow::{bail, Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use weld_fetch::PageCache;
use weld_ident::{normalize_identifier, FSharpGenerator};

mod generate;
mod manifest;

use manifest::Manifest;

fn usage() {
    eprintln!("weld <normalize|generate|fetch> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  normalize <name>...                      Print the identifier for each raw name");
    eprintln!("  generate [--out <file>] [--json] <weld.toml>");
    eprintln!("                                           Generate F# bindings from a manifest");
    eprintln!("  fetch [--force] <weld.toml>              Download the manifest's pages into its cache");
    eprintln!();
    eprintln!("Logging is controlled by WELD_LOG (default: info).");
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("WELD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let mut args = env::args().skip(1);
    let Some(cmd) = args.next() else {
        usage();
        bail!("missing command");
    };
    let rest: Vec<String> = args.collect();

    match cmd.as_str() {
        "normalize" => cmd_normalize(&rest),
        "generate" => cmd_generate(&rest),
        "fetch" => cmd_fetch(&rest),
        "-h" | "--help" | "help" => {
            usage();
            Ok(())
        }
        _ => {
            usage();
            bail!("unknown command: {}", cmd)
        }
    }
}

fn cmd_normalize(names: &[String]) -> Result<()> {
    if names.is_empty() {
        usage();
        bail!("normalize requires at least one name");
    }

    for name in names {
        println!("{}", normalize_identifier(name));
    }
    Ok(())
}

fn cmd_generate(args: &[String]) -> Result<()> {
    let mut manifest_path = None;
    let mut out = None;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(a) = iter.next() {
        match a.as_str() {
            "--out" => {
                let path = iter.next().context("--out requires a path")?;
                out = Some(PathBuf::from(path));
            }
            "--json" => json = true,
            _ if a.starts_with("--") => bail!("unknown option: {}", a),
            _ => manifest_path = Some(PathBuf::from(a)),
        }
    }

    let manifest_path = manifest_path.context("generate requires a manifest path")?;
    let manifest = Manifest::load(&manifest_path)?;
    let base = manifest_base(&manifest_path);

    let module = generate::build_module(&manifest);
    module
        .validate()
        .with_context(|| format!("invalid bindings in {}", manifest_path.display()))?;

    let output = if json {
        module.to_json_pretty().context("serializing binding IR")?
    } else {
        FSharpGenerator::new(&module).generate()
    };

    match out.or_else(|| manifest.output_path(&base)) {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, output).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(
                "Generated {} components into {}",
                module.components.len(),
                path.display()
            );
        }
        None => print!("{}", output),
    }

    Ok(())
}

fn cmd_fetch(args: &[String]) -> Result<()> {
    let mut manifest_path = None;
    let mut force = false;

    for a in args {
        match a.as_str() {
            "--force" => force = true,
            _ if a.starts_with("--") => bail!("unknown option: {}", a),
            _ => manifest_path = Some(PathBuf::from(a)),
        }
    }

    let manifest_path = manifest_path.context("fetch requires a manifest path")?;
    let manifest = Manifest::load(&manifest_path)?;
    let cache = PageCache::new(manifest.cache_dir(&manifest_base(&manifest_path)))?;
    let requests = manifest.page_requests()?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("creating tokio runtime")?;

    let written = rt.block_on(async {
        if force {
            cache.download_all(&requests).await
        } else {
            cache.download_missing(&requests).await
        }
    })?;

    tracing::info!(
        "Downloaded {} of {} pages into {}",
        written.len(),
        requests.len(),
        cache.dir().display()
    );
    Ok(())
}

/// Directory relative manifest paths are resolved against
fn manifest_base(manifest_path: &Path) -> PathBuf {
    manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
