use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::Context;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub addr: SocketAddr,
    /// Trunk output: index.html, wasm and js glue
    pub dist_dir: PathBuf,
    /// Resolves the `/images/...` paths the project cards point at
    pub images_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let addr = lookup("SITE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = addr
            .parse()
            .with_context(|| format!("invalid SITE_ADDR {addr:?}"))?;

        let dist_dir = lookup("SITE_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../dist"));
        let images_dir = lookup("SITE_IMAGES")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../assets/images"));

        Ok(Self { addr, dist_dir, images_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert!(config.dist_dir.ends_with("../dist"));
        assert!(config.images_dir.ends_with("../assets/images"));
    }

    #[test]
    fn overrides_from_env() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("SITE_ADDR", "0.0.0.0:8080"),
            ("SITE_DIST", "/srv/dist"),
            ("SITE_IMAGES", "/srv/images"),
        ]))
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.dist_dir, PathBuf::from("/srv/dist"));
        assert_eq!(config.images_dir, PathBuf::from("/srv/images"));
    }

    #[test]
    fn rejects_bad_addr() {
        let err = SiteConfig::from_lookup(lookup(&[("SITE_ADDR", "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains("SITE_ADDR"));
    }
}
